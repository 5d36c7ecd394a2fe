//! Static upstream payloads used across harnesses.

use serde_json::{json, Value};

/// The three-aircraft example: two Israeli, one Turkish.
pub fn israel_turkey_payload() -> Value {
    json!({
        "time": 1_700_000_100,
        "states": [
            ["abc123", "AA1     ", "Israel", 1_700_000_000, 1_700_000_001, 34.8, 32.0, 9144.0, false, 220.1, 270.0, 0.0, null, 9300.0, "1000", false, 0],
            ["def456", "BB2     ", "Turkey", 1_700_000_000, 1_700_000_002, 32.9, 39.9, 10668.0, false, 240.3, 90.0, -2.1, null, 10800.0, "2000", false, 0],
            ["ghi789", "CC3     ", "Israel", 1_700_000_000, 1_700_000_003, 35.0, 33.1, 3048.0, false, 150.0, 180.0, 5.5, null, 3100.0, "3000", false, 0]
        ]
    })
}

/// A realistic mixed payload: complete rows, a null country, a row truncated
/// after origin_country, and a row too short to carry a country at all.
pub fn mixed_payload() -> Value {
    json!({
        "time": 1_700_000_100,
        "states": [
            ["4b1814", "SWR123  ", "Switzerland", 1_700_000_000, 1_700_000_001, 30.1, 38.2, 11582.4, false, 245.0, 120.5, 0.0, null, 11887.2, "1000", false, 0],
            ["4ba9c3", "THY7TK  ", "Turkey", 1_700_000_000, 1_700_000_001, 29.0, 41.0, 3657.6, false, 160.2, 45.0, 7.8, null, 3700.0, "4521", false, 0],
            ["738065", "ELY001  ", "Israel", 1_700_000_000, 1_700_000_001, 33.0, 35.0, 12192.0, false, 250.0, 300.0, 0.0, null, 12400.0, "6301", false, 0],
            ["4ba9c4", "THY8TK  ", "Turkey", 1_700_000_000, 1_700_000_001, 28.9, 41.2, 0.0, true, 0.0, 0.0, null, null, null, null, false, 0],
            ["000000", null, null, null, 1_700_000_001, null, null, null, false, null, null, null, null, null, null, false, 0],
            ["4ba9c5", "PGT22   ", "Turkey"],
            ["xyz999"]
        ]
    })
}

pub const EMPTY_STATES_NULL: &str = r#"{"time":1700000100,"states":null}"#;
pub const EMPTY_STATES_MISSING: &str = r#"{"time":1700000100}"#;
pub const RATE_LIMIT_HTML: &str = "<html><body>Too many requests</body></html>";
