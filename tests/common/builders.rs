//! Test builders — ergonomic constructors for state vectors.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use serde_json::{json, Value};
use skyscan::core::schema::{field_index, SCHEMA_LEN};
use skyscan::RawStateVector;

// ---------------------------------------------------------------------------
// StateVectorBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for upstream state-vector rows.
///
/// Starts from a complete, plausible airborne aircraft; setters address fields
/// by name.
///
/// # Example
///
/// ```rust
/// let row = StateVectorBuilder::new("4b1814")
///     .callsign("SWR123")
///     .country("Switzerland")
///     .position(8.55, 47.45)
///     .build();
/// ```
pub struct StateVectorBuilder {
    values: Vec<Value>,
    truncate: Option<usize>,
}

impl StateVectorBuilder {
    pub fn new(icao24: &str) -> Self {
        let values = vec![
            json!(icao24),
            json!("TEST1   "),
            json!("Turkey"),
            json!(1_700_000_000),
            json!(1_700_000_001),
            json!(32.85),
            json!(39.93),
            json!(10972.8),
            json!(false),
            json!(231.5),
            json!(88.2),
            json!(0.0),
            Value::Null,
            json!(11277.6),
            json!("2000"),
            json!(false),
            json!(0),
        ];
        debug_assert_eq!(values.len(), SCHEMA_LEN);
        Self {
            values,
            truncate: None,
        }
    }

    pub fn set(mut self, field: &str, value: impl Into<Value>) -> Self {
        let i = field_index(field).unwrap_or_else(|| panic!("unknown field {field:?}"));
        self.values[i] = value.into();
        self
    }

    pub fn callsign(self, callsign: &str) -> Self {
        self.set("callsign", callsign)
    }

    pub fn country(self, country: &str) -> Self {
        self.set("origin_country", country)
    }

    /// origin_country = null.
    pub fn no_country(self) -> Self {
        self.set("origin_country", Value::Null)
    }

    pub fn position(self, longitude: f64, latitude: f64) -> Self {
        self.set("longitude", longitude).set("latitude", latitude)
    }

    pub fn on_ground(self) -> Self {
        self.set("on_ground", true).set("velocity", 0.0)
    }

    /// Keep only the first `len` positions.
    pub fn truncate(mut self, len: usize) -> Self {
        self.truncate = Some(len);
        self
    }

    pub fn values(self) -> Vec<Value> {
        let mut values = self.values;
        if let Some(len) = self.truncate {
            values.truncate(len);
        }
        values
    }

    pub fn json(self) -> Value {
        Value::Array(self.values())
    }

    pub fn build(self) -> RawStateVector {
        RawStateVector::new(self.values())
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A complete row for `country`.
pub fn row(icao24: &str, country: &str) -> RawStateVector {
    StateVectorBuilder::new(icao24).country(country).build()
}

/// Complete rows, one per `(icao24, country)` pair, in order.
pub fn rows(pairs: &[(&str, &str)]) -> Vec<RawStateVector> {
    pairs.iter().map(|(icao, country)| row(icao, country)).collect()
}

/// `{"time": .., "states": [...]}` wrapping the given rows.
pub fn payload(states: &[RawStateVector]) -> Value {
    json!({ "time": 1_700_000_100, "states": states })
}
