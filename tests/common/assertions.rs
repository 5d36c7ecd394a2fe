//! Domain-specific assertions for skyscan harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* pipeline invariant was violated.

use serde_json::Value;
use skyscan::CountryCount;

/// Assert that a country table holds `count` for `country` (`None` = null group).
///
/// ```rust
/// assert_count!(counts, Some("Israel"), 2);
/// ```
#[macro_export]
macro_rules! assert_count {
    ($counts:expr, $country:expr, $count:expr) => {{
        let counts: &[skyscan::CountryCount] = &$counts;
        let country: Option<&str> = $country;
        match counts.iter().find(|c| c.country.as_deref() == country) {
            Some(c) => pretty_assertions::assert_eq!(
                c.count, $count,
                "assert_count! failed for {:?}", country
            ),
            None => panic!(
                "assert_count! failed: {:?} not in table.\n  table: {:?}",
                country, counts
            ),
        }
    }};
}

/// Counts must be non-increasing, and equal counts must appear in the order
/// their country was first seen in `first_seen`.
pub fn assert_counts_ordered(counts: &[CountryCount], first_seen: &[Option<String>]) {
    for pair in counts.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.count >= b.count,
            "counts not descending: {a:?} before {b:?}\n  table: {counts:?}"
        );
        if a.count == b.count {
            let pos = |c: &CountryCount| {
                first_seen
                    .iter()
                    .position(|seen| *seen == c.country)
                    .unwrap_or_else(|| panic!("{c:?} never seen in input"))
            };
            assert!(
                pos(a) < pos(b),
                "tie broken out of first-appearance order: {a:?} before {b:?}"
            );
        }
    }
}

/// Every JSON row (named projection) reports `country` as origin_country.
pub fn assert_all_from(rows: &[Value], country: &str) {
    for row in rows {
        assert_eq!(
            row.get("origin_country").and_then(Value::as_str),
            Some(country),
            "row from the wrong country: {row}"
        );
    }
}
