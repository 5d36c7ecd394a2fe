//! Request-scoped entities for skyscan-core.
//!
//! A [`BoundingBox`] goes out to the upstream API, [`RawStateVector`]s come
//! back, and the pipeline turns them into [`NormalizedState`] records and a
//! [`CountryCount`] table. None of these outlive the request that built them.

use crate::schema::{self, SCHEMA_LEN, STATE_FIELDS};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

// ---------------------------------------------------------------------------
// BoundingBox
// ---------------------------------------------------------------------------

/// Decimal-degree query region, kept exactly as the caller wrote it.
///
/// Bounds are forwarded to the upstream API verbatim. [`BoundingBox::issues`]
/// can point out bounds that look wrong, but nothing rejects them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub lamin: String,
    pub lamax: String,
    pub lomin: String,
    pub lomax: String,
}

/// Something suspicious about a [`BoundingBox`]. Diagnostic only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BboxIssue {
    #[error("{bound} is not a number: {value:?}")]
    NotANumber { bound: &'static str, value: String },
    #[error("{min} ({min_value}) is greater than {max} ({max_value})")]
    Inverted {
        min: &'static str,
        min_value: String,
        max: &'static str,
        max_value: String,
    },
}

impl BoundingBox {
    pub fn new(
        lamin: impl Into<String>,
        lamax: impl Into<String>,
        lomin: impl Into<String>,
        lomax: impl Into<String>,
    ) -> Self {
        Self {
            lamin: lamin.into(),
            lamax: lamax.into(),
            lomin: lomin.into(),
            lomax: lomax.into(),
        }
    }

    /// The four bounds as upstream query parameters, in the order the API
    /// documents them.
    pub fn query_pairs(&self) -> [(&'static str, &str); 4] {
        [
            ("lamin", self.lamin.as_str()),
            ("lamax", self.lamax.as_str()),
            ("lomin", self.lomin.as_str()),
            ("lomax", self.lomax.as_str()),
        ]
    }

    /// Replace any bound for which an override is given.
    pub fn with_overrides(
        &self,
        lamin: Option<String>,
        lamax: Option<String>,
        lomin: Option<String>,
        lomax: Option<String>,
    ) -> Self {
        Self {
            lamin: lamin.unwrap_or_else(|| self.lamin.clone()),
            lamax: lamax.unwrap_or_else(|| self.lamax.clone()),
            lomin: lomin.unwrap_or_else(|| self.lomin.clone()),
            lomax: lomax.unwrap_or_else(|| self.lomax.clone()),
        }
    }

    /// Non-numeric or inverted bounds. An empty result means the box looks sane.
    pub fn issues(&self) -> Vec<BboxIssue> {
        let mut issues = Vec::new();
        for (min, max) in [("lamin", "lamax"), ("lomin", "lomax")] {
            let lo = self.parse_bound(min, &mut issues);
            let hi = self.parse_bound(max, &mut issues);
            if let (Some(lo), Some(hi)) = (lo, hi) {
                if lo > hi {
                    issues.push(BboxIssue::Inverted {
                        min,
                        min_value: self.bound(min).to_string(),
                        max,
                        max_value: self.bound(max).to_string(),
                    });
                }
            }
        }
        issues
    }

    fn bound(&self, name: &str) -> &str {
        match name {
            "lamin" => &self.lamin,
            "lamax" => &self.lamax,
            "lomin" => &self.lomin,
            _ => &self.lomax,
        }
    }

    fn parse_bound(&self, name: &'static str, issues: &mut Vec<BboxIssue>) -> Option<f64> {
        let value = self.bound(name);
        match value.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Some(v),
            _ => {
                issues.push(BboxIssue::NotANumber {
                    bound: name,
                    value: value.to_string(),
                });
                None
            }
        }
    }
}

// ---------------------------------------------------------------------------
// RawStateVector
// ---------------------------------------------------------------------------

/// One aircraft as delivered upstream: an ordered list of JSON values.
///
/// May be shorter than the schema. Positions beyond [`SCHEMA_LEN`] are kept
/// but have no name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawStateVector(Vec<Value>);

impl RawStateVector {
    pub fn new(values: Vec<Value>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> &[Value] {
        &self.0
    }

    /// Value of a named field, or `None` when the name is unknown or the row
    /// is too short to carry it.
    pub fn field(&self, name: &str) -> Option<&Value> {
        schema::field_index(name).and_then(|i| self.0.get(i))
    }

    pub fn origin_country(&self) -> Option<&Value> {
        self.field(schema::ORIGIN_COUNTRY)
    }

    /// Named-field view of this row. Absent positions become `null`.
    pub fn normalize(&self) -> NormalizedState {
        NormalizedState {
            values: std::array::from_fn(|i| self.0.get(i).cloned().unwrap_or(Value::Null)),
        }
    }
}

impl From<Vec<Value>> for RawStateVector {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

// ---------------------------------------------------------------------------
// NormalizedState
// ---------------------------------------------------------------------------

/// A state vector re-expressed as canonical field name → value.
///
/// Serializes as a JSON object with keys in schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedState {
    values: [Value; SCHEMA_LEN],
}

impl NormalizedState {
    /// Value of a named field. `None` only for names outside the schema;
    /// missing data is `Some(&Value::Null)`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        schema::field_index(name).map(|i| &self.values[i])
    }

    /// `(name, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        STATE_FIELDS.iter().copied().zip(self.values.iter())
    }
}

impl Serialize for NormalizedState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(SCHEMA_LEN))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// CountryCount
// ---------------------------------------------------------------------------

/// Number of admitted state vectors reporting one origin country.
///
/// `country` is `None` for rows whose origin_country is null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryCount {
    pub country: Option<String>,
    pub count: usize,
}

impl CountryCount {
    pub fn new(country: Option<&str>, count: usize) -> Self {
        Self {
            country: country.map(str::to_string),
            count,
        }
    }

    /// Display name; `"Unknown"` for the null group.
    pub fn label(&self) -> &str {
        self.country.as_deref().unwrap_or("Unknown")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
