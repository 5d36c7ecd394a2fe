//! Normalizer & aggregator — turns raw upstream rows into the filtered,
//! counted dataset a page or API response is built from.
//!
//! Every function here is pure: it borrows the fetched rows and never mutates
//! them. A row only takes part in counting and filtering if the configured
//! [`AdmissionPolicy`] admits it, and the same policy governs every output.

use crate::schema::SCHEMA_LEN;
use crate::types::{CountryCount, NormalizedState, RawStateVector};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Policies
// ---------------------------------------------------------------------------

/// Minimum row length for a state vector to be counted and filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdmissionPolicy {
    /// Rows carrying at least an origin_country (length ≥ 3). Missing
    /// trailing fields become `null` in the named projection.
    #[default]
    Lenient,
    /// Only complete rows (length ≥ 17).
    Strict,
}

impl AdmissionPolicy {
    pub fn min_len(self) -> usize {
        match self {
            AdmissionPolicy::Lenient => 3,
            AdmissionPolicy::Strict => SCHEMA_LEN,
        }
    }

    pub fn admits(self, row: &RawStateVector) -> bool {
        row.len() >= self.min_len()
    }
}

impl std::fmt::Display for AdmissionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdmissionPolicy::Lenient => write!(f, "lenient"),
            AdmissionPolicy::Strict => write!(f, "strict"),
        }
    }
}

/// Shape in which filtered rows are handed to a consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Projection {
    /// [`NormalizedState`] records keyed by field name.
    #[default]
    Named,
    /// The upstream positional arrays, unchanged.
    Raw,
}

/// Filtered rows in one of the two [`Projection`]s.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Rows {
    Named(Vec<NormalizedState>),
    Raw(Vec<RawStateVector>),
}

impl Rows {
    pub fn empty(projection: Projection) -> Self {
        match projection {
            Projection::Named => Rows::Named(Vec::new()),
            Projection::Raw => Rows::Raw(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Rows::Named(rows) => rows.len(),
            Rows::Raw(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Result of one pipeline pass: the rows matching the target country plus the
/// per-country table over every admitted row.
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    matched: Vec<&'a RawStateVector>,
    counts: Vec<CountryCount>,
    admitted: usize,
}

impl<'a> Selection<'a> {
    pub fn matched(&self) -> &[&'a RawStateVector] {
        &self.matched
    }

    pub fn counts(&self) -> &[CountryCount] {
        &self.counts
    }

    pub fn into_counts(self) -> Vec<CountryCount> {
        self.counts
    }

    /// Number of rows the admission policy let through.
    pub fn admitted(&self) -> usize {
        self.admitted
    }

    pub fn named(&self) -> Vec<NormalizedState> {
        self.matched.iter().map(|row| row.normalize()).collect()
    }

    pub fn raw(&self) -> Vec<RawStateVector> {
        self.matched.iter().map(|row| (*row).clone()).collect()
    }

    pub fn project(&self, projection: Projection) -> Rows {
        match projection {
            Projection::Named => Rows::Named(self.named()),
            Projection::Raw => Rows::Raw(self.raw()),
        }
    }
}

/// Run the whole pipeline over one fetch.
pub fn select<'a>(
    states: &'a [RawStateVector],
    target_country: &str,
    policy: AdmissionPolicy,
) -> Selection<'a> {
    let admitted = states.iter().filter(|row| policy.admits(row)).count();
    Selection {
        matched: filter_by_country(states, target_country, policy),
        counts: count_by_country(states, policy),
        admitted,
    }
}

/// Named records for `target_country` plus the country table of the full fetch.
pub fn normalize_and_filter(
    states: &[RawStateVector],
    target_country: &str,
    policy: AdmissionPolicy,
) -> (Vec<NormalizedState>, Vec<CountryCount>) {
    let selection = select(states, target_country, policy);
    let rows = selection.named();
    (rows, selection.into_counts())
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Admitted rows whose origin_country is exactly `target_country`.
///
/// Case-sensitive with no trimming; a null or non-string country never
/// matches.
pub fn filter_by_country<'a>(
    states: &'a [RawStateVector],
    target_country: &str,
    policy: AdmissionPolicy,
) -> Vec<&'a RawStateVector> {
    states
        .iter()
        .filter(|row| policy.admits(row))
        .filter(|row| matches!(row.origin_country(), Some(Value::String(c)) if c == target_country))
        .collect()
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Per-country counts over admitted rows, most frequent first.
///
/// Ties keep the order in which each country first appeared.
pub fn count_by_country(states: &[RawStateVector], policy: AdmissionPolicy) -> Vec<CountryCount> {
    let mut order: Vec<(Option<Cow<'_, str>>, usize)> = Vec::new();
    let mut slots: HashMap<Option<Cow<'_, str>>, usize> = HashMap::new();

    for row in states.iter().filter(|row| policy.admits(row)) {
        let key = row.origin_country().and_then(country_key);
        match slots.get(&key) {
            Some(&slot) => order[slot].1 += 1,
            None => {
                slots.insert(key.clone(), order.len());
                order.push((key, 1));
            }
        }
    }

    // sort_by is stable
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order
        .into_iter()
        .map(|(country, count)| CountryCount {
            country: country.map(Cow::into_owned),
            count,
        })
        .collect()
}

/// Grouping key for an origin_country value. Null is its own group; other
/// non-string scalars group by their JSON text.
fn country_key(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        other => Some(Cow::Owned(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
