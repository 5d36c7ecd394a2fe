//! One fetch-and-normalize cycle, packaged for the views.
//!
//! Every page and API hit builds a fresh [`Snapshot`]; nothing is cached
//! between requests.

use serde::{Deserialize, Serialize};
use skyscan_core::pipeline::{self, AdmissionPolicy, Projection, Rows};
use skyscan_core::{BoundingBox, CountryCount};
use skyscan_feeds::OpenSkyClient;
use tracing::warn;

/// Query-string parameters accepted by `/`, `/json`, and `/map`.
///
/// Absent parameters fall back to the configured defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryParams {
    pub lamin: Option<String>,
    pub lamax: Option<String>,
    pub lomin: Option<String>,
    pub lomax: Option<String>,
    pub country: Option<String>,
}

/// `shape` parameter of `/json`. The HTML views pick their own row shape and
/// never read it.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ShapeParam {
    pub shape: Option<Projection>,
}

/// Everything a view needs: filtered rows, the full country table, the
/// upstream URL that was hit, and the fetch error if any.
///
/// Serializes to the `/json` response body.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub error: Option<String>,
    pub query: BoundingBox,
    pub country: String,
    pub bbox_url: String,
    pub count: usize,
    pub counts: Vec<CountryCount>,
    pub states: Rows,
}

impl Snapshot {
    /// Largest count in the table, at least 1.
    pub fn max_count(&self) -> usize {
        self.counts.first().map_or(1, |c| c.count.max(1))
    }
}

/// Fetch `bbox`, then filter by `country` and count by origin country.
///
/// A failed fetch still yields a snapshot: empty rows and counts plus the
/// error message.
pub async fn render(
    client: &OpenSkyClient,
    bbox: BoundingBox,
    country: String,
    projection: Projection,
    policy: AdmissionPolicy,
) -> Snapshot {
    for issue in bbox.issues() {
        warn!(%issue, "suspicious bounding box forwarded upstream");
    }

    let fetched = client.fetch(&bbox).await;
    let selection = pipeline::select(fetched.states(), &country, policy);
    let states = selection.project(projection);
    let counts = selection.into_counts();

    Snapshot {
        error: fetched.error_message(),
        query: bbox,
        count: states.len(),
        counts,
        states,
        bbox_url: fetched.bbox_url,
        country,
    }
}
