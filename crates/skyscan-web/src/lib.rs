//! skyscan-web — axum views over the skyscan pipeline.
//!
//! Every route that shows data runs one fresh fetch-and-normalize cycle
//! ([`snapshot::render`]) and formats the resulting [`snapshot::Snapshot`]:
//!
//! | Route | View |
//! |-------|------|
//! | `GET /` | HTML table and per-country counts |
//! | `GET /json` | the snapshot as JSON (`shape=raw` for positional rows) |
//! | `GET /map` | Leaflet map of the filtered rows |
//! | `HEAD /`, `GET /healthz` | liveness, no upstream call |

pub mod html;
pub mod map;
pub mod routes;
pub mod snapshot;

pub use routes::router;
pub use snapshot::{QueryParams, ShapeParam, Snapshot};

use skyscan_core::config::Config;
use skyscan_core::{BoundingBox, Projection};
use skyscan_feeds::OpenSkyClient;
use std::sync::Arc;

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: OpenSkyClient,
}

impl AppState {
    pub fn new(config: Config, client: OpenSkyClient) -> Self {
        Self {
            config: Arc::new(config),
            client,
        }
    }

    /// Bounding box and target country for a request, with configured
    /// defaults filling whatever the query string leaves out.
    pub fn resolve(&self, params: &QueryParams) -> (BoundingBox, String) {
        let bbox = self.config.query.bbox().with_overrides(
            params.lamin.clone(),
            params.lamax.clone(),
            params.lomin.clone(),
            params.lomax.clone(),
        );
        let country = params
            .country
            .clone()
            .unwrap_or_else(|| self.config.query.country.clone());
        (bbox, country)
    }

    pub async fn snapshot(&self, params: &QueryParams, projection: Projection) -> Snapshot {
        let (bbox, country) = self.resolve(params);
        snapshot::render(
            &self.client,
            bbox,
            country,
            projection,
            self.config.pipeline.admission,
        )
        .await
    }
}
