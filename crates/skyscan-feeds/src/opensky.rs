//! OpenSky `states/all` client.
//!
//! One call to [`OpenSkyClient::fetch`] is one GET with the bounding box as
//! query parameters and a hard timeout. No retries, no caching.

use crate::error::FetchError;
use reqwest::Url;
use serde_json::{Map, Value};
use skyscan_core::config::UpstreamConfig;
use skyscan_core::{BoundingBox, RawStateVector};
use std::time::Duration;
use tracing::{debug, warn};

// ---------------------------------------------------------------------------
// FetchResult
// ---------------------------------------------------------------------------

/// Outcome of one fetch: the URL that was requested plus the rows or the
/// reason there are none.
#[derive(Debug)]
pub struct FetchResult {
    /// Full request URL including the bbox query string. Falls back to the
    /// bare base URL when the base URL itself could not be parsed.
    pub bbox_url: String,
    pub result: Result<Vec<RawStateVector>, FetchError>,
}

impl FetchResult {
    /// Fetched rows; empty on failure.
    pub fn states(&self) -> &[RawStateVector] {
        self.result.as_deref().unwrap_or(&[])
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.result.as_ref().err()
    }

    /// Human-readable failure reason for display.
    pub fn error_message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

/// Parse an upstream `{"time": 1700000000, "states": [[...], ...] | null}`
/// body; only `states` is used.
///
/// The body must be a JSON object. An absent or null `states` is an empty
/// result, not an error.
pub fn parse_states(body: &[u8]) -> Result<Vec<RawStateVector>, FetchError> {
    let mut payload: Map<String, Value> = serde_json::from_slice(body)?;
    match payload.remove("states") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(states) => Ok(serde_json::from_value(states)?),
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP client bound to one upstream base URL and timeout.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct OpenSkyClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl OpenSkyClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("skyscan/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            timeout,
        })
    }

    pub fn from_config(upstream: &UpstreamConfig) -> reqwest::Result<Self> {
        Self::new(upstream.base_url.clone(), upstream.timeout())
    }

    /// The request URL for `bbox`. Bounds are form-encoded exactly as given.
    pub fn bbox_url(&self, bbox: &BoundingBox) -> Result<Url, FetchError> {
        Url::parse_with_params(&self.base_url, bbox.query_pairs()).map_err(|e| {
            FetchError::InvalidUrl {
                url: self.base_url.clone(),
                message: e.to_string(),
            }
        })
    }

    /// Fetch the state vectors inside `bbox`. Never panics and never returns
    /// early with an error: failures are carried in the result.
    pub async fn fetch(&self, bbox: &BoundingBox) -> FetchResult {
        let url = match self.bbox_url(bbox) {
            Ok(url) => url,
            Err(err) => {
                warn!(error = %err, "state-vector fetch skipped");
                return FetchResult {
                    bbox_url: self.base_url.clone(),
                    result: Err(err),
                };
            }
        };

        let bbox_url = url.to_string();
        debug!(url = %bbox_url, "fetching state vectors");

        let result = self.get_states(url).await;
        match &result {
            Ok(states) => debug!(count = states.len(), "fetched state vectors"),
            Err(err) => warn!(url = %bbox_url, error = %err, "state-vector fetch failed"),
        }

        FetchResult { bbox_url, result }
    }

    async fn get_states(&self, url: Url) -> Result<Vec<RawStateVector>, FetchError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }

        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;
        parse_states(&body)
    }

    fn transport_error(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout {
                after: self.timeout,
            }
        } else {
            FetchError::Unavailable(err)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
