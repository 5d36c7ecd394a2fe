//! Why a fetch produced no rows.

use thiserror::Error;

/// Every way an upstream fetch can fail.
///
/// The variants fall into two groups, see
/// [`FetchError::is_upstream_unavailable`] and
/// [`FetchError::is_malformed_payload`].
#[derive(Debug, Error)]
pub enum FetchError {
    /// The configured base URL cannot be parsed.
    #[error("invalid upstream URL {url:?}: {message}")]
    InvalidUrl { url: String, message: String },

    /// No complete response within the configured timeout.
    #[error("upstream request timed out after {after:?}")]
    Timeout { after: std::time::Duration },

    /// Connection refused, DNS failure, reset mid-body, ...
    #[error("upstream unavailable: {0}")]
    Unavailable(#[source] reqwest::Error),

    /// The upstream answered with a non-2xx status.
    #[error("upstream returned HTTP {status}")]
    Status { status: reqwest::StatusCode },

    /// The body is not the expected `{"states": [[...], ...]}` document.
    #[error("malformed upstream payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl FetchError {
    /// Network, timeout, and non-2xx failures.
    pub fn is_upstream_unavailable(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrl { .. } | Self::Timeout { .. } | Self::Unavailable(_) | Self::Status { .. }
        )
    }

    /// The upstream answered but the body could not be used.
    pub fn is_malformed_payload(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}
