//! Typed error enum for the HTTP adapter.

use thiserror::Error;

/// Errors from Workstation Hub API calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request could not be sent or timed out.
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    Status { code: u16, body: String },
    /// Body was not JSON or not the expected shape.
    #[error("JSON decode error in {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("missing CSRF token: cookie `csrftoken` is not set")]
    MissingCsrfToken,
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl ClientError {
    /// Whether the failure looks like a temporary server or network problem.
    ///
    /// Nothing retries on this; it only colours log records.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(e) => e.is_timeout() || e.is_connect(),
            Self::Status { code, .. } => matches!(code, 429 | 500 | 502 | 503 | 504),
            _ => false,
        }
    }

    /// Whether the backend refused the caller's identity (or we never had one).
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::MissingCsrfToken | Self::Status { code: 401 | 403, .. })
    }
}
