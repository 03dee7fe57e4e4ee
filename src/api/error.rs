//! Error types for requests to the segmentation service.

use thiserror::Error;

/// Errors that can occur while talking to the service.
///
/// Messages are kept as strings so replies can travel inside cloneable
/// workflow messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Connection, timeout or body transfer failure
    #[error("Request failed: {0}")]
    Transport(String),

    /// Non-success HTTP status
    #[error("Service returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },

    /// The service answered with an `{"error": ...}` body
    #[error("Service error: {0}")]
    Service(String),

    /// Response body did not match the expected shape
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}
