use thiserror::Error;

/// Errors returned by [`crate::ParcelService`] implementations.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    /// A path parameter that cannot travel as a single URL segment.
    #[error("invalid path parameter {0:?}")]
    InvalidSegment(String),
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("request failed with status code {status}")]
    Status { status: u16, body: String },
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

