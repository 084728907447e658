use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single API request.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API error ({status}) from {url}")]
    Status { status: StatusCode, url: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("invalid API url: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Whether the server answered with a non-success status.
    pub fn is_status(&self) -> bool {
        matches!(self, ApiError::Status { .. })
    }
}
