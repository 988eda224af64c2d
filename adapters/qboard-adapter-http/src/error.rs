//! Error types for the HTTP simulator adapter.

use std::time::Duration;

use qboard_hal::HalError;
use thiserror::Error;

/// Result type for HTTP simulator operations.
pub type HttpResult<T> = Result<T, HttpError>;

/// Errors that can occur when talking to the simulation service.
#[derive(Debug, Error)]
pub enum HttpError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Endpoint is not an absolute http(s) URL.
    #[error("Invalid simulator URL '{0}'")]
    InvalidUrl(String),

    /// Service returned an error response.
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// No response within the configured timeout.
    #[error("No response after {0:?}")]
    Timeout(Duration),
}

impl From<HttpError> for HalError {
    fn from(e: HttpError) -> Self {
        match e {
            HttpError::Http(err) if err.is_connect() => HalError::Unavailable(err.to_string()),
            HttpError::Http(err) if err.is_decode() => HalError::InvalidResponse(err.to_string()),
            HttpError::Http(err) => HalError::Network(err),
            HttpError::Json(err) => HalError::Serialization(err),
            HttpError::InvalidUrl(_) => HalError::Configuration(e.to_string()),
            HttpError::ApiError { .. } => HalError::Unavailable(e.to_string()),
            HttpError::Timeout(after) => HalError::Timeout(after),
        }
    }
}
