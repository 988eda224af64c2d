//! Error types for the HAL crate.

use std::time::Duration;

use qboard_state::StateError;
use thiserror::Error;

/// Errors that can occur while talking to a simulation backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HalError {
    /// Backend is not reachable or refused the request.
    #[error("Simulator not available: {0}")]
    Unavailable(String),

    /// Network error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Response does not match the circuit that was sent.
    #[error("Invalid simulator response: {0}")]
    InvalidResponse(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// No response within the configured timeout.
    #[error("Simulation timed out after {0:?}")]
    Timeout(Duration),

    /// A returned state vector is malformed.
    #[error("State error: {0}")]
    State(#[from] StateError),
}

impl HalError {
    /// Check if retrying the same request later may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            HalError::Unavailable(_) | HalError::Network(_) | HalError::Timeout(_)
        )
    }
}

/// Result type for HAL operations.
pub type HalResult<T> = Result<T, HalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_converts() {
        let err: HalError = StateError::LengthMismatch {
            expected: 64,
            got: 3,
        }
        .into();
        assert!(matches!(err, HalError::State(_)));
        assert!(!err.is_transient());
    }

    #[test]
    fn test_timeout_is_transient() {
        let err = HalError::Timeout(Duration::from_secs(30));
        assert!(err.is_transient());
        assert!(err.to_string().contains("30s"));
    }
}
