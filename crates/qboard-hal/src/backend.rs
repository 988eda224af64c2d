//! Backend trait and configuration.
//!
//! A [`SimulationBackend`] turns an encoded board into one state vector per
//! column:
//!
//! ```text
//!   availability() ──→ simulate(&EncodedCircuit) ──→ SimulationResult
//!      (async)              (async)
//! ```
//!
//! Backends are `Send + Sync` so an editor session can hand them to a
//! spawned task.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use qboard_ir::EncodedCircuit;

use crate::error::HalResult;
use crate::result::SimulationResult;

/// Timeout applied when a configuration does not set one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a backend instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Name of the backend.
    pub name: String,
    /// Service URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Request timeout in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl BackendConfig {
    /// Create a new backend configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoint: None,
            timeout_secs: None,
        }
    }

    /// Set the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// The configured timeout, or [`DEFAULT_TIMEOUT`].
    pub fn timeout(&self) -> Duration {
        self.timeout_secs
            .map_or(DEFAULT_TIMEOUT, Duration::from_secs)
    }
}

/// Trait for simulation backends.
///
/// # Contract
///
/// - `simulate()` returns exactly one state per column of the circuit, each
///   with `2^lines` amplitudes.
/// - A backend that cannot be reached reports [`crate::HalError::Unavailable`],
///   [`crate::HalError::Network`] or [`crate::HalError::Timeout`].
/// - `availability()` SHOULD be a lightweight check.
#[async_trait]
pub trait SimulationBackend: Send + Sync {
    /// Get the name of this backend.
    fn name(&self) -> &str;

    /// Check whether the backend can take requests.
    async fn availability(&self) -> HalResult<BackendAvailability>;

    /// Simulate an encoded board.
    async fn simulate(&self, circuit: &EncodedCircuit) -> HalResult<SimulationResult>;
}

/// Backend availability information.
#[derive(Debug, Clone)]
pub struct BackendAvailability {
    /// Whether the backend currently accepts requests.
    pub is_available: bool,
    /// Round-trip time of the probe, if measured.
    pub latency: Option<Duration>,
    /// Human-readable status message.
    pub status_message: Option<String>,
}

impl BackendAvailability {
    /// Create availability for a backend that is always available.
    pub fn always_available() -> Self {
        Self {
            is_available: true,
            latency: Some(Duration::ZERO),
            status_message: None,
        }
    }

    /// Create availability for an offline backend.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            is_available: false,
            latency: None,
            status_message: Some(reason.into()),
        }
    }
}

/// Trait for creating backends from configuration.
pub trait BackendFactory: SimulationBackend + Sized {
    /// Create a backend from configuration.
    fn from_config(config: BackendConfig) -> HalResult<Self>;
}
