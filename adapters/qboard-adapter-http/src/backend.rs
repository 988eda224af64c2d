//! HTTP simulator backend implementation.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use qboard_hal::{
    BackendAvailability, BackendConfig, BackendFactory, DEFAULT_TIMEOUT, HalResult,
    SimulateRequest, SimulationBackend, SimulationResult,
};
use qboard_ir::EncodedCircuit;

use crate::api::{DEFAULT_ENDPOINT, ENDPOINT_ENV, SimulatorClient};
use crate::error::HttpResult;

/// Backend that forwards boards to a remote statevector simulation service.
///
/// # Example
///
/// ```ignore
/// use qboard_adapter_http::HttpSimulator;
/// use qboard_hal::SimulationBackend;
/// use qboard_ir::{encode, Preset};
///
/// let backend = HttpSimulator::new()?;
/// let result = backend.simulate(&encode(&Preset::Bell.grid())).await?;
/// println!("{} steps", result.num_steps());
/// ```
#[derive(Debug, Clone)]
pub struct HttpSimulator {
    client: SimulatorClient,
    name: String,
}

impl HttpSimulator {
    /// Create a backend for the endpoint in `QBOARD_SIMULATOR_URL`, or the
    /// local default.
    pub fn new() -> HttpResult<Self> {
        let endpoint =
            std::env::var(ENDPOINT_ENV).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self::with_endpoint(endpoint, DEFAULT_TIMEOUT)
    }

    /// Create a backend for an explicit endpoint (useful for testing).
    pub fn with_endpoint(endpoint: impl Into<String>, timeout: Duration) -> HttpResult<Self> {
        Ok(Self {
            client: SimulatorClient::new(endpoint, timeout)?,
            name: "http".into(),
        })
    }

    /// Return the simulate endpoint URL.
    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }
}

#[async_trait]
impl SimulationBackend for HttpSimulator {
    fn name(&self) -> &str {
        &self.name
    }

    async fn availability(&self) -> HalResult<BackendAvailability> {
        match self.client.probe().await {
            Ok(latency) => Ok(BackendAvailability {
                is_available: true,
                latency: Some(latency),
                status_message: None,
            }),
            Err(e) => {
                debug!("Simulator availability check failed: {}", e);
                Ok(BackendAvailability::unavailable(e.to_string()))
            }
        }
    }

    #[instrument(skip(self, circuit), fields(endpoint = %self.client.endpoint()))]
    async fn simulate(&self, circuit: &EncodedCircuit) -> HalResult<SimulationResult> {
        let start = Instant::now();
        let response = self.client.simulate(&SimulateRequest::new(circuit)).await?;
        let result = response.into_result(circuit.num_lines(), circuit.num_steps())?;
        info!(
            steps = result.num_steps(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Simulation completed"
        );
        Ok(result)
    }
}

impl BackendFactory for HttpSimulator {
    fn from_config(config: BackendConfig) -> HalResult<Self> {
        let endpoint = match config.endpoint.clone() {
            Some(endpoint) => endpoint,
            None => std::env::var(ENDPOINT_ENV).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
        };
        let mut backend = Self::with_endpoint(endpoint, config.timeout())?;
        backend.name = config.name;
        Ok(backend)
    }
}
