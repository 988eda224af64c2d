//! REST client for the simulation service.
//!
//! The service exposes a single endpoint, `POST /simulate`, taking a
//! [`SimulateRequest`] and answering with a [`SimulateResponse`].

use std::time::{Duration, Instant};

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use qboard_hal::{SimulateRequest, SimulateResponse};

use crate::error::{HttpError, HttpResult};

/// Endpoint of a locally running simulation service.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/simulate";

/// Environment variable overriding [`DEFAULT_ENDPOINT`].
pub const ENDPOINT_ENV: &str = "QBOARD_SIMULATOR_URL";

/// Simulation service client.
#[derive(Debug, Clone)]
pub struct SimulatorClient {
    /// HTTP client with timeouts configured.
    client: Client,
    /// Full URL of the simulate endpoint.
    endpoint: String,
    /// Whole-request timeout.
    timeout: Duration,
}

impl SimulatorClient {
    /// Create a client for `endpoint`.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> HttpResult<Self> {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(HttpError::InvalidUrl(endpoint));
        }

        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .build()
            .map_err(HttpError::Http)?;

        Ok(Self {
            client,
            endpoint,
            timeout,
        })
    }

    /// The simulate endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Perform a POST request with a JSON body, returning the deserialized JSON body.
    async fn post<T: for<'de> Deserialize<'de>>(&self, body: &impl Serialize) -> HttpResult<T> {
        debug!("POST {}", self.endpoint);

        let resp = self
            .client
            .post(&self.endpoint)
            .json(body)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        self.handle_response(resp).await
    }

    /// Handle HTTP response: deserialize JSON or return an error.
    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> HttpResult<T> {
        let status = response.status();

        if status.is_success() {
            let text = response.text().await.map_err(|e| self.classify(e))?;
            Ok(serde_json::from_str(&text)?)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(HttpError::ApiError {
                status: status.as_u16(),
                message,
            })
        }
    }

    fn classify(&self, err: reqwest::Error) -> HttpError {
        if err.is_timeout() {
            HttpError::Timeout(self.timeout)
        } else {
            HttpError::Http(err)
        }
    }

    // -----------------------------------------------------------------------
    // Public API methods
    // -----------------------------------------------------------------------

    /// Simulate an encoded board.
    #[instrument(skip(self, req))]
    pub async fn simulate(&self, req: &SimulateRequest) -> HttpResult<SimulateResponse> {
        debug!(
            lines = req.circuit_matrix.num_lines(),
            steps = req.circuit_matrix.num_steps(),
            "Submitting circuit to simulator"
        );
        self.post(req).await
    }

    /// Check that the service answers at all.
    ///
    /// Any HTTP response counts, including 404 or 405 for a GET on the
    /// simulate route. Returns the round-trip time.
    #[instrument(skip(self))]
    pub async fn probe(&self) -> HttpResult<Duration> {
        let start = Instant::now();
        self.client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| self.classify(e))?;
        Ok(start.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = SimulatorClient::new("http://127.0.0.1:1/simulate/", Duration::from_secs(1))
            .unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:1/simulate");
    }

    #[test]
    fn test_invalid_scheme_rejected() {
        let err = SimulatorClient::new("localhost:8000", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, HttpError::InvalidUrl(u) if u == "localhost:8000"));
    }
}
