//! qboard Adapter for the Statevector Simulation Service
//!
//! This crate connects the editor to a remote simulator reached over HTTP.
//! The service takes the encoded board as a matrix of token strings and
//! returns the full state vector after every column.
//!
//! # Endpoint
//!
//! The service URL defaults to `http://localhost:8000/simulate`. Override it
//! with the `QBOARD_SIMULATOR_URL` environment variable:
//!
//! ```bash
//! export QBOARD_SIMULATOR_URL="http://sim.lab.local:8000/simulate"
//! ```
//!
//! # Example
//!
//! ```ignore
//! use qboard_adapter_http::HttpSimulator;
//! use qboard_hal::SimulationBackend;
//! use qboard_ir::{encode, Preset};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = HttpSimulator::new()?;
//!     let result = backend.simulate(&encode(&Preset::Ghz.grid())).await?;
//!     println!("Final state: {:?}", result.final_state());
//!     Ok(())
//! }
//! ```

mod api;
mod backend;
mod error;

pub use api::{DEFAULT_ENDPOINT, ENDPOINT_ENV, SimulatorClient};
pub use backend::HttpSimulator;
pub use error::{HttpError, HttpResult};

// Re-export common types for convenience.
pub use qboard_hal::{BackendConfig, BackendFactory, SimulationBackend};
