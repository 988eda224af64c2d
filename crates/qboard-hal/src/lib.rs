//! qboard Simulation Abstraction Layer
//!
//! The editor never simulates anything itself. It hands an encoded board to
//! a [`SimulationBackend`] and gets one state vector per column back.
//!
//! # Overview
//!
//! - [`SimulationBackend`]: the async trait every simulator implements
//! - [`SimulationResult`]: the per-step states of one run
//! - [`wire`]: the JSON request/response contract of the remote service
//!
//! # Backends
//!
//! | Backend | Crate | Endpoint |
//! |---------|-------|----------|
//! | HTTP service | `qboard-adapter-http` | `QBOARD_SIMULATOR_URL` env var |
//!
//! # Implementing a Custom Backend
//!
//! ```ignore
//! use qboard_hal::{BackendAvailability, HalResult, SimulationBackend, SimulationResult};
//! use qboard_ir::EncodedCircuit;
//! use async_trait::async_trait;
//!
//! struct MyBackend;
//!
//! #[async_trait]
//! impl SimulationBackend for MyBackend {
//!     fn name(&self) -> &str { "mine" }
//!
//!     async fn availability(&self) -> HalResult<BackendAvailability> {
//!         Ok(BackendAvailability::always_available())
//!     }
//!
//!     async fn simulate(&self, circuit: &EncodedCircuit) -> HalResult<SimulationResult> {
//!         todo!()
//!     }
//! }
//! ```

pub mod backend;
pub mod error;
pub mod result;
pub mod wire;

pub use backend::{
    BackendAvailability, BackendConfig, BackendFactory, DEFAULT_TIMEOUT, SimulationBackend,
};
pub use error::{HalError, HalResult};
pub use result::SimulationResult;
pub use wire::{SimulateRequest, SimulateResponse, StepResult, WireAmplitude};
