//! qboard State Processing
//!
//! Decodes the per-step state vectors returned by the simulator into the
//! datasets the editor charts: one `{bitstring, value}` record per basis
//! state, with the value shown as a probability or an amplitude magnitude.
//!
//! # Example
//!
//! ```rust
//! use qboard_state::{DisplayMode, StateVector, process, select_step};
//!
//! let steps = vec![
//!     StateVector::basis_state(2, 0).unwrap(),
//!     StateVector::basis_state(2, 3).unwrap(),
//! ];
//! let state = select_step(&steps, 1).unwrap();
//! let records = process(state, DisplayMode::Probability).unwrap();
//!
//! assert_eq!(records.len(), 4);
//! assert_eq!(records[3].bitstring, "11");
//! assert_eq!(records[3].value, 1.0);
//! ```

pub mod bitstring;
pub mod error;
pub mod processor;
pub mod statevector;
pub mod step;

pub use bitstring::{bitstring, round6};
pub use error::{StateError, StateResult};
pub use num_complex::Complex64;
pub use processor::{Dataset, DisplayMode, VisualizationRecord, process};
pub use statevector::StateVector;
pub use step::{clamp_step, select_step};
