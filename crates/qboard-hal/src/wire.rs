//! JSON contract of the simulation service.
//!
//! ```text
//!   POST /simulate   { "circuit_matrix": [["H","CNOT-1"],["I","CNOT-2"]] }
//!   200              { "state_list": [ { "state": [ {"re":1,"im":0}, ... ] }, ... ] }
//! ```
//!
//! The service reports one state per column and, in its usual form, the
//! initial `|0...0⟩` state first. [`SimulateResponse::into_result`] accepts
//! both shapes and drops the initial state so that step `k` is the state
//! after column `k`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use qboard_ir::EncodedCircuit;
use qboard_state::{Complex64, StateVector};

use crate::error::{HalError, HalResult};
use crate::result::SimulationResult;

/// Request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulateRequest {
    /// The encoded board, one row per qubit line.
    pub circuit_matrix: EncodedCircuit,
}

impl SimulateRequest {
    /// Create a request for an encoded board.
    pub fn new(circuit: &EncodedCircuit) -> Self {
        Self {
            circuit_matrix: circuit.clone(),
        }
    }
}

/// Response body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulateResponse {
    /// States in simulation order.
    pub state_list: Vec<StepResult>,
}

/// The state after one step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StepResult {
    /// Step index, if the service reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<usize>,
    /// Amplitudes in basis-index order.
    pub state: Vec<WireAmplitude>,
}

/// One amplitude as the service may send it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireAmplitude {
    /// `{"re": .., "im": ..}`; an omitted component is zero.
    Object {
        /// Real part.
        #[serde(default)]
        re: f64,
        /// Imaginary part.
        #[serde(default)]
        im: f64,
    },
    /// `[re, im]`.
    Pair(f64, f64),
    /// A bare real number.
    Real(f64),
}

impl From<WireAmplitude> for Complex64 {
    fn from(amp: WireAmplitude) -> Self {
        match amp {
            WireAmplitude::Object { re, im } | WireAmplitude::Pair(re, im) => {
                Complex64::new(re, im)
            }
            WireAmplitude::Real(re) => Complex64::new(re, 0.0),
        }
    }
}

impl From<Complex64> for WireAmplitude {
    fn from(c: Complex64) -> Self {
        WireAmplitude::Object { re: c.re, im: c.im }
    }
}

impl StepResult {
    /// Wrap a state vector for the wire.
    pub fn from_state(step: Option<usize>, state: &StateVector) -> Self {
        Self {
            step,
            state: state.amplitudes().iter().map(|&a| a.into()).collect(),
        }
    }

    /// Decode into a state vector for a board of `num_lines` lines.
    pub fn to_state(&self, num_lines: usize) -> HalResult<StateVector> {
        let amplitudes = self.state.iter().map(|&a| Complex64::from(a)).collect();
        Ok(StateVector::with_qubits(num_lines, amplitudes)?)
    }
}

impl SimulateResponse {
    /// Build a response from per-column states, without the initial state.
    pub fn from_states(states: &[StateVector]) -> Self {
        Self {
            state_list: states
                .iter()
                .enumerate()
                .map(|(i, s)| StepResult::from_state(Some(i), s))
                .collect(),
        }
    }

    /// Check the response against the board that was sent and decode it.
    ///
    /// Accepts `num_steps` states, or `num_steps + 1` with the initial state
    /// first. Every state must have `2^num_lines` amplitudes.
    pub fn into_result(self, num_lines: usize, num_steps: usize) -> HalResult<SimulationResult> {
        let got = self.state_list.len();
        let skip = if got == num_steps + 1 {
            1
        } else if got == num_steps {
            0
        } else {
            return Err(HalError::InvalidResponse(format!(
                "expected {num_steps} or {} states, got {got}",
                num_steps + 1
            )));
        };
        debug!(got, skip, "decoding simulator response");

        let steps = self
            .state_list
            .iter()
            .skip(skip)
            .map(|s| s.to_state(num_lines))
            .collect::<HalResult<Vec<_>>>()?;
        Ok(SimulationResult::new(num_lines, steps))
    }
}
