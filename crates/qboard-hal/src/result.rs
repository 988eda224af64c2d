//! Simulation results.

use qboard_state::{StateResult, StateVector, select_step};

/// Per-step states for one simulated board.
///
/// `steps[k]` is the state after column `k`; there is one entry per column.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    num_qubits: usize,
    steps: Vec<StateVector>,
}

impl SimulationResult {
    /// Create a result from per-column states.
    pub fn new(num_qubits: usize, steps: Vec<StateVector>) -> Self {
        Self { num_qubits, steps }
    }

    /// Number of qubit lines simulated.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of steps.
    pub fn num_steps(&self) -> usize {
        self.steps.len()
    }

    /// All steps in order.
    pub fn steps(&self) -> &[StateVector] {
        &self.steps
    }

    /// The state after column `index`.
    pub fn step(&self, index: usize) -> StateResult<&StateVector> {
        select_step(&self.steps, index)
    }

    /// The state after the last column.
    pub fn final_state(&self) -> Option<&StateVector> {
        self.steps.last()
    }
}
