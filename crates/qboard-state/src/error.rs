//! Error types for state processing.

use thiserror::Error;

/// Errors that can occur while decoding simulator output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StateError {
    /// Basis index does not fit in the requested bit width.
    #[error("Basis index {index} does not fit in {width} bits")]
    InvalidIndex {
        /// The offending index.
        index: usize,
        /// Bit width of the label.
        width: usize,
    },

    /// Amplitude count is not a power of two, or disagrees with the board.
    #[error("State vector has {got} amplitudes, expected {expected}")]
    LengthMismatch {
        /// Expected number of amplitudes.
        expected: usize,
        /// Actual number of amplitudes.
        got: usize,
    },

    /// Requested step is not in the simulated sequence.
    #[error("Step {requested} out of range: {available} steps available")]
    StepOutOfRange {
        /// The requested step.
        requested: usize,
        /// Number of steps in the sequence.
        available: usize,
    },
}

/// Result type for state operations.
pub type StateResult<T> = Result<T, StateError>;
