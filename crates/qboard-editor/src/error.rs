//! Error types for the editor session.

use qboard_ir::IrError;
use qboard_state::StateError;
use thiserror::Error;

/// Errors surfaced to the editor UI.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EditorError {
    /// A placement rule was violated. The board is unchanged.
    #[error("{0}")]
    InvalidPlacement(IrError),

    /// A cell outside the board was addressed. Indicates a caller bug.
    #[error("{0}")]
    IndexOutOfBounds(IrError),

    /// A board offered for loading is unusable.
    #[error("Cannot load board: {0}")]
    InvalidBoard(IrError),

    /// The requested step is not on the board.
    #[error("Step {requested} out of range: board has {available} steps")]
    StepOutOfRange {
        /// The requested step.
        requested: usize,
        /// Number of steps on the board.
        available: usize,
    },

    /// The simulator could not be reached or gave an unusable answer.
    #[error("Simulation unavailable: {message}")]
    SimulationUnavailable {
        /// What went wrong.
        message: String,
        /// Retrying the same board later may succeed.
        transient: bool,
    },

    /// Simulator output could not be turned into a dataset.
    #[error("State error: {0}")]
    State(StateError),
}

impl EditorError {
    /// Check if the session stays usable after this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, EditorError::IndexOutOfBounds(_))
    }

    /// Check if retrying the simulation later may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            EditorError::SimulationUnavailable {
                transient: true,
                ..
            }
        )
    }
}

impl From<IrError> for EditorError {
    fn from(e: IrError) -> Self {
        match e {
            IrError::InvalidPlacement { .. } => EditorError::InvalidPlacement(e),
            IrError::IndexOutOfBounds { .. } => EditorError::IndexOutOfBounds(e),
            _ => EditorError::InvalidBoard(e),
        }
    }
}

impl From<StateError> for EditorError {
    fn from(e: StateError) -> Self {
        match e {
            StateError::StepOutOfRange {
                requested,
                available,
            } => EditorError::StepOutOfRange {
                requested,
                available,
            },
            _ => EditorError::State(e),
        }
    }
}

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;

#[cfg(test)]
mod tests {
    use super::*;
    use qboard_ir::{Cell, PlacementViolation};

    #[test]
    fn test_ir_errors_classified() {
        let placement: EditorError = IrError::InvalidPlacement {
            cell: Cell::new(5, 0),
            violation: PlacementViolation::NoTarget,
        }
        .into();
        assert!(matches!(placement, EditorError::InvalidPlacement(_)));
        assert!(placement.is_recoverable());
        assert!(placement.to_string().contains("no target"));

        let oob: EditorError = IrError::IndexOutOfBounds {
            cell: Cell::new(9, 0),
            lines: 6,
            steps: 4,
        }
        .into();
        assert!(!oob.is_recoverable());
        assert!(!oob.is_transient());
    }

    #[test]
    fn test_unavailable_keeps_transience() {
        let err = EditorError::SimulationUnavailable {
            message: "timed out".into(),
            transient: true,
        };
        assert!(err.is_transient());
        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), "Simulation unavailable: timed out");
    }

    #[test]
    fn test_step_error_classified() {
        let err: EditorError = StateError::StepOutOfRange {
            requested: 4,
            available: 4,
        }
        .into();
        assert_eq!(
            err,
            EditorError::StepOutOfRange {
                requested: 4,
                available: 4
            }
        );
    }
}
