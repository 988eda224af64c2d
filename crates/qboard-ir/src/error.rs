//! Error types for the IR crate.

use crate::cell::Cell;
use crate::token::GateToken;
use thiserror::Error;

/// Errors that can occur in grid operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Cell lies outside the grid. Indicates a caller bug.
    #[error("Cell {cell} is outside the {lines}x{steps} grid")]
    IndexOutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// Number of qubit lines in the grid.
        lines: usize,
        /// Number of time steps in the grid.
        steps: usize,
    },

    /// A structural placement rule was violated. The grid is unchanged.
    #[error("Invalid placement at {cell}: {violation}")]
    InvalidPlacement {
        /// Cell the command addressed.
        cell: Cell,
        /// The rule that was broken.
        violation: PlacementViolation,
    },

    /// Grid dimensions must be non-zero.
    #[error("Invalid grid dimensions: {lines} lines x {steps} steps")]
    InvalidDimensions {
        /// Requested number of lines.
        lines: usize,
        /// Requested number of steps.
        steps: usize,
    },

    /// Rows of a grid have different lengths.
    #[error("Ragged grid: line {line} has {got} steps, expected {expected}")]
    RaggedGrid {
        /// Line whose length differs.
        line: usize,
        /// Expected number of steps.
        expected: usize,
        /// Actual number of steps.
        got: usize,
    },

    /// Grid has a different number of qubit lines than the editor board.
    #[error("Grid has {got} qubit lines, expected {expected}")]
    LineCountMismatch {
        /// Lines on the editor board.
        expected: usize,
        /// Lines in the offered grid.
        got: usize,
    },

    /// Token string not recognised.
    #[error("Unknown gate token '{0}'")]
    UnknownToken(String),

    /// Wire payload does not describe a valid board.
    #[error("Malformed encoding at {cell}: {reason}")]
    MalformedEncoding {
        /// Cell where decoding failed.
        cell: Cell,
        /// What was wrong.
        reason: String,
    },

    /// Unknown preset name.
    #[error("Unknown preset '{0}'. Available: qft, grover, deutsch-jozsa, bell, ghz")]
    UnknownPreset(String),
}

/// The structural rule behind an [`IrError::InvalidPlacement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PlacementViolation {
    /// Control on the last line, or above an empty cell.
    #[error("no target")]
    NoTarget,

    /// Control above a token that cannot be controlled.
    #[error("cannot control a '{0}' token")]
    UncontrollableTarget(GateToken),

    /// Cell is the target of a control on the line above and only a
    /// single-qubit gate may replace it.
    #[error("cell is the target of the control above and cannot hold '{0}'")]
    OccupiedTarget(GateToken),

    /// Neither adjacent line has room for the second swap half.
    #[error("no free adjacent line for the swap partner")]
    NoSwapPartner,

    /// Grid contains a control with nothing to control.
    #[error("control has no gate below it")]
    OrphanedControl,

    /// Grid contains a swap half without its partner.
    #[error("swap half has no adjacent partner")]
    UnpairedSwap,
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
