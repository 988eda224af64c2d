//! Grid coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Address of one cell on the board: a qubit line and a time step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    /// Qubit line (row), 0 is the top line.
    pub line: usize,
    /// Time step (column), 0 is the first step.
    pub step: usize,
}

impl Cell {
    /// Create a new cell address.
    #[inline]
    pub const fn new(line: usize, step: usize) -> Self {
        Self { line, step }
    }

    /// The cell directly below this one, if `num_lines` leaves room for it.
    #[inline]
    pub fn below(self, num_lines: usize) -> Option<Cell> {
        (self.line + 1 < num_lines).then(|| Cell::new(self.line + 1, self.step))
    }

    /// The cell directly above this one, if any.
    #[inline]
    pub fn above(self) -> Option<Cell> {
        self.line
            .checked_sub(1)
            .map(|line| Cell::new(line, self.step))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}@t{}", self.line, self.step)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((line, step): (usize, usize)) -> Self {
        Cell::new(line, step)
    }
}
