//! The circuit board: a fixed-size table of gate tokens.

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::{IrError, IrResult};
use crate::token::GateToken;

/// Number of qubit lines on the editor board.
pub const EDITOR_LINES: usize = 6;

/// Number of time steps on a fresh editor board.
pub const EDITOR_STEPS: usize = 4;

/// A circuit board of `lines x steps` gate tokens.
///
/// Every line has the same length and every cell holds exactly one token;
/// unused cells hold [`GateToken::Identity`]. Dimensions are fixed for the
/// lifetime of a grid. Multi-line adjacency rules are not checked here, see
/// [`crate::placement`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<GateToken>>", into = "Vec<Vec<GateToken>>")]
pub struct CircuitGrid {
    /// Row-major cells, one row per qubit line.
    rows: Vec<Vec<GateToken>>,
}

impl CircuitGrid {
    /// Create an all-Identity grid.
    pub fn new(lines: usize, steps: usize) -> IrResult<Self> {
        if lines == 0 || steps == 0 {
            return Err(IrError::InvalidDimensions { lines, steps });
        }
        Ok(Self {
            rows: vec![vec![GateToken::Identity; steps]; lines],
        })
    }

    /// The empty board the editor starts with.
    pub fn editor_default() -> Self {
        Self {
            rows: vec![vec![GateToken::Identity; EDITOR_STEPS]; EDITOR_LINES],
        }
    }

    /// Build a grid from rows of tokens.
    ///
    /// Fails if there are no rows, no steps, or the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<GateToken>>) -> IrResult<Self> {
        let lines = rows.len();
        let steps = rows.first().map_or(0, Vec::len);
        if lines == 0 || steps == 0 {
            return Err(IrError::InvalidDimensions { lines, steps });
        }
        if let Some((line, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != steps) {
            return Err(IrError::RaggedGrid {
                line,
                expected: steps,
                got: row.len(),
            });
        }
        Ok(Self { rows })
    }

    /// Rows already known to be rectangular and non-empty.
    pub(crate) fn from_rows_unchecked(rows: Vec<Vec<GateToken>>) -> Self {
        debug_assert!(!rows.is_empty() && rows.iter().all(|r| r.len() == rows[0].len()));
        Self { rows }
    }

    /// Build a grid from rows of token identifiers (`"I"`, `"H"`, `"C_down"`, ...).
    pub fn from_strs<R, S>(rows: R) -> IrResult<Self>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|s| s.as_ref().parse())
                    .collect::<IrResult<Vec<_>>>()
            })
            .collect::<IrResult<Vec<_>>>()?;
        Self::from_rows(rows)
    }

    /// Number of qubit lines.
    #[inline]
    pub fn num_lines(&self) -> usize {
        self.rows.len()
    }

    /// Number of time steps.
    #[inline]
    pub fn num_steps(&self) -> usize {
        self.rows[0].len()
    }

    /// Check that `cell` lies inside the grid.
    pub fn check(&self, cell: Cell) -> IrResult<()> {
        if cell.line < self.num_lines() && cell.step < self.num_steps() {
            Ok(())
        } else {
            Err(IrError::IndexOutOfBounds {
                cell,
                lines: self.num_lines(),
                steps: self.num_steps(),
            })
        }
    }

    /// Get the token at `(line, step)`.
    pub fn get(&self, line: usize, step: usize) -> IrResult<GateToken> {
        self.token(Cell::new(line, step))
    }

    /// Get the token at `cell`.
    pub fn token(&self, cell: Cell) -> IrResult<GateToken> {
        self.check(cell)?;
        Ok(self.rows[cell.line][cell.step])
    }

    /// Return a copy of this grid with `token` written at `(line, step)`.
    ///
    /// No adjacency rules are applied.
    pub fn with_token_at(&self, line: usize, step: usize, token: GateToken) -> IrResult<Self> {
        let mut grid = self.clone();
        grid.set(Cell::new(line, step), token)?;
        Ok(grid)
    }

    /// Overwrite one cell in place. No adjacency rules are applied.
    pub(crate) fn set(&mut self, cell: Cell, token: GateToken) -> IrResult<()> {
        self.check(cell)?;
        self.rows[cell.line][cell.step] = token;
        Ok(())
    }

    /// Overwrite a cell already known to be in range.
    #[inline]
    pub(crate) fn put(&mut self, cell: Cell, token: GateToken) {
        self.rows[cell.line][cell.step] = token;
    }

    /// Token at a cell already known to be in range.
    #[inline]
    pub(crate) fn at(&self, cell: Cell) -> GateToken {
        self.rows[cell.line][cell.step]
    }

    /// The rows of the grid, one per qubit line.
    pub fn rows(&self) -> &[Vec<GateToken>] {
        &self.rows
    }

    /// Tokens of one time step, top line first.
    pub fn column(&self, step: usize) -> IrResult<Vec<GateToken>> {
        self.check(Cell::new(0, step))?;
        Ok(self.rows.iter().map(|row| row[step]).collect())
    }

    /// Iterate over every cell and its token, line by line.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, GateToken)> + '_ {
        self.rows.iter().enumerate().flat_map(|(line, row)| {
            row.iter()
                .enumerate()
                .map(move |(step, &token)| (Cell::new(line, step), token))
        })
    }

    /// Number of non-Identity cells.
    pub fn count_gates(&self) -> usize {
        self.cells().filter(|(_, t)| !t.is_identity()).count()
    }

    /// Check if every cell is Identity.
    pub fn is_empty(&self) -> bool {
        self.count_gates() == 0
    }

    /// Check if the other grid has the same dimensions.
    pub fn same_shape(&self, other: &CircuitGrid) -> bool {
        self.num_lines() == other.num_lines() && self.num_steps() == other.num_steps()
    }
}

impl Default for CircuitGrid {
    fn default() -> Self {
        Self::editor_default()
    }
}

impl TryFrom<Vec<Vec<GateToken>>> for CircuitGrid {
    type Error = IrError;

    fn try_from(rows: Vec<Vec<GateToken>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<CircuitGrid> for Vec<Vec<GateToken>> {
    fn from(grid: CircuitGrid) -> Self {
        grid.rows
    }
}

impl std::fmt::Display for CircuitGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (line, row) in self.rows.iter().enumerate() {
            write!(f, "q{line}:")?;
            for token in row {
                write!(f, " {:>6}", token.as_str())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
