//! Board to wire-format encoding.
//!
//! The simulation service expects a matrix of token strings, one row per
//! qubit line. It understands controlled-X only as a `CNOT-1` / `CNOT-2`
//! pair on adjacent lines, so every [`GateToken::Control`] is expanded:
//!
//! ```text
//!   board            wire
//!   C_down   ──→     CNOT-1
//!   H        ──→     CNOT-2
//! ```
//!
//! The target's own gate stays on the board but is not sent: the service
//! always applies X under a control.

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::{IrError, IrResult};
use crate::grid::CircuitGrid;
use crate::placement;
use crate::token::{GateToken, WireToken};

/// The wire representation of a board. Same dimensions as the source grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<WireToken>>", into = "Vec<Vec<WireToken>>")]
pub struct EncodedCircuit {
    rows: Vec<Vec<WireToken>>,
}

impl EncodedCircuit {
    /// Build from raw wire rows, e.g. a payload read back from disk.
    pub fn from_rows(rows: Vec<Vec<WireToken>>) -> IrResult<Self> {
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

    /// Number of qubit lines.
    pub fn num_lines(&self) -> usize {
        self.rows.len()
    }

    /// Number of time steps.
    pub fn num_steps(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Wire rows, one per qubit line.
    pub fn rows(&self) -> &[Vec<WireToken>] {
        &self.rows
    }

    /// The token at `(line, step)`.
    pub fn get(&self, line: usize, step: usize) -> Option<WireToken> {
        self.rows.get(line).and_then(|row| row.get(step)).copied()
    }

    /// Rows as plain strings, the shape the service receives.
    pub fn to_strings(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|t| t.as_str().to_string()).collect())
            .collect()
    }

    /// Collapse every `CNOT-1` / `CNOT-2` pair back into a control marker.
    ///
    /// The target cell decodes as [`GateToken::X`], the gate the service
    /// applies there. The decoded board is checked with
    /// [`placement::validate`].
    pub fn decode(&self) -> IrResult<CircuitGrid> {
        let lines = self.num_lines();
        let mut rows = vec![vec![GateToken::Identity; self.num_steps()]; lines];

        for (line, row) in self.rows.iter().enumerate() {
            for (step, token) in row.iter().enumerate() {
                let cell = Cell::new(line, step);
                rows[line][step] = match token {
                    WireToken::Gate(GateToken::Control) => {
                        return Err(IrError::MalformedEncoding {
                            cell,
                            reason: "bare control marker on the wire".into(),
                        });
                    }
                    WireToken::Gate(gate) => *gate,
                    WireToken::CnotControl => {
                        if cell.below(lines).and_then(|b| self.get(b.line, b.step))
                            != Some(WireToken::CnotTarget)
                        {
                            return Err(IrError::MalformedEncoding {
                                cell,
                                reason: "CNOT-1 without CNOT-2 below".into(),
                            });
                        }
                        GateToken::Control
                    }
                    WireToken::CnotTarget => {
                        if cell.above().and_then(|a| self.get(a.line, a.step))
                            != Some(WireToken::CnotControl)
                        {
                            return Err(IrError::MalformedEncoding {
                                cell,
                                reason: "CNOT-2 without CNOT-1 above".into(),
                            });
                        }
                        GateToken::X
                    }
                };
            }
        }

        let grid = CircuitGrid::from_rows(rows)?;
        placement::validate(&grid)?;
        Ok(grid)
    }
}

/// Encode a board into the wire format.
///
/// Pure: the grid is not modified.
///
/// # Panics
///
/// Panics if the grid holds a control with no gate below it. The placement
/// engine never produces such a grid, so this is a caller bug; run
/// [`placement::validate`] on grids from untrusted sources first.
pub fn encode(grid: &CircuitGrid) -> EncodedCircuit {
    let lines = grid.num_lines();
    let mut rows: Vec<Vec<WireToken>> = grid
        .rows()
        .iter()
        .map(|row| row.iter().map(|&t| WireToken::Gate(t)).collect())
        .collect();

    for (cell, token) in grid.cells() {
        if token != GateToken::Control {
            continue;
        }
        let target = cell.below(lines);
        assert!(
            target.is_some_and(|b| !grid.at(b).is_identity()),
            "control at {cell} has no target; grid was not produced by the placement engine"
        );
        let Some(target) = target else { continue };
        rows[cell.line][cell.step] = WireToken::CnotControl;
        rows[target.line][target.step] = WireToken::CnotTarget;
    }

    EncodedCircuit { rows }
}

impl TryFrom<Vec<Vec<WireToken>>> for EncodedCircuit {
    type Error = IrError;

    fn try_from(rows: Vec<Vec<WireToken>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<EncodedCircuit> for Vec<Vec<WireToken>> {
    fn from(circuit: EncodedCircuit) -> Self {
        circuit.rows
    }
}

impl From<&CircuitGrid> for EncodedCircuit {
    fn from(grid: &CircuitGrid) -> Self {
        encode(grid)
    }
}
