//! Ready-made boards offered by the editor toolbar.

use std::fmt;
use std::str::FromStr;

use crate::error::{IrError, IrResult};
use crate::grid::{CircuitGrid, EDITOR_LINES, EDITOR_STEPS};
use crate::token::GateToken;

/// Width of the algorithm presets.
const ALGORITHM_STEPS: usize = 25;

/// A named example circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Three-qubit quantum Fourier transform, with controlled phases
    /// approximated by controlled-X and the final line reversal as swaps.
    Qft,
    /// One Grover iteration on two qubits, oracle marking `|11⟩`.
    Grover,
    /// Deutsch-Jozsa on one input qubit with a constant oracle.
    DeutschJozsa,
    /// Bell pair on lines 0 and 1.
    Bell,
    /// Three-qubit GHZ state on lines 0 to 2.
    Ghz,
}

impl Preset {
    /// Every preset, in toolbar order.
    pub fn all() -> &'static [Preset] {
        &[
            Preset::Qft,
            Preset::Grover,
            Preset::DeutschJozsa,
            Preset::Bell,
            Preset::Ghz,
        ]
    }

    /// Stable identifier, accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Preset::Qft => "qft",
            Preset::Grover => "grover",
            Preset::DeutschJozsa => "deutsch-jozsa",
            Preset::Bell => "bell",
            Preset::Ghz => "ghz",
        }
    }

    /// One-line description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            Preset::Qft => "Quantum Fourier transform on three lines",
            Preset::Grover => "Grover search over two qubits",
            Preset::DeutschJozsa => "Deutsch-Jozsa with a constant oracle",
            Preset::Bell => "Maximally entangled pair",
            Preset::Ghz => "Three-qubit GHZ state",
        }
    }

    /// Build the board for this preset.
    ///
    /// Every preset has [`EDITOR_LINES`] lines and passes
    /// [`crate::placement::validate`].
    pub fn grid(&self) -> CircuitGrid {
        use GateToken::{Control, Identity as I, Swap, H, S, T, X, Z};

        let (steps, gates): (usize, &[(usize, usize, GateToken)]) = match self {
            Preset::Qft => (
                ALGORITHM_STEPS,
                &[
                    (0, 2, Swap),
                    (0, 4, Swap),
                    (0, 6, Control),
                    (0, 7, H),
                    (1, 1, Control),
                    (1, 2, Swap),
                    (1, 3, Control),
                    (1, 4, Swap),
                    (1, 5, H),
                    (1, 6, S),
                    (2, 0, H),
                    (2, 1, S),
                    (2, 3, T),
                ],
            ),
            Preset::Grover => (
                ALGORITHM_STEPS,
                &[
                    (0, 0, H),
                    (0, 3, H),
                    (0, 4, X),
                    (0, 5, Control),
                    (0, 6, X),
                    (0, 7, H),
                    (1, 0, H),
                    (1, 3, H),
                    (1, 4, X),
                    (1, 5, Z),
                    (1, 6, X),
                    (1, 7, H),
                    (2, 0, H),
                    (2, 7, H),
                ],
            ),
            Preset::DeutschJozsa => (
                ALGORITHM_STEPS,
                &[(0, 1, H), (0, 4, H), (1, 0, X), (1, 1, H)],
            ),
            Preset::Bell => (EDITOR_STEPS, &[(0, 0, H), (0, 1, Control), (1, 1, X)]),
            Preset::Ghz => (
                EDITOR_STEPS,
                &[
                    (0, 0, H),
                    (0, 1, Control),
                    (1, 1, X),
                    (1, 2, Control),
                    (2, 2, X),
                ],
            ),
        };

        let mut rows = vec![vec![I; steps]; EDITOR_LINES];
        for &(line, step, token) in gates {
            rows[line][step] = token;
        }
        CircuitGrid::from_rows_unchecked(rows)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = IrError;

    fn from_str(s: &str) -> IrResult<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "qft" => Ok(Preset::Qft),
            "grover" => Ok(Preset::Grover),
            "deutsch-jozsa" | "deutschjozsa" | "dj" => Ok(Preset::DeutschJozsa),
            "bell" => Ok(Preset::Bell),
            "ghz" => Ok(Preset::Ghz),
            _ => Err(IrError::UnknownPreset(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::placement;

    #[test]
    fn test_all_presets_validate() {
        for preset in Preset::all() {
            let grid = preset.grid();
            assert_eq!(grid.num_lines(), EDITOR_LINES, "{preset}");
            placement::validate(&grid).unwrap_or_else(|e| panic!("{preset}: {e}"));
            assert!(!grid.is_empty());
        }
    }

    #[test]
    fn test_preset_widths() {
        assert_eq!(Preset::Qft.grid().num_steps(), 25);
        assert_eq!(Preset::Grover.grid().num_steps(), 25);
        assert_eq!(Preset::Bell.grid().num_steps(), EDITOR_STEPS);
    }

    #[test]
    fn test_grover_oracle() {
        let grid = Preset::Grover.grid();
        assert_eq!(grid.get(0, 5).unwrap(), GateToken::Control);
        assert_eq!(grid.get(1, 5).unwrap(), GateToken::Z);
        assert_eq!(grid.get(2, 7).unwrap(), GateToken::H);
        assert!(grid.rows()[3..].iter().flatten().all(GateToken::is_identity));
    }

    #[test]
    fn test_qft_swaps_pair() {
        let grid = Preset::Qft.grid();
        assert_eq!(
            placement::swap_partner(&grid, Cell::new(0, 2)),
            Some(Cell::new(1, 2))
        );
        assert_eq!(
            placement::swap_partner(&grid, Cell::new(1, 4)),
            Some(Cell::new(0, 4))
        );
    }

    #[test]
    fn test_preset_from_str() {
        for preset in Preset::all() {
            assert_eq!(preset.name().parse::<Preset>().unwrap(), *preset);
        }
        assert_eq!("DJ".parse::<Preset>().unwrap(), Preset::DeutschJozsa);
        assert_eq!("Deutsch_Jozsa".parse::<Preset>().unwrap(), Preset::DeutschJozsa);
        assert!(matches!(
            "shor".parse::<Preset>(),
            Err(IrError::UnknownPreset(s)) if s == "shor"
        ));
    }
}
