//! qboard Circuit Board Model
//!
//! This crate holds the editor's view of a quantum circuit: a grid of gate
//! tokens with one row per qubit line and one column per time step. It is the
//! foundation every other qboard crate builds on.
//!
//! # Core Components
//!
//! - **Board**: [`CircuitGrid`] addressed by [`Cell`], holding [`GateToken`]s
//! - **Placement**: [`placement`] applies [`PlacementCommand`]s and enforces
//!   the control and swap adjacency rules
//! - **Encoding**: [`encode`] turns a board into the [`EncodedCircuit`] the
//!   simulation service accepts
//! - **Presets**: [`Preset`] boards for the toolbar
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use qboard_ir::{encode, placement, CircuitGrid, Cell, GateToken};
//!
//! let grid = CircuitGrid::default();
//! let grid = placement::place(&grid, Cell::new(0, 0), GateToken::H).unwrap();
//! let grid = placement::place(&grid, Cell::new(1, 1), GateToken::X).unwrap();
//! let grid = placement::place(&grid, Cell::new(0, 1), GateToken::Control).unwrap();
//!
//! let wire = encode(&grid);
//! assert_eq!(wire.to_strings()[0][..2], ["H", "CNOT-1"]);
//! assert_eq!(wire.to_strings()[1][..2], ["I", "CNOT-2"]);
//! ```
//!
//! # Tokens
//!
//! | Token | Lines | Wire form |
//! |-------|-------|-----------|
//! | `I` | 1 | `I` |
//! | `X`, `Y`, `Z` | 1 | unchanged |
//! | `H`, `S`, `T` | 1 | unchanged |
//! | `C_down` | 2 | `CNOT-1` over `CNOT-2` |
//! | `Swap` | 2 | unchanged, one per line |

pub mod cell;
pub mod encode;
pub mod error;
pub mod grid;
pub mod placement;
pub mod preset;
pub mod token;

pub use cell::Cell;
pub use encode::{EncodedCircuit, encode};
pub use error::{IrError, IrResult, PlacementViolation};
pub use grid::{CircuitGrid, EDITOR_LINES, EDITOR_STEPS};
pub use placement::PlacementCommand;
pub use preset::Preset;
pub use token::{GateToken, WireToken};
