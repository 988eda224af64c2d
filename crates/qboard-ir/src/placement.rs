//! Placement engine: the only place grid edits happen.
//!
//! Every command works on a private copy of the grid and returns it only if
//! the result satisfies all structural rules, so a rejected command leaves
//! the caller's grid untouched.
//!
//! # Structural rules
//!
//! - A [`GateToken::Control`] must sit above a single-qubit gate on the next
//!   line. It cannot sit on the last line.
//! - The target of a control may only be replaced by another single-qubit
//!   gate. Removing the target removes the control as well.
//! - [`GateToken::Swap`] halves come in vertically adjacent pairs. Placing a
//!   swap writes both halves; the partner goes on the line below if it is
//!   empty, otherwise on the line above. Removing or overwriting one half
//!   clears the other.
//!
//! Swap halves in one column pair up top-down, so every vertical run of
//! swap cells has even length.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cell::Cell;
use crate::error::{IrError, IrResult, PlacementViolation};
use crate::grid::CircuitGrid;
use crate::token::GateToken;

/// A single edit request from the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PlacementCommand {
    /// Set the token at a cell.
    Place {
        /// Target cell.
        cell: Cell,
        /// Token to place.
        token: GateToken,
    },
    /// Clear a cell back to Identity.
    Remove {
        /// Target cell.
        cell: Cell,
    },
}

impl PlacementCommand {
    /// Create a place command.
    pub fn place(line: usize, step: usize, token: GateToken) -> Self {
        PlacementCommand::Place {
            cell: Cell::new(line, step),
            token,
        }
    }

    /// Create a remove command.
    pub fn remove(line: usize, step: usize) -> Self {
        PlacementCommand::Remove {
            cell: Cell::new(line, step),
        }
    }

    /// The cell this command addresses.
    pub fn cell(&self) -> Cell {
        match self {
            PlacementCommand::Place { cell, .. } | PlacementCommand::Remove { cell } => *cell,
        }
    }

    /// Apply this command to `grid`, returning the edited copy.
    pub fn apply(&self, grid: &CircuitGrid) -> IrResult<CircuitGrid> {
        match *self {
            PlacementCommand::Place { cell, token } => place(grid, cell, token),
            PlacementCommand::Remove { cell } => remove(grid, cell),
        }
    }
}

/// Place `token` at `cell`.
///
/// Placing [`GateToken::Identity`] is the same as [`remove`]. Any previous
/// token at the cell is discarded.
pub fn place(grid: &CircuitGrid, cell: Cell, token: GateToken) -> IrResult<CircuitGrid> {
    grid.check(cell)?;
    if token.is_identity() {
        return remove(grid, cell);
    }

    let reject = |violation| {
        debug!(%cell, %token, %violation, "placement rejected");
        Err(IrError::InvalidPlacement { cell, violation })
    };

    if control_above(grid, cell).is_some() && !token.is_single_qubit() {
        return reject(PlacementViolation::OccupiedTarget(token));
    }

    let mut work = grid.clone();
    if work.at(cell) == GateToken::Swap {
        detach_swap(&mut work, cell);
    }

    let lines = work.num_lines();
    match token {
        GateToken::Control => {
            let Some(below) = cell.below(lines) else {
                return reject(PlacementViolation::NoTarget);
            };
            let target = work.at(below);
            if target.is_identity() {
                return reject(PlacementViolation::NoTarget);
            }
            if !target.is_controllable() {
                return reject(PlacementViolation::UncontrollableTarget(target));
            }
            work.set(cell, GateToken::Control)?;
        }
        GateToken::Swap => {
            let partner = [cell.below(lines), cell.above()]
                .into_iter()
                .flatten()
                .find(|c| work.at(*c).is_identity());
            let Some(partner) = partner else {
                return reject(PlacementViolation::NoSwapPartner);
            };
            work.set(cell, GateToken::Swap)?;
            work.set(partner, GateToken::Swap)?;
        }
        _ => work.set(cell, token)?,
    }

    debug!(%cell, %token, "placed");
    Ok(work)
}

/// Clear `cell` back to Identity.
///
/// Removing a swap half clears its partner; removing the target of a control
/// clears the control. Removing an empty cell is a no-op.
pub fn remove(grid: &CircuitGrid, cell: Cell) -> IrResult<CircuitGrid> {
    grid.check(cell)?;
    let mut work = grid.clone();
    match work.at(cell) {
        GateToken::Identity => return Ok(work),
        GateToken::Swap => detach_swap(&mut work, cell),
        _ => {
            if let Some(control) = control_above(&work, cell) {
                work.set(control, GateToken::Identity)?;
            }
        }
    }
    work.set(cell, GateToken::Identity)?;
    debug!(%cell, "removed");
    Ok(work)
}

/// Apply a sequence of commands in order, stopping at the first rejection.
///
/// On error the returned grid is never observed; the caller keeps its own.
pub fn apply_all<'a>(
    grid: &CircuitGrid,
    commands: impl IntoIterator<Item = &'a PlacementCommand>,
) -> IrResult<CircuitGrid> {
    let mut current = grid.clone();
    for command in commands {
        current = command.apply(&current)?;
    }
    Ok(current)
}

/// Check every structural rule on `grid`.
///
/// Used for grids that did not come through [`place`] and [`remove`]:
/// presets, decoded payloads and files.
pub fn validate(grid: &CircuitGrid) -> IrResult<()> {
    let lines = grid.num_lines();
    for (cell, token) in grid.cells() {
        if token != GateToken::Control {
            continue;
        }
        let violation = match cell.below(lines).map(|b| grid.at(b)) {
            None | Some(GateToken::Identity) => Some(PlacementViolation::OrphanedControl),
            Some(t) if !t.is_controllable() => Some(PlacementViolation::UncontrollableTarget(t)),
            Some(_) => None,
        };
        if let Some(violation) = violation {
            return Err(IrError::InvalidPlacement { cell, violation });
        }
    }

    for step in 0..grid.num_steps() {
        let mut run = 0usize;
        for line in 0..=lines {
            let is_swap = line < lines && grid.at(Cell::new(line, step)) == GateToken::Swap;
            if is_swap {
                run += 1;
            } else {
                if run % 2 == 1 {
                    return Err(IrError::InvalidPlacement {
                        cell: Cell::new(line - 1, step),
                        violation: PlacementViolation::UnpairedSwap,
                    });
                }
                run = 0;
            }
        }
    }
    Ok(())
}

/// The control whose target is `cell`, if any.
pub fn control_above(grid: &CircuitGrid, cell: Cell) -> Option<Cell> {
    grid.check(cell).ok()?;
    cell.above().filter(|above| {
        grid.at(*above) == GateToken::Control && !grid.at(cell).is_identity()
    })
}

/// The other half of the swap at `cell`, if `cell` is a paired swap half.
pub fn swap_partner(grid: &CircuitGrid, cell: Cell) -> Option<Cell> {
    grid.check(cell).ok()?;
    if grid.at(cell) != GateToken::Swap {
        return None;
    }
    let mut start = cell.line;
    while start > 0 && grid.at(Cell::new(start - 1, cell.step)) == GateToken::Swap {
        start -= 1;
    }
    let partner = if (cell.line - start) % 2 == 0 {
        cell.below(grid.num_lines())?
    } else {
        cell.above()?
    };
    (grid.at(partner) == GateToken::Swap).then_some(partner)
}

/// Clear the swap half at `cell` and its partner.
fn detach_swap(grid: &mut CircuitGrid, cell: Cell) {
    if let Some(partner) = swap_partner(grid, cell) {
        grid.put(partner, GateToken::Identity);
    }
    grid.put(cell, GateToken::Identity);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&[&str]]) -> CircuitGrid {
        CircuitGrid::from_strs(rows.iter().map(|r| r.iter().copied())).unwrap()
    }

    fn violation(result: IrResult<CircuitGrid>) -> PlacementViolation {
        match result {
            Err(IrError::InvalidPlacement { violation, .. }) => violation,
            other => panic!("expected InvalidPlacement, got {other:?}"),
        }
    }

    #[test]
    fn test_place_single_gate_overwrites() {
        let grid = board(&[&["H", "I"], &["I", "I"]]);
        let next = place(&grid, Cell::new(0, 0), GateToken::X).unwrap();
        assert_eq!(next.get(0, 0).unwrap(), GateToken::X);
        assert_eq!(next.count_gates(), 1);
    }

    #[test]
    fn test_control_on_last_line_rejected() {
        let grid = board(&[&["I"], &["H"]]);
        assert_eq!(
            violation(place(&grid, Cell::new(1, 0), GateToken::Control)),
            PlacementViolation::NoTarget
        );
    }

    #[test]
    fn test_control_above_identity_rejected() {
        let grid = CircuitGrid::new(2, 1).unwrap();
        assert_eq!(
            violation(place(&grid, Cell::new(0, 0), GateToken::Control)),
            PlacementViolation::NoTarget
        );
    }

    #[test]
    fn test_control_above_gate_accepted() {
        let grid = board(&[&["I"], &["H"]]);
        let next = place(&grid, Cell::new(0, 0), GateToken::Control).unwrap();
        assert_eq!(next.get(0, 0).unwrap(), GateToken::Control);
        assert_eq!(next.get(1, 0).unwrap(), GateToken::H);
    }

    #[test]
    fn test_control_above_swap_rejected() {
        let grid = board(&[&["I"], &["Swap"], &["Swap"]]);
        assert_eq!(
            violation(place(&grid, Cell::new(0, 0), GateToken::Control)),
            PlacementViolation::UncontrollableTarget(GateToken::Swap)
        );
    }

    #[test]
    fn test_control_chain_rejected() {
        let grid = board(&[&["C_down"], &["X"], &["Z"]]);
        assert_eq!(
            violation(place(&grid, Cell::new(1, 0), GateToken::Control)),
            PlacementViolation::OccupiedTarget(GateToken::Control)
        );
        // Retargeting with a single-qubit gate is fine.
        let next = place(&grid, Cell::new(1, 0), GateToken::H).unwrap();
        assert_eq!(next.get(0, 0).unwrap(), GateToken::Control);
        assert_eq!(next.get(1, 0).unwrap(), GateToken::H);
    }

    #[test]
    fn test_rejection_leaves_grid_unchanged() {
        let grid = board(&[&["Swap", "H"], &["Swap", "I"]]);
        let before = grid.clone();
        assert!(place(&grid, Cell::new(0, 1), GateToken::Control).is_err());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_remove_target_clears_control() {
        let grid = board(&[&["C_down"], &["X"]]);
        let next = remove(&grid, Cell::new(1, 0)).unwrap();
        assert!(next.is_empty());
    }

    #[test]
    fn test_remove_control_keeps_target() {
        let grid = board(&[&["C_down"], &["X"]]);
        let next = remove(&grid, Cell::new(0, 0)).unwrap();
        assert_eq!(next.get(1, 0).unwrap(), GateToken::X);
        assert_eq!(next.count_gates(), 1);
    }

    #[test]
    fn test_swap_places_partner_below() {
        let grid = CircuitGrid::new(3, 1).unwrap();
        let next = place(&grid, Cell::new(1, 0), GateToken::Swap).unwrap();
        assert_eq!(next.column(0).unwrap(), vec![
            GateToken::Identity,
            GateToken::Swap,
            GateToken::Swap
        ]);
    }

    #[test]
    fn test_swap_on_last_line_pairs_above() {
        let grid = CircuitGrid::new(3, 1).unwrap();
        let next = place(&grid, Cell::new(2, 0), GateToken::Swap).unwrap();
        assert_eq!(next.get(1, 0).unwrap(), GateToken::Swap);
        assert_eq!(next.get(0, 0).unwrap(), GateToken::Identity);
    }

    #[test]
    fn test_swap_without_room_rejected() {
        let grid = board(&[&["H"], &["I"], &["X"]]);
        let grid = place(&grid, Cell::new(1, 0), GateToken::Y).unwrap();
        let single = CircuitGrid::new(1, 1).unwrap();
        assert_eq!(
            violation(place(&single, Cell::new(0, 0), GateToken::Swap)),
            PlacementViolation::NoSwapPartner
        );
        assert_eq!(
            violation(place(&grid, Cell::new(1, 0), GateToken::Swap)),
            PlacementViolation::NoSwapPartner
        );
    }

    #[test]
    fn test_remove_swap_half_clears_partner() {
        let grid = board(&[&["Swap"], &["Swap"], &["Swap"], &["Swap"]]);
        let next = remove(&grid, Cell::new(2, 0)).unwrap();
        assert_eq!(next.column(0).unwrap(), vec![
            GateToken::Swap,
            GateToken::Swap,
            GateToken::Identity,
            GateToken::Identity
        ]);
    }

    #[test]
    fn test_overwrite_swap_half_clears_partner() {
        let grid = board(&[&["Swap"], &["Swap"]]);
        let next = place(&grid, Cell::new(1, 0), GateToken::H).unwrap();
        assert_eq!(next.get(0, 0).unwrap(), GateToken::Identity);
        assert_eq!(next.get(1, 0).unwrap(), GateToken::H);
    }

    #[test]
    fn test_place_identity_is_remove() {
        let grid = board(&[&["C_down"], &["X"]]);
        let next = place(&grid, Cell::new(1, 0), GateToken::Identity).unwrap();
        assert!(next.is_empty());
    }

    #[test]
    fn test_out_of_bounds_command() {
        let grid = CircuitGrid::new(2, 2).unwrap();
        assert!(matches!(
            PlacementCommand::place(2, 0, GateToken::X).apply(&grid),
            Err(IrError::IndexOutOfBounds { .. })
        ));
        assert!(matches!(
            PlacementCommand::remove(0, 5).apply(&grid),
            Err(IrError::IndexOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_apply_all_in_order() {
        let grid = CircuitGrid::new(2, 2).unwrap();
        let cmds = [
            PlacementCommand::place(1, 0, GateToken::X),
            PlacementCommand::place(0, 0, GateToken::Control),
            PlacementCommand::place(0, 1, GateToken::Swap),
        ];
        let next = apply_all(&grid, &cmds).unwrap();
        assert_eq!(next.get(0, 0).unwrap(), GateToken::Control);
        assert_eq!(next.get(1, 1).unwrap(), GateToken::Swap);
        validate(&next).unwrap();

        // Reversed order: the control arrives before its target.
        let reversed = [cmds[1], cmds[0]];
        assert!(apply_all(&grid, &reversed).is_err());
    }

    #[test]
    fn test_validate_detects_orphans() {
        let orphan = board(&[&["C_down"], &["I"]]);
        assert_eq!(
            violation(validate(&orphan).map(|()| orphan.clone())),
            PlacementViolation::OrphanedControl
        );
        let last_line = board(&[&["I"], &["C_down"]]);
        assert!(validate(&last_line).is_err());
        let odd_swaps = board(&[&["Swap"], &["Swap"], &["Swap"]]);
        assert_eq!(
            violation(validate(&odd_swaps).map(|()| odd_swaps.clone())),
            PlacementViolation::UnpairedSwap
        );
        validate(&board(&[&["Swap", "C_down"], &["Swap", "T"]])).unwrap();
    }

    #[test]
    fn test_command_serde() {
        let cmd = PlacementCommand::place(0, 3, GateToken::Control);
        let json = serde_json::to_value(cmd).unwrap();
        assert_eq!(json["op"], "place");
        assert_eq!(json["token"], "C_down");
        let back: PlacementCommand = serde_json::from_value(json).unwrap();
        assert_eq!(back, cmd);
    }
}
