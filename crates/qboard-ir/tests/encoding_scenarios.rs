//! Scenario tests for editing a board and encoding it for the simulator.

use qboard_ir::{
    Cell, CircuitGrid, EncodedCircuit, GateToken, IrError, PlacementCommand, PlacementViolation,
    Preset, encode, placement,
};

fn apply(grid: &CircuitGrid, commands: &[PlacementCommand]) -> CircuitGrid {
    placement::apply_all(grid, commands).unwrap()
}

// ---------------------------------------------------------------------------
// Control over a non-X gate
// ---------------------------------------------------------------------------

#[test]
fn test_control_over_h_encodes_as_cnot_pair() {
    let grid = CircuitGrid::new(2, 1).unwrap();
    let grid = apply(
        &grid,
        &[
            PlacementCommand::place(1, 0, GateToken::H),
            PlacementCommand::place(0, 0, GateToken::Control),
        ],
    );

    let wire = encode(&grid);
    assert_eq!(wire.to_strings(), vec![vec!["CNOT-1"], vec!["CNOT-2"]]);

    // The board keeps the H so that removing the control restores it.
    assert_eq!(grid.get(1, 0).unwrap(), GateToken::H);
    let grid = placement::remove(&grid, Cell::new(0, 0)).unwrap();
    assert_eq!(encode(&grid).to_strings(), vec![vec!["I"], vec!["H"]]);
}

#[test]
fn test_control_placed_before_target_rejected() {
    let grid = CircuitGrid::new(2, 1).unwrap();
    let err = placement::place(&grid, Cell::new(0, 0), GateToken::Control).unwrap_err();
    assert_eq!(
        err,
        IrError::InvalidPlacement {
            cell: Cell::new(0, 0),
            violation: PlacementViolation::NoTarget,
        }
    );
}

// ---------------------------------------------------------------------------
// Editing sessions
// ---------------------------------------------------------------------------

#[test]
fn test_bell_built_by_hand_matches_preset_wire() {
    let grid = apply(
        &CircuitGrid::default(),
        &[
            PlacementCommand::place(0, 0, GateToken::H),
            PlacementCommand::place(1, 1, GateToken::X),
            PlacementCommand::place(0, 1, GateToken::Control),
        ],
    );
    assert_eq!(encode(&grid), encode(&Preset::Bell.grid()));
}

#[test]
fn test_removing_target_keeps_board_encodable() {
    let grid = Preset::Ghz.grid();
    let grid = placement::remove(&grid, Cell::new(2, 2)).unwrap();
    assert_eq!(grid.get(1, 2).unwrap(), GateToken::Identity);
    placement::validate(&grid).unwrap();

    let wire = encode(&grid).to_strings();
    assert_eq!(wire[1][2], "I");
    assert_eq!(wire[2][2], "I");
}

#[test]
fn test_swap_pair_lifecycle() {
    let grid = CircuitGrid::default();
    let grid = placement::place(&grid, Cell::new(5, 0), GateToken::Swap).unwrap();
    assert_eq!(grid.get(4, 0).unwrap(), GateToken::Swap);

    let wire = encode(&grid).to_strings();
    assert_eq!(wire[4][0], "Swap");
    assert_eq!(wire[5][0], "Swap");

    let grid = placement::place(&grid, Cell::new(4, 0), GateToken::T).unwrap();
    assert_eq!(grid.get(5, 0).unwrap(), GateToken::Identity);
    assert_eq!(grid.count_gates(), 1);
}

// ---------------------------------------------------------------------------
// Presets through the wire
// ---------------------------------------------------------------------------

#[test]
fn test_presets_survive_wire_round_trip() {
    for preset in Preset::all() {
        let grid = preset.grid();
        let wire = encode(&grid);
        let json = serde_json::to_string(&wire).unwrap();
        let back: EncodedCircuit = serde_json::from_str(&json).unwrap();
        let decoded = back.decode().unwrap();
        placement::validate(&decoded).unwrap();
        assert_eq!(encode(&decoded), wire, "{preset}");
    }
}

#[test]
fn test_grover_wire_oracle() {
    let wire = encode(&Preset::Grover.grid()).to_strings();
    assert_eq!(wire[0][5], "CNOT-1");
    assert_eq!(wire[1][5], "CNOT-2");
    assert_eq!(wire[0][..8], ["H", "I", "I", "H", "X", "CNOT-1", "X", "H"]);
}

#[test]
fn test_malformed_payload_rejected() {
    let payload: EncodedCircuit = serde_json::from_str(r#"[["CNOT-2","I"],["I","I"]]"#).unwrap();
    assert!(matches!(
        payload.decode(),
        Err(IrError::MalformedEncoding { cell, .. }) if cell == Cell::new(0, 0)
    ));
    assert!(serde_json::from_str::<EncodedCircuit>(r#"[["I"],["I","I"]]"#).is_err());
    assert!(serde_json::from_str::<EncodedCircuit>(r#"[["C_down"],["X"]]"#).is_err());
}
