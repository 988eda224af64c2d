//! Validate command implementation.

use anyhow::Result;
use console::style;

use qboard_ir::{EDITOR_LINES, placement};

use super::common::{BoardArgs, print_grid, resolve_board};

/// Execute the validate command.
pub fn execute(board: &BoardArgs) -> Result<()> {
    let (label, grid) = resolve_board(board)?;

    println!(
        "{} Checking {} ({} lines x {} steps, {} gates)",
        style("→").cyan().bold(),
        style(&label).green(),
        grid.num_lines(),
        grid.num_steps(),
        grid.count_gates()
    );
    print_grid(&grid);

    placement::validate(&grid)?;

    if grid.num_lines() != EDITOR_LINES {
        println!(
            "  {} board has {} lines; the editor uses {}",
            style("!").yellow().bold(),
            grid.num_lines(),
            EDITOR_LINES
        );
    }

    println!("{} Board is valid", style("✓").green().bold());
    Ok(())
}
