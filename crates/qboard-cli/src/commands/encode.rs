//! Encode command implementation.

use anyhow::{Context, Result};
use console::style;

use qboard_hal::SimulateRequest;
use qboard_ir::{encode, placement};

use super::common::{BoardArgs, resolve_board};

/// Execute the encode command.
pub fn execute(board: &BoardArgs, output: Option<&str>, pretty: bool) -> Result<()> {
    let (label, grid) = resolve_board(board)?;

    // Encoding assumes every control has a target.
    placement::validate(&grid).with_context(|| format!("Board '{label}' is not valid"))?;

    let request = SimulateRequest::new(&encode(&grid));
    let body = if pretty {
        serde_json::to_string_pretty(&request)?
    } else {
        serde_json::to_string(&request)?
    };

    match output {
        Some(path) => {
            std::fs::write(path, &body).with_context(|| format!("Failed to write {path}"))?;
            println!(
                "{} Encoded {} ({} lines x {} steps) to {}",
                style("✓").green().bold(),
                style(&label).green(),
                grid.num_lines(),
                grid.num_steps(),
                style(path).cyan()
            );
        }
        None => println!("{body}"),
    }

    Ok(())
}
