//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use console::style;

use qboard_ir::{CircuitGrid, EncodedCircuit, GateToken, Preset, WireToken};
use qboard_state::Dataset;

/// Where a command reads its board from.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct BoardArgs {
    /// Board file: a JSON or YAML array of token rows
    #[arg(short, long)]
    pub input: Option<String>,

    /// Built-in board (qft, grover, deutsch-jozsa, bell, ghz)
    #[arg(short, long)]
    pub preset: Option<String>,
}

/// Resolve the board named on the command line, with a label for output.
pub fn resolve_board(args: &BoardArgs) -> Result<(String, CircuitGrid)> {
    match (&args.input, &args.preset) {
        (_, Some(name)) => {
            let preset: Preset = name.parse()?;
            Ok((preset.name().to_string(), preset.grid()))
        }
        (Some(path), None) => Ok((path.clone(), load_board(path)?)),
        (None, None) => anyhow::bail!("No board given: pass --input or --preset"),
    }
}

/// Load a board from a JSON or YAML file.
///
/// The file holds one array of token ids per line. Editor ids (`"C_down"`)
/// and wire ids (`"CNOT-1"`, `"CNOT-2"`) are both accepted, so a saved
/// request body can be read back.
pub fn load_board(path: &str) -> Result<CircuitGrid> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        anyhow::bail!("File not found: {path}");
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;

    let ext = path_obj.extension().and_then(|e| e.to_str()).unwrap_or("");

    let rows: Vec<Vec<String>> = match ext.to_lowercase().as_str() {
        "yaml" | "yml" => {
            serde_yaml_ng::from_str(&source).map_err(|e| anyhow::anyhow!("Parse error: {e}"))?
        }
        _ => serde_json::from_str(&source).map_err(|e| anyhow::anyhow!("Parse error: {e}"))?,
    };

    parse_rows(&rows)
}

/// Build a board from rows of token ids.
pub fn parse_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<CircuitGrid> {
    let wire_form = rows
        .iter()
        .flatten()
        .any(|s| s.as_ref().starts_with("CNOT"));

    if wire_form {
        let wire = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|s| s.as_ref().parse::<WireToken>())
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(EncodedCircuit::from_rows(wire)?.decode()?)
    } else {
        Ok(CircuitGrid::from_strs(rows)?)
    }
}

fn symbol(token: GateToken) -> console::StyledObject<&'static str> {
    match token {
        GateToken::Identity => style("─").dim(),
        GateToken::Control => style("●").yellow().bold(),
        GateToken::Swap => style("×").magenta().bold(),
        other => style(other.as_str()).cyan().bold(),
    }
}

/// Draw a board, one line per qubit.
pub fn print_grid(grid: &CircuitGrid) {
    for (line, row) in grid.rows().iter().enumerate() {
        let cells: Vec<String> = row.iter().map(|&t| format!(" {} ", symbol(t))).collect();
        println!("  {} {}", style(format!("q{line}")).dim(), cells.join(""));
    }
}

/// Print a chart dataset as a bar table.
pub fn print_dataset(dataset: &Dataset, all: bool) {
    let records: Vec<_> = if all {
        dataset.records.iter().collect()
    } else {
        dataset.nonzero().collect()
    };

    for record in records {
        let bar_len = (record.value * 50.0).round() as usize;
        let bar: String = "█".repeat(bar_len);

        println!(
            "  {}: {:>8.6} {}",
            style(&record.bitstring).cyan(),
            record.value,
            style(bar).green()
        );
    }
}
