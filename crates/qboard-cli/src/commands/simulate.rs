//! Simulate command implementation.

use std::sync::Arc;

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use qboard_adapter_http::{BackendFactory, HttpSimulator};
use qboard_editor::EditorSession;
use qboard_state::DisplayMode;

use super::common::{BoardArgs, print_dataset, resolve_board};
use crate::config::Config;

/// Flags of the simulate command.
pub struct Options<'a> {
    pub step: Option<usize>,
    pub mode: Option<&'a str>,
    pub endpoint: Option<&'a str>,
    pub all: bool,
    pub json: bool,
}

/// Execute the simulate command.
pub async fn execute(board: &BoardArgs, config: &Config, opts: Options<'_>) -> Result<()> {
    let (label, grid) = resolve_board(board)?;

    let mode: DisplayMode = match opts.mode {
        Some(m) => m.parse().map_err(|e: String| anyhow::anyhow!(e))?,
        None => config.display.mode,
    };

    let mut backend_config = config.backend_config();
    if let Some(endpoint) = opts.endpoint {
        backend_config = backend_config.with_endpoint(endpoint);
    }
    let backend = HttpSimulator::from_config(backend_config)?;
    let endpoint = backend.endpoint().to_string();

    let steps = grid.num_steps();
    let mut session = EditorSession::with_grid(Arc::new(backend), grid)?;
    session.set_display_mode(mode);
    session.set_displayed_step(opts.step.unwrap_or(steps.saturating_sub(1)))?;

    if !opts.json {
        println!(
            "{} Simulating {} ({} steps) on {}",
            style("→").cyan().bold(),
            style(&label).green(),
            steps,
            style(&endpoint).yellow()
        );
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Waiting for simulator...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let outcome = session.refresh().await;
    spinner.finish_and_clear();
    outcome?;

    let Some(dataset) = session.dataset()? else {
        anyhow::bail!("Simulator returned no result");
    };

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&dataset)?);
        return Ok(());
    }

    println!(
        "\n{} State after column {} of {} ({}):",
        style("✓").green().bold(),
        dataset.step,
        steps,
        mode
    );
    print_dataset(&dataset, opts.all || config.display.show_zero);

    if let Some(best) = dataset.most_likely() {
        println!(
            "\n  Most likely: {} ({:.6})",
            style(&best.bitstring).cyan().bold(),
            best.value
        );
    }

    Ok(())
}
