//! qboard Command-Line Interface
//!
//! Encode, check and simulate circuit boards from the terminal.
//!
//! ```text
//!   q0 ─[H]─●────────
//!   q1 ─────⊕──●─────
//!   q2 ────────⊕─────
//!
//!          q b o a r d
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::common::BoardArgs;
use commands::{encode, presets, simulate, validate, version};
use config::Config;

/// qboard - quantum circuit board editor tools
#[derive(Parser)]
#[command(name = "qboard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ~/.qboard/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a board into the simulator request body
    Encode {
        #[command(flatten)]
        board: BoardArgs,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Check a board against the placement rules
    Validate {
        #[command(flatten)]
        board: BoardArgs,
    },

    /// Simulate a board and print the chart for one step
    Simulate {
        #[command(flatten)]
        board: BoardArgs,

        /// Step to display (defaults to the last column)
        #[arg(short, long)]
        step: Option<usize>,

        /// Display mode (probability, amplitude)
        #[arg(short, long)]
        mode: Option<String>,

        /// Simulator endpoint, overrides configuration
        #[arg(long)]
        endpoint: Option<String>,

        /// Show zero-valued basis states too
        #[arg(long)]
        all: bool,

        /// Print the dataset as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the built-in boards
    Presets {
        /// Draw each board
        #[arg(long)]
        show: bool,
    },

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging; RUST_LOG wins over -v
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Encode {
            board,
            output,
            pretty,
        } => encode::execute(&board, output.as_deref(), pretty),

        Commands::Validate { board } => validate::execute(&board),

        Commands::Simulate {
            board,
            step,
            mode,
            endpoint,
            all,
            json,
        } => match Config::load(cli.config.as_deref()) {
            Ok(config) => {
                simulate::execute(
                    &board,
                    &config,
                    simulate::Options {
                        step,
                        mode: mode.as_deref(),
                        endpoint: endpoint.as_deref(),
                        all,
                        json,
                    },
                )
                .await
            }
            Err(e) => Err(e.into()),
        },

        Commands::Presets { show } => {
            presets::execute(show);
            Ok(())
        }

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_simulate() {
        let cli = Cli::try_parse_from([
            "qboard", "-vv", "simulate", "--preset", "bell", "-s", "2", "-m", "amplitude",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Simulate {
                board, step, mode, ..
            } => {
                assert_eq!(board.preset.as_deref(), Some("bell"));
                assert_eq!(step, Some(2));
                assert_eq!(mode.as_deref(), Some("amplitude"));
            }
            _ => panic!("expected simulate"),
        }
    }

    #[test]
    fn test_board_source_required() {
        assert!(Cli::try_parse_from(["qboard", "encode"]).is_err());
        assert!(
            Cli::try_parse_from(["qboard", "encode", "-i", "a.json", "-p", "bell"]).is_err()
        );
    }
}
