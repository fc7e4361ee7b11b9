//! Flame CLI - Command Line Operations for the Quasi-2D Flame Solver
//!
//! # Commands
//!
//! - `flame run` - Integrate a configured case and write state and time series files
//! - `flame sample --grid <file> --x <r> --y <z>` - Evaluate a CSV grid at one point
//! - `flame check` - Validate a configuration and its flow-field files
//!
//! # Architecture
//!
//! Service layer: parses arguments, sets up logging and delegates to
//! `flame_solver` (L2) and `flame_core` (L1).

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Quasi-2D flame solver CLI
#[derive(Parser)]
#[command(name = "flame")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "flame.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the solver to t_end
    Run {
        /// State file to write (default: output.dir/output.state_file)
        #[arg(short, long)]
        state: Option<PathBuf>,

        /// Time series file to write (default: output.dir/output.timeseries_file)
        #[arg(short, long)]
        timeseries: Option<PathBuf>,

        /// Resume from a previously written state file
        #[arg(short, long)]
        restart: Option<PathBuf>,
    },

    /// Evaluate a CSV grid file at one point
    Sample {
        /// Path to the grid file
        #[arg(short, long)]
        grid: PathBuf,

        /// Column (x) coordinate
        #[arg(short, long, allow_hyphen_values = true)]
        x: f64,

        /// Row (y) coordinate
        #[arg(short, long, allow_hyphen_values = true)]
        y: f64,
    },

    /// Validate configuration and flow-field files without running
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive(format!("flame_solver={}", default_level).parse()?)
                .add_directive(format!("service_cli={}", default_level).parse()?),
        )
        .init();

    match cli.command {
        Commands::Run {
            state,
            timeseries,
            restart,
        } => commands::run::run(
            &cli.config,
            state.as_deref(),
            timeseries.as_deref(),
            restart.as_deref(),
        )?,
        Commands::Sample { grid, x, y } => commands::sample::run(&grid, x, y)?,
        Commands::Check => commands::check::run(&cli.config)?,
    }
    Ok(())
}
