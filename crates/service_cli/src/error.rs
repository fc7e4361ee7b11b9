//! CLI error types.

use flame_solver::error::{ConfigError, SolverError};
use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Bad command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration or grid file error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Solver API error
    #[error(transparent)]
    Solver(#[from] SolverError),

    /// Integration stopped before `t_end`
    #[error("Run failed at t = {time}: {reason}")]
    RunFailed {
        /// Last successfully reached simulation time
        time: f64,
        /// Why the run stopped
        reason: String,
    },
}

/// CLI result alias
pub type Result<T> = std::result::Result<T, CliError>;
