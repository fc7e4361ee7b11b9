//! Error types for the flame solver.
//!
//! - [`ConfigError`]: Loading, parsing and validating configuration
//! - [`IntegrationError`]: Failures inside the time integrator
//! - [`SolverError`]: Everything that can fail on the solver's API surface
//!
//! `FlameSolver::run` does not return these; integration failures are
//! folded into `RunOutcome::Failed`.

use flame_core::types::InterpolationError;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading a configuration or grid file
    #[error("IO error reading {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Parse error in the configuration document
    #[error("Parse error: {0}")]
    Parse(String),

    /// One or more invalid settings
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// A flow-field table could not be turned into an interpolator
    #[error("Invalid {component} field: {source}")]
    Field {
        /// Flow component name
        component: &'static str,
        /// Grid validation failure
        #[source]
        source: InterpolationError,
    },

    /// Malformed CSV grid file
    #[error("Invalid grid file {path}: {message}")]
    GridFile {
        /// File being read
        path: PathBuf,
        /// Description of the problem
        message: String,
    },
}

/// Time integration failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntegrationError {
    /// `advance` called before `initialize`
    #[error("Integrator not initialized")]
    NotInitialized,

    /// The state left the region where the model is meaningful
    #[error("Diverged at t = {time}: {reason}")]
    Diverged {
        /// Simulation time of the failed step
        time: f64,
        /// Description of the divergence
        reason: String,
    },

    /// A computed quantity became NaN or infinite
    #[error("Non-finite {quantity} at t = {time}")]
    NonFinite {
        /// Name of the offending quantity
        quantity: &'static str,
        /// Simulation time of the failed step
        time: f64,
    },

    /// A saved model state does not fit this integrator
    #[error("Cannot restore model state: {0}")]
    Restore(String),
}

/// Solver API error type
#[derive(Debug, Error)]
pub enum SolverError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Integrator rejected initialisation or restoration
    #[error("Integrator error: {0}")]
    Integration(#[from] IntegrationError),

    /// Operation requires `initialize` first
    #[error("Solver not initialized")]
    NotInitialized,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV output error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// State file (de)serialisation error
    #[error("State file error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Loaded data violates an invariant
    #[error("Corrupt state: {0}")]
    CorruptState(String),
}
