//! # flame_solver: Quasi-2D Flame Solver Engine
//!
//! ## Layer 2 Role
//!
//! Builds on `flame_core` (L1) to provide the solver's library surface:
//! - `config`: TOML configuration with environment overrides and validation
//! - `flow`: Flow-field sources (uniform, inline table, CSV grid file)
//! - `integrator`: The `FlameIntegrator` seam and the kinematic flame model
//! - `solver`: `FlameSolver` with `initialize`, `run`, `write_state_file`,
//!   `write_timeseries_file` and the four recorded output sequences
//! - `timeseries`, `state`: Output and restart persistence
//!
//! ## Example
//!
//! ```rust
//! use flame_solver::prelude::*;
//!
//! let config = SolverConfig::from_toml_str(
//!     r#"
//!     [time]
//!     t_end = 0.01
//!     dt = 0.001
//!
//!     [flow]
//!     axial_velocity = { uniform = 0.38 }
//!     "#,
//! )
//! .unwrap();
//!
//! let mut solver = FlameSolver::with_kinematic_flame();
//! solver.initialize(config).unwrap();
//!
//! match solver.run() {
//!     RunOutcome::Completed { final_time } => assert!((final_time - 0.01).abs() < 1e-12),
//!     RunOutcome::Failed { reason, .. } => panic!("{}", reason),
//! }
//! // Burning velocity balances the inflow, so the flame holds position
//! assert!(solver.flame_position().iter().all(|z| z.abs() < 1e-12));
//! ```

#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod flow;
pub mod integrator;
pub mod solver;
pub mod state;
pub mod timeseries;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{FlameConfig, OutputConfig, SolverConfig, TimeConfig};
    pub use crate::error::{ConfigError, IntegrationError, SolverError};
    pub use crate::flow::{FieldSource, FlowConfig};
    pub use crate::integrator::{FlameIntegrator, KinematicFlame, ModelState, StepDiagnostics};
    pub use crate::solver::{FlameSolver, RunOutcome};
    pub use crate::timeseries::TimeSeries;
}
