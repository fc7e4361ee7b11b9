//! Time integrators driving the flame model.
//!
//! [`FlameSolver`](crate::solver::FlameSolver) owns exactly one
//! [`FlameIntegrator`] and only talks to it through this trait, so the model
//! numerics can be swapped without touching configuration, recording or
//! persistence.
//!
//! ## Available integrators
//!
//! - [`KinematicFlame`]: flame sheet convected by the sampled axial velocity
//!   and propagating at a temperature-dependent burning velocity

mod kinematic;

pub use kinematic::KinematicFlame;

use crate::config::SolverConfig;
use crate::error::IntegrationError;
use flame_core::quasi2d::FlowField;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Scalar diagnostics produced by one successful step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepDiagnostics {
    /// Integrated heat release rate [W/m^2]
    pub heat_release_rate: f64,
    /// Consumption speed [m/s]
    pub consumption_speed: f64,
    /// Axial flame position [m]
    pub flame_position: f64,
}

/// Serialisable snapshot of an integrator's internal state.
///
/// Variables are keyed by name so that the restart file stays readable and
/// independent of field ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelState {
    /// Name of the integrator that produced the snapshot
    pub model: String,
    /// Named state variables
    pub variables: BTreeMap<String, f64>,
}

impl ModelState {
    /// Create an empty snapshot for `model`.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            variables: BTreeMap::new(),
        }
    }

    /// Builder-style variable insertion.
    pub fn with_variable(mut self, name: impl Into<String>, value: f64) -> Self {
        self.variables.insert(name.into(), value);
        self
    }

    /// Look up a variable, failing with [`IntegrationError::Restore`] if absent.
    pub fn require(&self, name: &str) -> Result<f64, IntegrationError> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| IntegrationError::Restore(format!("missing variable '{}'", name)))
    }
}

/// Model time integrator.
///
/// Implementations keep the model state between calls. A failed `advance`
/// must leave that state untouched so the solver can report the last good
/// time.
pub trait FlameIntegrator: Send + fmt::Debug {
    /// Short model identifier, stored in restart files.
    fn name(&self) -> &'static str;

    /// Set up the initial state from configuration and a validated flow field.
    fn initialize(
        &mut self,
        config: &SolverConfig,
        flow: FlowField<f64>,
    ) -> Result<(), IntegrationError>;

    /// Advance the state from `t` to `t + dt`.
    fn advance(&mut self, t: f64, dt: f64) -> Result<StepDiagnostics, IntegrationError>;

    /// Capture the current state.
    fn snapshot(&self) -> ModelState;

    /// Replace the current state with a snapshot taken by the same model.
    fn restore(&mut self, state: &ModelState) -> Result<(), IntegrationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_state_require() {
        let state = ModelState::new("kinematic").with_variable("flame_position", 0.01);
        assert_eq!(state.require("flame_position"), Ok(0.01));
        assert!(matches!(
            state.require("temperature"),
            Err(IntegrationError::Restore(ref msg)) if msg.contains("temperature")
        ));
    }

    #[test]
    fn test_model_state_json_is_keyed() {
        let state = ModelState::new("kinematic").with_variable("flame_position", 0.5);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(
            json,
            r#"{"model":"kinematic","variables":{"flame_position":0.5}}"#
        );
        let back: ModelState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
