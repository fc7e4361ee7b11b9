//! Kinematic flame sheet.
//!
//! The flame is a thin sheet crossing the axis at radius `r`. Its axial
//! position obeys
//!
//! ```text
//! dz/dt = u_z(r, z) - S_c(r, z)
//! S_c   = S_L0 * (T_u(r, z) / T_ref)^alpha
//! q     = rho_u * S_c * dh
//! ```
//!
//! where `u_z` and `T_u` are sampled from the flow field. Stepping is
//! explicit midpoint (second order). Fields are evaluated outside their grid
//! by linear extrapolation, so the sheet may leave the tabulated region by up
//! to `domain_margin` before the run is declared diverged.

use super::{FlameIntegrator, ModelState, StepDiagnostics};
use crate::config::{FlameConfig, SolverConfig};
use crate::error::IntegrationError;
use flame_core::quasi2d::FlowField;
use tracing::debug;

const POSITION: &str = "flame_position";

/// Flame sheet convected by the axial flow.
#[derive(Debug, Default)]
pub struct KinematicFlame {
    state: Option<SheetState>,
}

#[derive(Debug)]
struct SheetState {
    params: FlameConfig,
    flow: FlowField<f64>,
    z_bounds: (f64, f64),
    position: f64,
}

impl KinematicFlame {
    /// Create an uninitialised integrator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current flame position, if initialised.
    pub fn position(&self) -> Option<f64> {
        self.state.as_ref().map(|s| s.position)
    }
}

impl SheetState {
    fn consumption_speed(&self, z: f64) -> f64 {
        let p = &self.params;
        let t_u = self.flow.temperature(p.radius, z);
        p.laminar_speed * (t_u / p.reference_temperature).powf(p.temperature_exponent)
    }

    fn displacement_rate(&self, z: f64) -> f64 {
        self.flow.axial_velocity(self.params.radius, z) - self.consumption_speed(z)
    }

    fn check_bounds(&self, z: f64, time: f64) -> Result<(), IntegrationError> {
        match self.bounds_violation(z) {
            Some(reason) => Err(IntegrationError::Diverged { time, reason }),
            None => Ok(()),
        }
    }

    fn bounds_violation(&self, z: f64) -> Option<String> {
        let (lo, hi) = self.z_bounds;
        (z < lo || z > hi).then(|| {
            format!(
                "flame position {} outside allowed range [{}, {}]",
                z, lo, hi
            )
        })
    }
}

impl FlameIntegrator for KinematicFlame {
    fn name(&self) -> &'static str {
        "kinematic"
    }

    fn initialize(
        &mut self,
        config: &SolverConfig,
        flow: FlowField<f64>,
    ) -> Result<(), IntegrationError> {
        let params = config.flame.clone();
        let (z_lo, z_hi) = flow.domain_z();
        let margin = params.domain_margin;
        let state = SheetState {
            z_bounds: (z_lo - margin, z_hi + margin),
            position: params.initial_position,
            params,
            flow,
        };
        state.check_bounds(state.position, config.time.t_start)?;

        debug!(
            position = state.position,
            z_bounds = ?state.z_bounds,
            "Kinematic flame initialised"
        );
        self.state = Some(state);
        Ok(())
    }

    fn advance(&mut self, t: f64, dt: f64) -> Result<StepDiagnostics, IntegrationError> {
        let state = self.state.as_mut().ok_or(IntegrationError::NotInitialized)?;
        let t_next = t + dt;

        let z0 = state.position;
        let k1 = state.displacement_rate(z0);
        let k2 = state.displacement_rate(z0 + 0.5 * dt * k1);
        let z1 = z0 + dt * k2;

        if !z1.is_finite() {
            return Err(IntegrationError::NonFinite {
                quantity: POSITION,
                time: t_next,
            });
        }
        state.check_bounds(z1, t_next)?;

        let consumption_speed = state.consumption_speed(z1);
        if !consumption_speed.is_finite() {
            return Err(IntegrationError::NonFinite {
                quantity: "consumption_speed",
                time: t_next,
            });
        }
        let p = &state.params;
        let heat_release_rate = p.unburned_density * consumption_speed * p.heat_of_combustion;

        state.position = z1;
        Ok(StepDiagnostics {
            heat_release_rate,
            consumption_speed,
            flame_position: z1,
        })
    }

    fn snapshot(&self) -> ModelState {
        let snapshot = ModelState::new(self.name());
        match &self.state {
            Some(state) => snapshot.with_variable(POSITION, state.position),
            None => snapshot,
        }
    }

    fn restore(&mut self, snapshot: &ModelState) -> Result<(), IntegrationError> {
        if snapshot.model != self.name() {
            return Err(IntegrationError::Restore(format!(
                "state was written by model '{}', expected '{}'",
                snapshot.model,
                self.name()
            )));
        }
        let position = snapshot.require(POSITION)?;
        if !position.is_finite() {
            return Err(IntegrationError::Restore(format!(
                "{} is not finite: {}",
                POSITION, position
            )));
        }

        let state = self.state.as_mut().ok_or(IntegrationError::NotInitialized)?;
        if let Some(reason) = state.bounds_violation(position) {
            return Err(IntegrationError::Restore(reason));
        }
        state.position = position;
        Ok(())
    }
}
