//! Flame solver facade.
//!
//! [`FlameSolver`] is the library surface: configure once with
//! [`initialize`](FlameSolver::initialize), integrate with
//! [`run`](FlameSolver::run), persist with
//! [`write_state_file`](FlameSolver::write_state_file) and
//! [`write_timeseries_file`](FlameSolver::write_timeseries_file), and read the
//! recorded output sequences through the accessors.
//!
//! `run` never returns an error. Integration failures are reported as
//! [`RunOutcome::Failed`] and everything recorded up to that point stays
//! readable and writable.

use crate::config::SolverConfig;
use crate::error::SolverError;
use crate::integrator::{FlameIntegrator, KinematicFlame, StepDiagnostics};
use crate::state::SolverState;
use crate::timeseries::TimeSeries;
use std::fmt;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Remaining time below this fraction of `dt` counts as having reached `t_end`.
const END_TOLERANCE: f64 = 1e-9;

/// Result of [`FlameSolver::run`].
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Integration reached `t_end`
    Completed {
        /// Simulation time at completion [s]
        final_time: f64,
    },
    /// Integration stopped early
    Failed {
        /// Why the run stopped
        reason: String,
        /// Last successfully reached simulation time [s]
        time: f64,
    },
}

impl RunOutcome {
    /// True for [`RunOutcome::Completed`].
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Completed { .. })
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::Completed { final_time } => write!(f, "completed at t = {}", final_time),
            RunOutcome::Failed { reason, time } => write!(f, "failed at t = {}: {}", time, reason),
        }
    }
}

/// Time-integrating flame solver.
///
/// # Example
///
/// ```
/// use flame_solver::prelude::*;
///
/// let mut config = SolverConfig::default();
/// config.time.t_end = 1e-3;
/// config.time.dt = 1e-4;
/// config.time.output_interval = 5;
///
/// let mut solver = FlameSolver::with_kinematic_flame();
/// solver.initialize(config).unwrap();
///
/// let outcome = solver.run();
/// assert!(outcome.is_success());
/// assert_eq!(solver.time_vector().len(), 2);
/// assert_eq!(solver.flame_position().len(), solver.heat_release_rate().len());
/// ```
#[derive(Debug)]
pub struct FlameSolver {
    integrator: Box<dyn FlameIntegrator>,
    config: Option<SolverConfig>,
    time: f64,
    step: u64,
    series: TimeSeries,
}

impl Default for FlameSolver {
    fn default() -> Self {
        Self::with_kinematic_flame()
    }
}

impl FlameSolver {
    /// Create an uninitialised solver driving `integrator`.
    pub fn new(integrator: Box<dyn FlameIntegrator>) -> Self {
        Self {
            integrator,
            config: None,
            time: 0.0,
            step: 0,
            series: TimeSeries::new(),
        }
    }

    /// Create an uninitialised solver with the [`KinematicFlame`] model.
    pub fn with_kinematic_flame() -> Self {
        Self::new(Box::new(KinematicFlame::new()))
    }

    /// Validate `config`, build the flow field and set up the model.
    ///
    /// Any previous run state and recorded series are discarded. On failure
    /// the solver is left uninitialised.
    pub fn initialize(&mut self, config: SolverConfig) -> Result<(), SolverError> {
        self.config = None;
        config.validate()?;

        let flow = config.flow.build(&config.base_dir)?;
        self.integrator.initialize(&config, flow)?;

        self.time = config.time.t_start;
        self.step = 0;
        self.series.clear();

        tracing::info!(
            model = self.integrator.name(),
            t_start = config.time.t_start,
            t_end = config.time.t_end,
            dt = config.time.dt,
            "Flame solver initialised"
        );
        self.config = Some(config);
        Ok(())
    }

    /// Integrate until `t_end`, the step limit, or an integration failure.
    ///
    /// A sample is recorded every `output_interval` steps and after the last
    /// successful step. Calling `run` again after a completed run returns
    /// immediately; after a restored state it continues from that state.
    pub fn run(&mut self) -> RunOutcome {
        let time_cfg = match &self.config {
            Some(config) => config.time.clone(),
            None => {
                return RunOutcome::Failed {
                    reason: SolverError::NotInitialized.to_string(),
                    time: self.time,
                }
            }
        };

        let mut steps_this_run: u64 = 0;
        let mut unrecorded: Option<StepDiagnostics> = None;

        let outcome = loop {
            let remaining = time_cfg.t_end - self.time;
            if remaining <= END_TOLERANCE * time_cfg.dt {
                break RunOutcome::Completed {
                    final_time: self.time,
                };
            }
            if steps_this_run >= time_cfg.max_steps {
                break RunOutcome::Failed {
                    reason: format!("step limit of {} reached", time_cfg.max_steps),
                    time: self.time,
                };
            }

            let next = (self.time + time_cfg.dt).min(time_cfg.t_end);
            match self.integrator.advance(self.time, next - self.time) {
                Ok(diagnostics) => {
                    self.time = next;
                    self.step += 1;
                    steps_this_run += 1;

                    if self.step % time_cfg.output_interval == 0 {
                        self.series.record(self.time, &diagnostics);
                        unrecorded = None;
                        tracing::debug!(
                            step = self.step,
                            time = self.time,
                            flame_position = diagnostics.flame_position,
                            consumption_speed = diagnostics.consumption_speed,
                            "Recorded sample"
                        );
                    } else {
                        unrecorded = Some(diagnostics);
                    }
                }
                Err(e) => {
                    break RunOutcome::Failed {
                        reason: e.to_string(),
                        time: self.time,
                    };
                }
            }
        };

        if let Some(diagnostics) = unrecorded {
            self.series.record(self.time, &diagnostics);
        }

        match &outcome {
            RunOutcome::Completed { final_time } => tracing::info!(
                final_time,
                steps = steps_this_run,
                samples = self.series.len(),
                "Run completed"
            ),
            RunOutcome::Failed { reason, time } => tracing::warn!(
                time,
                steps = steps_this_run,
                samples = self.series.len(),
                "Run failed: {}",
                reason
            ),
        }
        outcome
    }

    /// Write the restart state (clock, model state, recorded series) as JSON.
    ///
    /// Missing parent directories are created.
    pub fn write_state_file(&self, path: &Path) -> Result<(), SolverError> {
        if self.config.is_none() {
            return Err(SolverError::NotInitialized);
        }
        let state = SolverState::new(
            self.time,
            self.step,
            self.integrator.snapshot(),
            self.series.clone(),
        );

        let mut writer = BufWriter::new(create_file(path)?);
        state.write_json(&mut writer)?;
        writer.flush()?;

        tracing::info!(path = %path.display(), time = self.time, "Wrote state file");
        Ok(())
    }

    /// Write the recorded series as CSV.
    ///
    /// Missing parent directories are created. An empty series yields a
    /// header-only file.
    pub fn write_timeseries_file(&self, path: &Path) -> Result<(), SolverError> {
        self.series.write_csv(create_file(path)?)?;

        tracing::info!(
            path = %path.display(),
            samples = self.series.len(),
            "Wrote time series file"
        );
        Ok(())
    }

    /// Resume from a state file written by [`write_state_file`](Self::write_state_file).
    ///
    /// The solver must already be initialised with a compatible configuration.
    pub fn load_state_file(&mut self, path: &Path) -> Result<(), SolverError> {
        if self.config.is_none() {
            return Err(SolverError::NotInitialized);
        }
        let state = SolverState::read_json(BufReader::new(File::open(path)?))?;
        self.integrator.restore(&state.model)?;

        self.time = state.time;
        self.step = state.step;
        self.series = state.series;

        tracing::info!(
            path = %path.display(),
            time = self.time,
            step = self.step,
            "Restored state file"
        );
        Ok(())
    }

    /// Simulation times of recorded samples.
    pub fn time_vector(&self) -> &[f64] {
        self.series.time()
    }

    /// Heat release rate per recorded sample.
    pub fn heat_release_rate(&self) -> &[f64] {
        self.series.heat_release_rate()
    }

    /// Consumption speed per recorded sample.
    pub fn consumption_speed(&self) -> &[f64] {
        self.series.consumption_speed()
    }

    /// Flame position per recorded sample.
    pub fn flame_position(&self) -> &[f64] {
        self.series.flame_position()
    }

    /// All recorded sequences.
    pub fn series(&self) -> &TimeSeries {
        &self.series
    }

    /// Current simulation time.
    pub fn current_time(&self) -> f64 {
        self.time
    }

    /// Steps completed since `t_start`.
    pub fn step_count(&self) -> u64 {
        self.step
    }

    /// Whether `initialize` has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.config.is_some()
    }

    /// Active configuration.
    pub fn config(&self) -> Option<&SolverConfig> {
        self.config.as_ref()
    }

    /// Name of the driven model.
    pub fn model_name(&self) -> &'static str {
        self.integrator.name()
    }
}

fn create_file(path: &Path) -> Result<File, SolverError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(File::create(path)?)
}
