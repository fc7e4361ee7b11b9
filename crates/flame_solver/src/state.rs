//! Restart state files.

use crate::error::SolverError;
use crate::integrator::ModelState;
use crate::timeseries::TimeSeries;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io;

/// Current state file layout version.
pub const STATE_FORMAT_VERSION: u32 = 1;

/// Everything needed to continue a run: solver clock, model state and the
/// series recorded so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverState {
    /// Layout version, checked on load
    pub format_version: u32,
    /// When the file was written
    pub written_at: DateTime<Utc>,
    /// Simulation time [s]
    pub time: f64,
    /// Completed step count
    pub step: u64,
    /// Integrator state
    pub model: ModelState,
    /// Recorded output sequences
    pub series: TimeSeries,
}

impl SolverState {
    /// Capture a state stamped with the current time.
    pub fn new(time: f64, step: u64, model: ModelState, series: TimeSeries) -> Self {
        Self {
            format_version: STATE_FORMAT_VERSION,
            written_at: Utc::now(),
            time,
            step,
            model,
            series,
        }
    }

    /// Write as pretty-printed JSON.
    pub fn write_json<W: io::Write>(&self, writer: W) -> Result<(), SolverError> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Read and check a JSON state file.
    pub fn read_json<R: io::Read>(reader: R) -> Result<Self, SolverError> {
        let state: Self = serde_json::from_reader(reader)?;

        if state.format_version != STATE_FORMAT_VERSION {
            return Err(SolverError::CorruptState(format!(
                "unsupported format version {} (expected {})",
                state.format_version, STATE_FORMAT_VERSION
            )));
        }
        if !state.time.is_finite() {
            return Err(SolverError::CorruptState(format!(
                "time is not finite: {}",
                state.time
            )));
        }
        if let Some(last) = state.series.last_time() {
            if last > state.time {
                return Err(SolverError::CorruptState(format!(
                    "series extends to t = {} beyond state time {}",
                    last, state.time
                )));
            }
        }
        Ok(state)
    }
}
