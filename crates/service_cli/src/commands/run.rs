//! Run command implementation
//!
//! Loads a case, integrates it and writes the state and time series files.
//! Output files are written even when the run fails, so the partial series
//! can be inspected.

use flame_solver::config::SolverConfig;
use flame_solver::solver::{FlameSolver, RunOutcome};
use std::path::Path;
use tracing::info;

use super::require_file;
use crate::{CliError, Result};

/// Run the run command
pub fn run(
    config_path: &Path,
    state: Option<&Path>,
    timeseries: Option<&Path>,
    restart: Option<&Path>,
) -> Result<()> {
    require_file(config_path)?;
    info!("Loading configuration from {}", config_path.display());

    let config = SolverConfig::load_with_env_and_validate(config_path)?;
    let state_path = state
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.output.state_path());
    let timeseries_path = timeseries
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.output.timeseries_path());

    let mut solver = FlameSolver::with_kinematic_flame();
    solver.initialize(config)?;

    if let Some(restart_path) = restart {
        require_file(restart_path)?;
        solver.load_state_file(restart_path)?;
    }

    let outcome = solver.run();

    solver.write_timeseries_file(&timeseries_path)?;
    solver.write_state_file(&state_path)?;

    println!("Outcome:     {}", outcome);
    println!("Steps:       {}", solver.step_count());
    println!("Samples:     {}", solver.series().len());
    if let Some(&z) = solver.flame_position().last() {
        println!("Flame z:     {:.6e}", z);
    }
    println!("Time series: {}", timeseries_path.display());
    println!("State:       {}", state_path.display());

    match outcome {
        RunOutcome::Completed { .. } => Ok(()),
        RunOutcome::Failed { reason, time } => Err(CliError::RunFailed { time, reason }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(dir: &Path, axial_velocity: f64) -> std::path::PathBuf {
        let grid = format!(
            "z\\r,0.0,0.01\n0.0,{u},{u}\n0.1,{u},{u}\n",
            u = axial_velocity
        );
        fs::write(dir.join("vz.csv"), grid).unwrap();

        let path = dir.join("flame.toml");
        fs::write(
            &path,
            "[time]\nt_end = 0.01\ndt = 0.001\n\n\
             [flame]\ninitial_position = 0.05\n\n\
             [flow]\naxial_velocity = { path = \"vz.csv\" }\n",
        )
        .unwrap();
        path
    }

    #[test]
    fn test_run_writes_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_config(dir.path(), 0.5);
        let state = dir.path().join("out/state.json");
        let series = dir.path().join("out/series.csv");

        run(&config, Some(&state), Some(&series), None).unwrap();

        assert!(state.is_file());
        let text = fs::read_to_string(&series).unwrap();
        assert!(text.starts_with("time,heat_release_rate,consumption_speed,flame_position\n"));
    }

    #[test]
    fn test_failed_run_still_writes_series() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_config(dir.path(), 20.0);
        let state = dir.path().join("state.json");
        let series = dir.path().join("series.csv");

        let result = run(&config, Some(&state), Some(&series), None);
        assert!(matches!(result, Err(CliError::RunFailed { .. })));
        assert!(series.is_file());
        assert!(state.is_file());
    }

    #[test]
    fn test_missing_config() {
        let result = run(Path::new("/nonexistent/flame.toml"), None, None, None);
        assert!(matches!(result, Err(CliError::FileNotFound(_))));
    }
}
