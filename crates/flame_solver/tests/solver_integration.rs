//! End-to-end solver tests
//!
//! Configuration and grid files on disk through to written state and time
//! series files, including restart from a state file.

use approx::assert_relative_eq;
use flame_solver::prelude::*;
use std::fs;
use std::path::Path;

/// Axial velocity `u_z = 2 z` on r in [0, 0.01], z in [0, 0.1].
const STRAINED_GRID: &str = "\
# axial velocity, u_z = 2 z
z\\r, 0.0, 0.01
0.00, 0.00, 0.00
0.05, 0.10, 0.10
0.10, 0.20, 0.20
";

/// Uniform 5 m/s inflow on the same grid.
const FAST_GRID: &str = "\
z\\r, 0.0, 0.01
0.0, 5.0, 5.0
0.1, 5.0, 5.0
";

fn write_case(dir: &Path, grid: &str, t_end: f64, output_interval: u64) -> SolverConfig {
    fs::write(dir.join("vz.csv"), grid).unwrap();
    let toml = format!(
        r#"
        [time]
        t_end = {t_end}
        dt = 0.001
        output_interval = {output_interval}

        [flame]
        laminar_speed = 0.38
        reference_temperature = 300.0
        initial_position = 0.05

        [flow]
        axial_velocity = {{ path = "vz.csv" }}
        temperature = {{ uniform = 300.0 }}

        [output]
        dir = "{}"
        "#,
        dir.join("out").display()
    );
    let path = dir.join("flame.toml");
    fs::write(&path, toml).unwrap();
    SolverConfig::load_and_validate(&path).unwrap()
}

fn read_csv_rows(path: &Path) -> (csv::StringRecord, Vec<Vec<f64>>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let header = reader.headers().unwrap().clone();
    let rows = reader
        .records()
        .map(|r| r.unwrap().iter().map(|c| c.parse().unwrap()).collect())
        .collect();
    (header, rows)
}

// =============================================================================
// Completed runs
// =============================================================================

#[test]
fn test_strained_flame_follows_exact_trajectory() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_case(dir.path(), STRAINED_GRID, 0.1, 10);

    let mut solver = FlameSolver::with_kinematic_flame();
    solver.initialize(config).unwrap();
    let outcome = solver.run();
    assert!(outcome.is_success(), "{}", outcome);

    assert_eq!(solver.time_vector().len(), 10);
    for (&t, &z) in solver.time_vector().iter().zip(solver.flame_position()) {
        // dz/dt = 2 z - 0.38
        let exact = 0.19 + (0.05 - 0.19) * (2.0 * t).exp();
        assert_relative_eq!(z, exact, epsilon = 1e-7);
    }
    for &s in solver.consumption_speed() {
        assert_relative_eq!(s, 0.38, epsilon = 1e-12);
    }
    // rho_u * S_c * dh with the default density and heat of combustion
    assert_relative_eq!(
        solver.heat_release_rate()[0],
        1.13 * 0.38 * 2.75e6,
        max_relative = 1e-12
    );
}

#[test]
fn test_output_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_case(dir.path(), STRAINED_GRID, 0.05, 10);
    let state_path = config.output.state_path();
    let series_path = config.output.timeseries_path();

    let mut solver = FlameSolver::with_kinematic_flame();
    solver.initialize(config).unwrap();
    assert!(solver.run().is_success());

    solver.write_timeseries_file(&series_path).unwrap();
    solver.write_state_file(&state_path).unwrap();

    let (header, rows) = read_csv_rows(&series_path);
    assert_eq!(
        header.iter().collect::<Vec<_>>(),
        vec!["time", "heat_release_rate", "consumption_speed", "flame_position"]
    );
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[4][3], solver.flame_position()[4]);

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&state_path).unwrap()).unwrap();
    assert_eq!(json["format_version"], 1);
    assert_eq!(json["step"], 50);
    assert_eq!(json["model"]["model"], "kinematic");
    assert!(json["written_at"].as_str().unwrap().contains('T'));
    assert_eq!(json["series"]["time"].as_array().unwrap().len(), 5);
}

#[test]
fn test_restart_continues_run() {
    let dir = tempfile::tempdir().unwrap();

    let mut full = FlameSolver::with_kinematic_flame();
    full.initialize(write_case(dir.path(), STRAINED_GRID, 0.1, 10))
        .unwrap();
    assert!(full.run().is_success());

    let mut first = FlameSolver::with_kinematic_flame();
    first
        .initialize(write_case(dir.path(), STRAINED_GRID, 0.05, 10))
        .unwrap();
    assert!(first.run().is_success());
    let state_path = dir.path().join("restart").join("state.json");
    first.write_state_file(&state_path).unwrap();

    let mut resumed = FlameSolver::with_kinematic_flame();
    resumed
        .initialize(write_case(dir.path(), STRAINED_GRID, 0.1, 10))
        .unwrap();
    resumed.load_state_file(&state_path).unwrap();
    assert_relative_eq!(resumed.current_time(), 0.05, epsilon = 1e-12);
    assert_eq!(resumed.step_count(), 50);
    assert!(resumed.run().is_success());

    assert_eq!(resumed.time_vector().len(), full.time_vector().len());
    assert_eq!(resumed.step_count(), full.step_count());
    for (a, b) in resumed.flame_position().iter().zip(full.flame_position()) {
        assert_relative_eq!(a, b, epsilon = 1e-12);
    }
}

#[test]
fn test_load_state_rejects_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut solver = FlameSolver::with_kinematic_flame();
    solver
        .initialize(write_case(dir.path(), STRAINED_GRID, 0.1, 10))
        .unwrap();

    assert!(matches!(
        solver.load_state_file(&dir.path().join("missing.json")),
        Err(SolverError::Io(_))
    ));
}

// =============================================================================
// Failed runs
// =============================================================================

#[test]
fn test_blow_off_reports_failure_and_keeps_series() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_case(dir.path(), FAST_GRID, 0.1, 4);
    let series_path = config.output.timeseries_path();

    let mut solver = FlameSolver::with_kinematic_flame();
    solver.initialize(config).unwrap();

    match solver.run() {
        RunOutcome::Failed { reason, time } => {
            assert!(reason.contains("outside allowed range"), "{}", reason);
            assert_relative_eq!(time, 0.010, epsilon = 1e-12);
        }
        other => panic!("Expected blow-off, got {:?}", other),
    }

    // Steps 4 and 8 on schedule plus the last good step 10
    assert_eq!(solver.time_vector().len(), 3);
    assert_relative_eq!(solver.flame_position()[2], 0.05 + 0.010 * 4.62, epsilon = 1e-12);

    solver.write_timeseries_file(&series_path).unwrap();
    let (_, rows) = read_csv_rows(&series_path);
    assert_eq!(rows.len(), 3);
}

#[test]
fn test_invalid_grid_file_fails_initialize() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_case(dir.path(), "z\\r, 0.0, 0.01\n0.0, 1.0, 1.0\n", 0.1, 1);

    let mut solver = FlameSolver::with_kinematic_flame();
    match solver.initialize(config) {
        Err(SolverError::Config(ConfigError::GridFile { message, .. })) => {
            assert!(message.contains("Insufficient data points on y-axis"), "{}", message)
        }
        other => panic!("Expected grid file error, got {:?}", other),
    }
    assert!(!solver.is_initialized());
}
