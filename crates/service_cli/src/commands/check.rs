//! Check command implementation
//!
//! Loads and validates a configuration, then builds its flow field so that
//! grid file problems surface before a run is started.

use flame_solver::config::SolverConfig;
use std::path::Path;
use tracing::info;

use super::require_file;
use crate::Result;

/// Run the check command
pub fn run(config_path: &Path) -> Result<()> {
    require_file(config_path)?;
    info!("Checking configuration {}", config_path.display());

    let config = SolverConfig::load_with_env_and_validate(config_path)?;
    let flow = config.flow.build(&config.base_dir)?;

    let time = &config.time;
    let steps = ((time.t_end - time.t_start) / time.dt).ceil();
    println!("Configuration OK: {}", config_path.display());
    println!(
        "  Time:     {} .. {} s, dt = {} s (~{} steps)",
        time.t_start, time.t_end, time.dt, steps
    );
    println!(
        "  Output:   every {} steps to {}",
        time.output_interval,
        config.output.dir.display()
    );
    println!("  Domain r: {:?}", flow.domain_r());
    println!("  Domain z: {:?}", flow.domain_z());

    if steps > time.max_steps as f64 {
        tracing::warn!(
            "Run needs ~{} steps but max_steps is {}; it will stop early",
            steps,
            time.max_steps
        );
    }
    Ok(())
}
