//! Sample command implementation
//!
//! Evaluates a CSV grid file at a single point.

use flame_solver::flow::load_grid_csv;
use std::path::Path;
use tracing::{info, warn};

use super::require_file;
use crate::{CliError, Result};

/// Run the sample command
pub fn run(grid: &Path, x: f64, y: f64) -> Result<()> {
    let value = evaluate(grid, x, y)?;
    println!("{}", value);
    Ok(())
}

/// Load `grid` and evaluate it at `(x, y)`.
pub fn evaluate(grid: &Path, x: f64, y: f64) -> Result<f64> {
    if !x.is_finite() || !y.is_finite() {
        return Err(CliError::InvalidArgument(format!(
            "query point ({}, {}) must be finite",
            x, y
        )));
    }
    require_file(grid)?;

    let interp = load_grid_csv(grid)?;
    let field = interp.field();
    if !field.x_axis().contains(x) || !field.y_axis().contains(y) {
        warn!(
            "({}, {}) lies outside the grid {:?} x {:?}; extrapolating",
            x,
            y,
            interp.domain_x(),
            interp.domain_y()
        );
    }

    let value = interp.get(x, y);
    info!("Sampled {} at ({}, {})", grid.display(), x, y);
    Ok(value)
}
