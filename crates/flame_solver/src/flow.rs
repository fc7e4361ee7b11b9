//! Flow-field sources and construction.
//!
//! Each flow component is given in the configuration as one of
//!
//! - `{ uniform = 300.0 }`: the same value everywhere
//! - `{ x = [...], y = [...], values = [[...], ...] }`: an inline table,
//!   one row per `y` (axial) coordinate
//! - `{ path = "field.csv" }`: a CSV grid file
//!
//! A CSV grid file has the radial coordinates in its first row (after a
//! leading label cell) and the axial coordinate in the first cell of every
//! following row:
//!
//! ```text
//! z\r,  0.0,  0.005, 0.01
//! 0.00, 1.20, 1.15,  1.00
//! 0.02, 0.90, 0.85,  0.70
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use crate::error::ConfigError;
use flame_core::math::interpolators::BilinearInterpolator;
use flame_core::quasi2d::{FlowField, UniformField};
use flame_core::traits::FieldSampler;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where a flow component's values come from
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldSource {
    /// Inline table: `values[j][i] = F(x[i], y[j])`
    Table {
        /// Radial coordinates
        x: Vec<f64>,
        /// Axial coordinates
        y: Vec<f64>,
        /// Table rows, one per axial coordinate
        values: Vec<Vec<f64>>,
    },
    /// CSV grid file, relative paths resolved against the config directory
    File {
        /// Grid file location
        path: PathBuf,
    },
    /// Constant value
    Uniform {
        /// The value everywhere
        uniform: f64,
    },
}

impl FieldSource {
    /// Build the sampler for this source.
    pub fn build(
        &self,
        component: &'static str,
        base_dir: &Path,
    ) -> Result<ConfiguredField, ConfigError> {
        match self {
            FieldSource::Uniform { uniform } => {
                if !uniform.is_finite() {
                    return Err(ConfigError::Validation(vec![format!(
                        "flow.{} uniform value must be finite, got {}",
                        component, uniform
                    )]));
                }
                Ok(ConfiguredField::Uniform(UniformField::new(*uniform)))
            }
            FieldSource::Table { x, y, values } => {
                BilinearInterpolator::from_rows(values, x.clone(), y.clone())
                    .map(ConfiguredField::Grid)
                    .map_err(|source| ConfigError::Field { component, source })
            }
            FieldSource::File { path } => {
                let resolved = if path.is_absolute() {
                    path.clone()
                } else {
                    base_dir.join(path)
                };
                load_grid_csv(&resolved).map(ConfiguredField::Grid)
            }
        }
    }
}

/// Flow components of the configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Axial velocity `v_z(r, z)` [m/s]
    pub axial_velocity: FieldSource,
    /// Radial velocity `v_r(r, z)` [m/s]
    pub radial_velocity: FieldSource,
    /// Unburned gas temperature `T_u(r, z)` [K]
    pub temperature: FieldSource,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            axial_velocity: FieldSource::Uniform { uniform: 0.0 },
            radial_velocity: FieldSource::Uniform { uniform: 0.0 },
            temperature: FieldSource::Uniform { uniform: 300.0 },
        }
    }
}

impl FlowConfig {
    /// Validate every component and assemble the flow field.
    pub fn build(&self, base_dir: &Path) -> Result<FlowField<f64>, ConfigError> {
        let axial = self.axial_velocity.build("axial_velocity", base_dir)?;
        let radial = self.radial_velocity.build("radial_velocity", base_dir)?;
        let temperature = self.temperature.build("temperature", base_dir)?;

        let components = [
            ("axial_velocity", &axial),
            ("radial_velocity", &radial),
            ("temperature", &temperature),
        ];
        let mut errors = Vec::new();
        check_overlap("r", &components, |f| f.domain_x(), &mut errors);
        check_overlap("z", &components, |f| f.domain_y(), &mut errors);
        if !errors.is_empty() {
            return Err(ConfigError::Validation(errors));
        }

        let flow = FlowField::new(axial, radial, temperature);
        debug!(
            domain_r = ?flow.domain_r(),
            domain_z = ?flow.domain_z(),
            "Flow field assembled"
        );
        Ok(flow)
    }
}

/// Record an error if the components' `axis` ranges share no interval.
fn check_overlap(
    axis: &str,
    components: &[(&str, &ConfiguredField)],
    domain: impl Fn(&ConfiguredField) -> (f64, f64),
    errors: &mut Vec<String>,
) {
    let (lo, hi) = components
        .iter()
        .map(|(_, f)| domain(*f))
        .fold((f64::NEG_INFINITY, f64::INFINITY), |(lo, hi), (a, b)| {
            (lo.max(a), hi.min(b))
        });
    if lo < hi {
        return;
    }

    let ranges: Vec<String> = components
        .iter()
        .map(|(name, f)| {
            let (a, b) = domain(*f);
            format!("{} [{}, {}]", name, a, b)
        })
        .collect();
    errors.push(format!(
        "flow components share no {} range: {}",
        axis,
        ranges.join(", ")
    ));
}

/// A flow component built from configuration
#[derive(Debug, Clone)]
pub enum ConfiguredField {
    /// Constant everywhere
    Uniform(UniformField<f64>),
    /// Gridded with bilinear interpolation and linear extrapolation
    Grid(BilinearInterpolator<f64>),
}

impl FieldSampler<f64> for ConfiguredField {
    #[inline]
    fn sample(&self, x: f64, y: f64) -> f64 {
        match self {
            ConfiguredField::Uniform(field) => field.sample(x, y),
            ConfiguredField::Grid(field) => field.get(x, y),
        }
    }

    fn domain_x(&self) -> (f64, f64) {
        match self {
            ConfiguredField::Uniform(field) => field.domain_x(),
            ConfiguredField::Grid(field) => field.domain_x(),
        }
    }

    fn domain_y(&self) -> (f64, f64) {
        match self {
            ConfiguredField::Uniform(field) => field.domain_y(),
            ConfiguredField::Grid(field) => field.domain_y(),
        }
    }
}

/// Read a CSV grid file into an interpolator.
///
/// The first row carries the x coordinates, the first column the y
/// coordinates; see the module documentation for the layout.
pub fn load_grid_csv(path: &Path) -> Result<BilinearInterpolator<f64>, ConfigError> {
    let grid_err = |message: String| ConfigError::GridFile {
        path: path.to_path_buf(),
        message,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_path(path)
        .map_err(|e| grid_err(e.to_string()))?;

    let mut records = reader.records();
    let header = records
        .next()
        .ok_or_else(|| grid_err("file is empty".to_string()))?
        .map_err(|e| grid_err(e.to_string()))?;

    let x = header
        .iter()
        .skip(1)
        .map(|cell| parse_cell(cell).map_err(|e| grid_err(format!("header: {}", e))))
        .collect::<Result<Vec<f64>, _>>()?;

    let mut y = Vec::new();
    let mut values = Vec::new();
    for record in records {
        let record = record.map_err(|e| grid_err(e.to_string()))?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let mut cells = record.iter().map(|cell| {
            parse_cell(cell).map_err(|e| grid_err(format!("line {}: {}", line, e)))
        });

        match cells.next() {
            Some(coordinate) => y.push(coordinate?),
            None => continue,
        }
        values.push(cells.collect::<Result<Vec<f64>, _>>()?);
    }

    let interp =
        BilinearInterpolator::from_rows(&values, x, y).map_err(|e| grid_err(e.to_string()))?;
    debug!(
        path = %path.display(),
        rows = interp.field().rows(),
        columns = interp.field().columns(),
        "Loaded grid file"
    );
    Ok(interp)
}

fn parse_cell(cell: &str) -> Result<f64, String> {
    cell.parse::<f64>()
        .map_err(|_| format!("'{}' is not a number", cell))
}
