//! Solver configuration management.
//!
//! Handles loading of solver configuration from TOML files with environment
//! variable override support. A configuration has four sections:
//!
//! ```toml
//! [time]
//! t_end = 0.02
//! dt = 1e-5
//! output_interval = 10
//!
//! [flame]
//! laminar_speed = 0.38
//! initial_position = 0.004
//!
//! [flow]
//! axial_velocity = { path = "vz.csv" }
//! temperature = { uniform = 300.0 }
//!
//! [output]
//! dir = "run01"
//! ```

use crate::error::ConfigError;
use crate::flow::FlowConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Time stepping settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    /// Initial simulation time [s]
    pub t_start: f64,
    /// Final simulation time [s]
    pub t_end: f64,
    /// Nominal step size [s]
    pub dt: f64,
    /// Record one output sample every this many steps
    pub output_interval: u64,
    /// Hard limit on the number of steps per run
    pub max_steps: u64,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            t_start: 0.0,
            t_end: 0.01,
            dt: 1e-5,
            output_interval: 10,
            max_steps: 10_000_000,
        }
    }
}

/// Flame sheet parameters
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FlameConfig {
    /// Unstretched laminar burning velocity at the reference temperature [m/s]
    pub laminar_speed: f64,
    /// Unburned temperature at which `laminar_speed` applies [K]
    pub reference_temperature: f64,
    /// Exponent of the burning velocity's temperature dependence
    pub temperature_exponent: f64,
    /// Unburned mixture density [kg/m^3]
    pub unburned_density: f64,
    /// Heat released per unit mass of mixture burned [J/kg]
    pub heat_of_combustion: f64,
    /// Axial flame position at `t_start` [m]
    pub initial_position: f64,
    /// Radial coordinate at which the flame is tracked [m]
    pub radius: f64,
    /// Distance the flame may travel beyond the flow field's axial extent [m]
    pub domain_margin: f64,
}

impl Default for FlameConfig {
    fn default() -> Self {
        Self {
            laminar_speed: 0.38,
            reference_temperature: 300.0,
            temperature_exponent: 1.75,
            unburned_density: 1.13,
            heat_of_combustion: 2.75e6,
            initial_position: 0.0,
            radius: 0.0,
            domain_margin: 0.0,
        }
    }
}

/// Output file locations
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving output files
    pub dir: PathBuf,
    /// Restart state file name within `dir`
    pub state_file: String,
    /// Time series file name within `dir`
    pub timeseries_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("output"),
            state_file: "state.json".to_string(),
            timeseries_file: "timeseries.csv".to_string(),
        }
    }
}

impl OutputConfig {
    /// Full path of the restart state file
    pub fn state_path(&self) -> PathBuf {
        self.dir.join(&self.state_file)
    }

    /// Full path of the time series file
    pub fn timeseries_path(&self) -> PathBuf {
        self.dir.join(&self.timeseries_file)
    }
}

/// Solver configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SolverConfig {
    /// Time stepping
    #[serde(default)]
    pub time: TimeConfig,

    /// Flame parameters
    #[serde(default)]
    pub flame: FlameConfig,

    /// Flow field sources
    #[serde(default)]
    pub flow: FlowConfig,

    /// Output locations
    #[serde(default)]
    pub output: OutputConfig,

    /// Directory against which relative grid file paths are resolved
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl SolverConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_toml_str(&content)?;
        config.base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Ok(config)
    }

    /// Parse configuration from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply environment variable overrides
    ///
    /// Recognised variables: `FLAME_T_END`, `FLAME_DT`,
    /// `FLAME_OUTPUT_INTERVAL`, `FLAME_OUTPUT_DIR`. Unparseable values are
    /// ignored.
    pub fn with_env_override(mut self) -> Self {
        if let Some(t_end) = env_parse("FLAME_T_END") {
            self.time.t_end = t_end;
        }

        if let Some(dt) = env_parse("FLAME_DT") {
            self.time.dt = dt;
        }

        if let Some(interval) = env_parse("FLAME_OUTPUT_INTERVAL") {
            self.time.output_interval = interval;
        }

        if let Ok(dir) = std::env::var("FLAME_OUTPUT_DIR") {
            self.output.dir = PathBuf::from(dir);
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();
        let time = &self.time;
        let flame = &self.flame;

        let finite = [
            ("time.t_start", time.t_start),
            ("time.t_end", time.t_end),
            ("time.dt", time.dt),
            ("flame.laminar_speed", flame.laminar_speed),
            ("flame.reference_temperature", flame.reference_temperature),
            ("flame.temperature_exponent", flame.temperature_exponent),
            ("flame.unburned_density", flame.unburned_density),
            ("flame.heat_of_combustion", flame.heat_of_combustion),
            ("flame.initial_position", flame.initial_position),
            ("flame.radius", flame.radius),
            ("flame.domain_margin", flame.domain_margin),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                errors.push(format!("{} must be finite, got {}", name, value));
            }
        }

        if time.t_end <= time.t_start {
            errors.push(format!(
                "time.t_end ({}) must be greater than time.t_start ({})",
                time.t_end, time.t_start
            ));
        }
        if time.dt <= 0.0 {
            errors.push(format!("time.dt must be positive, got {}", time.dt));
        }
        if time.output_interval == 0 {
            errors.push("time.output_interval must be greater than 0".to_string());
        }
        if time.max_steps == 0 {
            errors.push("time.max_steps must be greater than 0".to_string());
        }

        if flame.laminar_speed <= 0.0 {
            errors.push(format!(
                "flame.laminar_speed must be positive, got {}",
                flame.laminar_speed
            ));
        }
        if flame.reference_temperature <= 0.0 {
            errors.push(format!(
                "flame.reference_temperature must be positive, got {}",
                flame.reference_temperature
            ));
        }
        if flame.unburned_density <= 0.0 {
            errors.push(format!(
                "flame.unburned_density must be positive, got {}",
                flame.unburned_density
            ));
        }
        if flame.heat_of_combustion < 0.0 {
            errors.push(format!(
                "flame.heat_of_combustion must be non-negative, got {}",
                flame.heat_of_combustion
            ));
        }
        if flame.radius < 0.0 {
            errors.push(format!("flame.radius must be non-negative, got {}", flame.radius));
        }
        if flame.domain_margin < 0.0 {
            errors.push(format!(
                "flame.domain_margin must be non-negative, got {}",
                flame.domain_margin
            ));
        }

        if self.output.state_file.is_empty() {
            errors.push("output.state_file cannot be empty".to_string());
        }
        if self.output.timeseries_file.is_empty() {
            errors.push("output.timeseries_file cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load configuration from file and validate
    pub fn load_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from file with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load(path)?.with_env_override();
        config.validate()?;
        Ok(config)
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::FieldSource;

    #[test]
    fn test_default_config_is_valid() {
        let config = SolverConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.time.output_interval, 10);
        assert_eq!(config.output.state_path(), PathBuf::from("output/state.json"));
    }

    #[test]
    fn test_parse_partial_document_fills_defaults() {
        let config = SolverConfig::from_toml_str(
            r#"
            [time]
            t_end = 0.5
            dt = 0.001

            [flame]
            laminar_speed = 0.4
            "#,
        )
        .unwrap();

        assert_eq!(config.time.t_end, 0.5);
        assert_eq!(config.time.t_start, 0.0);
        assert_eq!(config.flame.laminar_speed, 0.4);
        assert_eq!(config.flame.reference_temperature, 300.0);
        assert_eq!(config.flow.axial_velocity, FieldSource::Uniform { uniform: 0.0 });
    }

    #[test]
    fn test_parse_inline_table_field() {
        let config = SolverConfig::from_toml_str(
            r#"
            [flow]
            axial_velocity = { x = [0.0, 0.01], y = [0.0, 0.1], values = [[1.0, 1.0], [0.0, 0.0]] }
            temperature = { uniform = 350.0 }
            "#,
        )
        .unwrap();

        assert!(matches!(
            config.flow.axial_velocity,
            FieldSource::Table { ref x, .. } if x.len() == 2
        ));
        assert_eq!(config.flow.temperature, FieldSource::Uniform { uniform: 350.0 });
    }

    #[test]
    fn test_parse_error() {
        let result = SolverConfig::from_toml_str("[time]\nt_end = \"soon\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let mut config = SolverConfig::default();
        config.time.t_end = -1.0;
        config.time.dt = 0.0;
        config.time.output_interval = 0;
        config.flame.laminar_speed = -0.1;

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 4);
                assert!(errors.iter().any(|e| e.contains("t_end")));
                assert!(errors.iter().any(|e| e.contains("dt")));
                assert!(errors.iter().any(|e| e.contains("output_interval")));
                assert!(errors.iter().any(|e| e.contains("laminar_speed")));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let mut config = SolverConfig::default();
        config.flame.initial_position = f64::NAN;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("flame.initial_position must be finite"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = SolverConfig::load(Path::new("/nonexistent/flame.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_load_sets_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flame.toml");
        std::fs::write(&path, "[time]\nt_end = 1.0\n").unwrap();

        let config = SolverConfig::load_and_validate(&path).unwrap();
        assert_eq!(config.base_dir, dir.path());
        assert_eq!(config.time.t_end, 1.0);
    }
}
