use nalgebra::Vector3;
use std::path::Path;
use thiserror::Error;

use super::AircraftConfig;
use crate::utils::is_finite_vector;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid aircraft configuration: {0}")]
    ValidationError(String),
}

impl AircraftConfig {
    /// Parses and validates an aircraft configuration from YAML text.
    /// Missing fields take their default values.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: AircraftConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates an aircraft configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file_contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&file_contents)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!(
            "{name} must be finite, got {value}"
        )))
    }
}

pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<(), ConfigError> {
    ensure_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!(
            "{name} must be positive, got {value}"
        )))
    }
}

pub(crate) fn ensure_non_negative(name: &str, value: f64) -> Result<(), ConfigError> {
    ensure_finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!(
            "{name} must not be negative, got {value}"
        )))
    }
}

pub(crate) fn ensure_finite_vector(name: &str, value: &Vector3<f64>) -> Result<(), ConfigError> {
    if is_finite_vector(value) {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!(
            "{name} must be finite, got {:?}",
            value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = r#"
name: "Partial"
geometry:
  wing_area: 20.0
mass:
  fuel_capacity: 150.0
"#;
        let config = AircraftConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.name, "Partial");
        assert_eq!(config.geometry.wing_area, 20.0);
        assert_eq!(config.geometry.wing_span, 10.0);
        assert_eq!(config.mass.fuel_capacity, 150.0);
        assert_eq!(config.mass.empty_weight, 800.0);
        assert_eq!(config.aero.stall_angle, 12.0);
    }

    #[test]
    fn test_negative_wing_area_rejected() {
        let yaml = "geometry:\n  wing_area: -1.0\n";
        let err = AircraftConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("wing_area"));
    }

    #[test]
    fn test_malformed_yaml_is_yaml_error() {
        let err = AircraftConfig::from_yaml_str("geometry: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigError::YamlError(_)));
    }

    #[test]
    fn test_missing_file_is_file_error() {
        let err = AircraftConfig::from_file("/nonexistent/aircraft.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::FileError(_)));
    }

    #[test]
    fn test_yaml_round_trip_preserves_config() {
        let config = AircraftConfig::default();
        let yaml = config.to_yaml_string().unwrap();
        let parsed = AircraftConfig::from_yaml_str(&yaml).unwrap();
        pretty_assertions::assert_eq!(parsed, config);
    }

    #[test]
    fn test_ensure_helpers() {
        assert!(ensure_positive("x", 1.0).is_ok());
        assert!(ensure_positive("x", 0.0).is_err());
        assert!(ensure_non_negative("x", 0.0).is_ok());
        assert!(ensure_non_negative("x", -0.1).is_err());
        assert!(ensure_finite("x", f64::NAN).is_err());
        assert!(ensure_finite_vector("v", &Vector3::new(0.0, f64::INFINITY, 0.0)).is_err());
    }
}
