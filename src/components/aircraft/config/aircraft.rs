use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{AeroConfig, AircraftGeometry, ConfigError, EngineConfig, MassConfig};
use crate::resources::EnvironmentConfig;

/// Complete, immutable description of one aircraft and the air it flies in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AircraftConfig {
    /// Name of the aircraft, defaults to type name.
    pub name: String,
    /// Wing geometry used to scale aerodynamic forces.
    pub geometry: AircraftGeometry,
    /// Empty weight and fuel properties.
    pub mass: MassConfig,
    /// Stall threshold and coefficient curves.
    pub aero: AeroConfig,
    /// Engine thrust parameters.
    pub propulsion: EngineConfig,
    /// Atmosphere, wind and turbulence.
    pub environment: EnvironmentConfig,
}

impl Default for AircraftConfig {
    /// The `LightSport` configuration is chosen as the default for convenience.
    fn default() -> Self {
        Self::from_programmed(AircraftType::LightSport)
    }
}

impl AircraftConfig {
    /// Creates a new aircraft configuration from a given source.
    ///
    /// # Arguments
    /// * `source` - An `AircraftSource` enum specifying if the configuration is hardcoded
    ///              (`Programmed`) or loaded from a file (`File`).
    ///
    /// # Returns
    /// A `Result` containing the new configuration or an error if the file fails to load
    /// or does not validate.
    pub fn new(source: AircraftSource) -> Result<Self, ConfigError> {
        match source {
            AircraftSource::Programmed(aircraft_type) => {
                let config = Self::from_programmed(aircraft_type);
                config.validate()?;
                Ok(config)
            }
            AircraftSource::File(path) => Self::from_file(path),
        }
    }

    fn from_programmed(aircraft_type: AircraftType) -> Self {
        let name = match &aircraft_type {
            AircraftType::LightSport => "LightSport".to_string(),
            AircraftType::Custom(name) => name.clone(),
        };
        Self {
            name,
            geometry: AircraftGeometry::light_sport(),
            mass: MassConfig::light_sport(),
            aero: AeroConfig::default(),
            propulsion: EngineConfig::light_sport(),
            environment: EnvironmentConfig::default(),
        }
    }

    pub fn light_sport() -> Self {
        Self::from_programmed(AircraftType::LightSport)
    }

    /// Rejects malformed values before any simulation starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.geometry.validate()?;
        self.mass.validate()?;
        self.aero.validate()?;
        self.propulsion.validate()?;
        self.environment.validate()
    }
}

/// Source for aircraft configuration.
/// Can either be a hardcoded configuration (`Programmed`) or loaded from a file.
#[derive(Debug, Clone)]
pub enum AircraftSource {
    Programmed(AircraftType),
    File(PathBuf),
}

/// Enumeration of available aircraft types.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum AircraftType {
    LightSport,
    Custom(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_programmed_source() {
        let source = AircraftSource::Programmed(AircraftType::LightSport);
        let config = AircraftConfig::new(source).unwrap();
        assert_eq!(config.name, "LightSport");
        assert_eq!(config.geometry.wing_area, 15.0);
        assert_eq!(config.propulsion.max_thrust, 3000.0);
        assert_eq!(config.environment.atmosphere.sea_level_density, 1.225);
    }

    #[test]
    fn test_custom_type_keeps_name() {
        let config =
            AircraftConfig::new(AircraftSource::Programmed(AircraftType::Custom("Cub".into())))
                .unwrap();
        assert_eq!(config.name, "Cub");
    }

    #[test]
    fn test_validate_propagates_section_errors() {
        let mut config = AircraftConfig::default();
        config.mass.empty_weight = 0.0;
        assert!(config.validate().is_err());

        let mut config = AircraftConfig::default();
        config.environment.wind.turbulence_power = -1.0;
        assert!(config.validate().is_err());

        let mut config = AircraftConfig::default();
        config.propulsion.altitude_for_half_thrust = 0.0;
        assert!(config.validate().is_err());
    }
}
