use serde::{Deserialize, Serialize};

use super::loader::{ensure_non_negative, ensure_positive, ConfigError};

/// Structural and fuel mass properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MassConfig {
    /// Mass of the aircraft with empty tanks (kg).
    pub empty_weight: f64,
    /// Usable fuel quantity when full (fuel units).
    pub fuel_capacity: f64,
    /// Mass per fuel unit (kg/unit).
    pub fuel_density: f64,
}

impl MassConfig {
    pub fn new(empty_weight: f64, fuel_capacity: f64, fuel_density: f64) -> Self {
        Self {
            empty_weight,
            fuel_capacity,
            fuel_density,
        }
    }

    pub fn light_sport() -> Self {
        Self::new(800.0, 200.0, 0.8)
    }

    /// Total mass carrying `fuel` units.
    pub fn mass_with_fuel(&self, fuel: f64) -> f64 {
        self.empty_weight + fuel * self.fuel_density
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("mass.empty_weight", self.empty_weight)?;
        ensure_non_negative("mass.fuel_capacity", self.fuel_capacity)?;
        ensure_non_negative("mass.fuel_density", self.fuel_density)
    }
}

impl Default for MassConfig {
    fn default() -> Self {
        Self::light_sport()
    }
}
