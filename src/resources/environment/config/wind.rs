use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::aircraft::config::{
    ensure_finite_vector, ensure_non_negative, ConfigError,
};

/// Steady wind plus noise-driven turbulence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindConfig {
    /// Air mass velocity in world space (m/s)
    pub velocity: Vector3<f64>,
    /// Turbulence gain, also scales stall buffeting
    pub turbulence_power: f64,
    /// Rate at which the turbulence noise is traversed
    pub turbulence_speed: f64,
}

impl WindConfig {
    pub fn calm() -> Self {
        Self {
            velocity: Vector3::zeros(),
            turbulence_power: 0.0,
            turbulence_speed: 0.0,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite_vector("environment.wind.velocity", &self.velocity)?;
        ensure_non_negative("environment.wind.turbulence_power", self.turbulence_power)?;
        ensure_non_negative("environment.wind.turbulence_speed", self.turbulence_speed)
    }
}

impl Default for WindConfig {
    fn default() -> Self {
        Self {
            velocity: Vector3::new(5.0, 0.0, 0.0),
            turbulence_power: 0.1,
            turbulence_speed: 0.5,
        }
    }
}
