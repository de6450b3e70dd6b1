use serde::{Deserialize, Serialize};

use super::loader::{ensure_non_negative, ensure_positive, ConfigError};

/// Configuration for the single engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Thrust at sea level and full throttle (N)
    pub max_thrust: f64,
    /// Scale altitude of the exponential thrust lapse (m)
    pub altitude_for_half_thrust: f64,
}

impl EngineConfig {
    pub fn new(max_thrust: f64, altitude_for_half_thrust: f64) -> Self {
        Self {
            max_thrust,
            altitude_for_half_thrust,
        }
    }

    pub fn light_sport() -> Self {
        Self::new(3000.0, 5000.0)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_non_negative("propulsion.max_thrust", self.max_thrust)?;
        ensure_positive(
            "propulsion.altitude_for_half_thrust",
            self.altitude_for_half_thrust,
        )
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::light_sport()
    }
}
