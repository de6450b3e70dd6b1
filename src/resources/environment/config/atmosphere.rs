use serde::{Deserialize, Serialize};

use crate::components::aircraft::config::{ensure_positive, ConfigError};
use crate::utils::SEA_LEVEL_DENSITY;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtmosphereConfig {
    /// Air density at zero altitude (kg/m³)
    pub sea_level_density: f64,
}

impl AtmosphereConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("environment.atmosphere.sea_level_density", self.sea_level_density)
    }
}

impl Default for AtmosphereConfig {
    fn default() -> Self {
        Self {
            sea_level_density: SEA_LEVEL_DENSITY,
        }
    }
}
