mod atmosphere;
mod wind;

pub use atmosphere::AtmosphereConfig;
pub use wind::WindConfig;

use serde::{Deserialize, Serialize};

use crate::components::aircraft::config::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    pub atmosphere: AtmosphereConfig,
    pub wind: WindConfig,
}

impl EnvironmentConfig {
    pub fn new(wind: WindConfig, atmosphere: AtmosphereConfig) -> Self {
        Self { atmosphere, wind }
    }

    /// Still air: no wind, no turbulence.
    pub fn calm() -> Self {
        Self {
            atmosphere: AtmosphereConfig::default(),
            wind: WindConfig::calm(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.atmosphere.validate()?;
        self.wind.validate()
    }
}
