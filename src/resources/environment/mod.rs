mod config;
mod environment;

pub use config::{AtmosphereConfig, EnvironmentConfig, WindConfig};
pub use environment::EnvironmentModel;
