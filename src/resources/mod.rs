mod environment;

pub use environment::{AtmosphereConfig, EnvironmentConfig, EnvironmentModel, WindConfig};
