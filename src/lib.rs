pub mod components;
pub mod physics;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;

pub use components::{
    AircraftConfig, ConfigError, FlightState, PhysicsComponent, PilotInput, SpatialComponent,
    Telemetry, ThrottleCommand,
};
pub use physics::{AircraftDynamicsModel, DynamicsOutput, NoiseSource, RandomSource};
pub use plugins::{spawn_aircraft, FlightDynamicsPlugin, FlightDynamicsSet};
pub use resources::{EnvironmentConfig, EnvironmentModel};
