use bevy::prelude::*;

use crate::components::{
    AircraftConfig, ConfigError, PhysicsComponent, PilotInput, SpatialComponent,
};
use crate::physics::AircraftDynamicsModel;
use crate::systems::flight_dynamics_system;

/// Flight model stages within `FixedUpdate`. Host integration should run
/// after `Dynamics`.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FlightDynamicsSet {
    Dynamics,
}

/// Registers the flight model on the fixed-timestep schedule.
pub struct FlightDynamicsPlugin {
    /// Fixed step length (s)
    pub timestep: f64,
}

impl Default for FlightDynamicsPlugin {
    fn default() -> Self {
        Self {
            timestep: 1.0 / 50.0, // 50 Hz default physics rate
        }
    }
}

impl FlightDynamicsPlugin {
    pub fn new(timestep: f64) -> Self {
        Self { timestep }
    }
}

impl Plugin for FlightDynamicsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_seconds(self.timestep))
            .configure_sets(FixedUpdate, FlightDynamicsSet::Dynamics)
            .add_systems(
                FixedUpdate,
                flight_dynamics_system.in_set(FlightDynamicsSet::Dynamics),
            );
    }
}

/// Components for a ready-to-fly aircraft entity.
///
/// # Arguments
/// * `config` - Validated before anything is built.
/// * `spatial` - Initial kinematics.
/// * `seed` - Makes the stall buffet and turbulence reproducible when set.
pub fn aircraft_bundle(
    config: AircraftConfig,
    spatial: SpatialComponent,
    seed: Option<u64>,
) -> Result<impl Bundle, ConfigError> {
    let name = Name::new(config.name.clone());
    let model = match seed {
        Some(seed) => AircraftDynamicsModel::seeded(config, seed)?,
        None => AircraftDynamicsModel::new(config)?,
    };
    let physics = PhysicsComponent::new(model.current_mass());
    let telemetry = model.telemetry();

    Ok((
        model,
        spatial,
        PilotInput::default(),
        physics,
        telemetry,
        name,
    ))
}

/// Spawns an aircraft entity, see [`aircraft_bundle`].
pub fn spawn_aircraft(
    commands: &mut Commands,
    config: AircraftConfig,
    spatial: SpatialComponent,
    seed: Option<u64>,
) -> Result<Entity, ConfigError> {
    let bundle = aircraft_bundle(config, spatial, seed)?;
    let entity = commands.spawn(bundle).id();
    info!("Spawned aircraft {:?}", entity);
    Ok(entity)
}
