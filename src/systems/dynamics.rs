use bevy::prelude::*;

use crate::components::{
    PhysicsComponent, PilotInput, SpatialComponent, Telemetry, ThrottleCommand,
};
use crate::physics::AircraftDynamicsModel;

/// Ticks every aircraft's flight model once per fixed step.
///
/// Reads kinematics and host mass at the start of the step, replaces the
/// accumulated forces with this step's contributions, assigns the new mass
/// and refreshes the telemetry snapshot.
pub fn flight_dynamics_system(
    mut aircraft: Query<(
        &mut AircraftDynamicsModel,
        &SpatialComponent,
        &PilotInput,
        &mut PhysicsComponent,
        &mut Telemetry,
    )>,
    time: Res<Time<Fixed>>,
) {
    let dt = time.timestep().as_secs_f64();

    for (mut model, spatial, input, mut physics, mut telemetry) in aircraft.iter_mut() {
        let throttle = ThrottleCommand::from(*input);
        let output = model.tick(spatial, physics.mass, throttle, dt);

        physics.clear_forces();
        physics.apply(&output);
        *telemetry = model.telemetry();
    }
}
