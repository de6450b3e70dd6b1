use crate::components::{FlightState, SpatialComponent};
use crate::resources::EnvironmentModel;
use crate::utils::{rad_to_deg, MIN_AIRSPEED_THRESHOLD};

/// Derive this tick's air data from the body kinematics and the environment.
///
/// Below the near-stationary threshold the angle of attack is reported as
/// zero and the airflow is treated as absent.
pub fn calculate_flight_state(spatial: &SpatialComponent, env: &EnvironmentModel) -> FlightState {
    let relative_air = env.relative_air(&spatial.velocity);
    let airspeed = relative_air.norm();
    let altitude = spatial.altitude();
    let density = env.air_density(altitude);

    let angle_of_attack = if airspeed > MIN_AIRSPEED_THRESHOLD {
        let local = spatial.to_body(&relative_air);
        rad_to_deg((-local.z).atan2(local.x))
    } else {
        0.0
    };

    FlightState {
        airspeed,
        angle_of_attack,
        relative_air,
        altitude,
        density,
        dynamic_pressure: 0.5 * density * airspeed * airspeed,
    }
}
