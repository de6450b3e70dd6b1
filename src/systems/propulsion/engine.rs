use nalgebra::Vector3;

use crate::components::{EngineConfig, ThrottleCommand};

/// Thrust available at `altitude` for a given throttle, before any fuel check.
///
/// Falls off as `exp(-altitude / altitude_for_half_thrust)`.
pub fn thrust_magnitude(config: &EngineConfig, throttle: ThrottleCommand, altitude: f64) -> f64 {
    let altitude_factor = (-altitude / config.altitude_for_half_thrust).exp();
    throttle.level() * config.max_thrust * altitude_factor
}

/// World-space thrust along the nose, or `None` when the engine is not
/// producing power (throttle closed or tanks dry).
pub fn calculate_thrust(
    config: &EngineConfig,
    throttle: ThrottleCommand,
    altitude: f64,
    fuel_remaining: f64,
    forward: &Vector3<f64>,
) -> Option<Vector3<f64>> {
    if throttle.level() <= 0.0 || fuel_remaining <= 0.0 {
        return None;
    }
    Some(forward * thrust_magnitude(config, throttle, altitude))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sea_level_full_throttle() {
        let config = EngineConfig::light_sport();
        let thrust =
            calculate_thrust(&config, ThrottleCommand::new(1.0), 0.0, 50.0, &Vector3::x()).unwrap();
        assert_relative_eq!(thrust, Vector3::new(3000.0, 0.0, 0.0));
    }

    #[test]
    fn test_altitude_lapse() {
        let config = EngineConfig::light_sport();
        let at_scale = thrust_magnitude(&config, ThrottleCommand::new(1.0), 5000.0);
        assert_relative_eq!(at_scale, 3000.0 * (-1.0f64).exp(), epsilon = 1e-9);

        let cruise = thrust_magnitude(&config, ThrottleCommand::from_boost(false), 0.0);
        assert_relative_eq!(cruise, 1500.0);
    }

    #[test]
    fn test_follows_nose() {
        let config = EngineConfig::light_sport();
        let nose = Vector3::new(0.0, 0.6, 0.8);
        let thrust = calculate_thrust(&config, ThrottleCommand::new(0.5), 0.0, 1.0, &nose).unwrap();
        assert_relative_eq!(thrust, nose * 1500.0, epsilon = 1e-9);
    }

    #[test]
    fn test_no_thrust_without_fuel_or_throttle() {
        let config = EngineConfig::light_sport();
        let nose = Vector3::x();
        assert!(calculate_thrust(&config, ThrottleCommand::new(1.0), 0.0, 0.0, &nose).is_none());
        assert!(calculate_thrust(&config, ThrottleCommand::idle(), 0.0, 10.0, &nose).is_none());
    }
}
