use approx::assert_relative_eq;
use flight_dynamics::{components::MassConfig, DynamicsOutput};
use nalgebra::Vector3;

/// Assert that every vector in a tick's output is finite and the mass is positive
#[track_caller]
pub fn assert_output_valid(output: &DynamicsOutput) {
    for force in &output.forces {
        assert!(
            force.vector.iter().all(|x| x.is_finite()),
            "{:?} force contains non-finite values",
            force.category
        );
    }
    for moment in &output.moments {
        assert!(
            moment.vector.iter().all(|x| x.is_finite()),
            "{:?} moment contains non-finite values",
            moment.category
        );
    }
    assert!(
        output.net_force.iter().all(|x| x.is_finite()),
        "Net force contains non-finite values"
    );
    assert!(
        output.net_moment.iter().all(|x| x.is_finite()),
        "Net moment contains non-finite values"
    );
    assert!(output.mass > 0.0, "Mass must be positive");
}

/// Assert that the reported mass is exactly empty weight plus fuel mass
#[track_caller]
pub fn assert_mass_matches_fuel(mass: f64, fuel_left: f64, config: &MassConfig) {
    assert_eq!(
        mass,
        config.mass_with_fuel(fuel_left),
        "Mass does not match fuel load"
    );
}

/// Assert that two vectors are approximately equal
#[track_caller]
pub fn assert_vector_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}
