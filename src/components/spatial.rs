use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Kinematic state of the rigid body, owned by the host physics engine and
/// read by the flight model at the start of every tick.
///
/// World frame is right-handed with +Z up. Body frame is forward-left-up.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct SpatialComponent {
    /// Position in world space [m]
    pub position: Vector3<f64>,

    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,

    /// Attitude quaternion (rotation from body to world frame)
    pub attitude: UnitQuaternion<f64>,

    /// Angular velocity in world space [rad/s]
    pub angular_velocity: Vector3<f64>,
}

impl Default for SpatialComponent {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
            angular_velocity: Vector3::zeros(),
        }
    }
}

impl SpatialComponent {
    /// Create a new spatial component with initial values
    pub fn new(
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        attitude: UnitQuaternion<f64>,
        angular_velocity: Vector3<f64>,
    ) -> Self {
        Self {
            position,
            velocity,
            attitude,
            angular_velocity,
        }
    }

    /// Create a new spatial component at a specific position
    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Height above the datum [m]
    pub fn altitude(&self) -> f64 {
        self.position.z
    }

    /// Body nose axis in world space
    pub fn forward(&self) -> Vector3<f64> {
        self.attitude * Vector3::x()
    }

    /// Body starboard axis in world space
    pub fn right(&self) -> Vector3<f64> {
        self.attitude * -Vector3::y()
    }

    /// Body up axis in world space
    pub fn up(&self) -> Vector3<f64> {
        self.attitude * Vector3::z()
    }

    /// Express a world-space vector in the body frame
    pub fn to_body(&self, world: &Vector3<f64>) -> Vector3<f64> {
        self.attitude.inverse_transform_vector(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_identity_axes() {
        let spatial = SpatialComponent::default();
        assert_relative_eq!(spatial.forward(), Vector3::x());
        assert_relative_eq!(spatial.right(), -Vector3::y());
        assert_relative_eq!(spatial.up(), Vector3::z());
    }

    #[test]
    fn test_axes_follow_heading() {
        // Yaw 90° left: nose points along world +Y
        let spatial = SpatialComponent::new(
            Vector3::zeros(),
            Vector3::zeros(),
            UnitQuaternion::from_euler_angles(0.0, 0.0, FRAC_PI_2),
            Vector3::zeros(),
        );
        assert_relative_eq!(spatial.forward(), Vector3::y(), epsilon = 1e-12);
        assert_relative_eq!(spatial.right(), Vector3::x(), epsilon = 1e-12);
        assert_relative_eq!(spatial.up(), Vector3::z(), epsilon = 1e-12);

        let body = spatial.to_body(&Vector3::new(0.0, 10.0, 0.0));
        assert_relative_eq!(body, Vector3::new(10.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_altitude_is_vertical_component() {
        let spatial = SpatialComponent::at_position(Vector3::new(100.0, -20.0, 1500.0));
        assert_relative_eq!(spatial.altitude(), 1500.0);
    }
}
