use bevy::log::warn;
use nalgebra::Vector3;

use crate::components::FlightState;
use crate::utils::{safe_normalize, MIN_DIRECTION_NORM};

/// Lift and drag coefficients for one tick, after any stall degradation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AeroCoefficients {
    pub lift: f64,
    pub drag: f64,
}

impl AeroCoefficients {
    pub fn new(lift: f64, drag: f64) -> Self {
        Self { lift, drag }
    }

    /// Scale both coefficients, e.g. by the post-stall factors.
    pub fn scaled(self, lift_factor: f64, drag_factor: f64) -> Self {
        Self {
            lift: self.lift * lift_factor,
            drag: self.drag * drag_factor,
        }
    }
}

/// World-space aerodynamic forces. A contribution is `None` when its
/// direction could not be formed this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AeroForces {
    pub lift: Option<Vector3<f64>>,
    pub drag: Option<Vector3<f64>>,
}

// --- Pure Calculation Logic ---

/// Compose lift and drag in world space.
///
/// Lift acts along `right × airflow` (perpendicular to the airflow, in the
/// plane of symmetry), drag acts against the airflow. Both scale with
/// `q · S · C`.
///
/// # Arguments
/// * `state` - This tick's air data.
/// * `right` - Body starboard axis in world space.
/// * `wing_area` - Reference area (m²).
/// * `coefficients` - Lift and drag coefficients to apply.
pub fn calculate_lift_drag(
    state: &FlightState,
    right: &Vector3<f64>,
    wing_area: f64,
    coefficients: AeroCoefficients,
) -> AeroForces {
    if !state.has_airflow() {
        return AeroForces::default();
    }

    let Some(airflow_dir) = safe_normalize(&state.relative_air, MIN_DIRECTION_NORM) else {
        warn!(
            "Relative airflow {:?} too small to normalise, skipping lift and drag",
            state.relative_air
        );
        return AeroForces::default();
    };

    let scale = state.dynamic_pressure * wing_area;
    let drag = -airflow_dir * scale * coefficients.drag;

    // Airflow along the span leaves lift undefined
    let lift = match safe_normalize(&right.cross(&airflow_dir), MIN_DIRECTION_NORM) {
        Some(lift_dir) => Some(lift_dir * scale * coefficients.lift),
        None => {
            warn!("Airflow parallel to the wing span, skipping lift");
            None
        }
    };

    AeroForces {
        lift,
        drag: Some(drag),
    }
}
