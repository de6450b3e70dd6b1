mod air_data;
mod curves;
mod force_calculator;

pub use air_data::calculate_flight_state;
pub use curves::{AeroCurve, AeroCurveTable};
pub use force_calculator::{calculate_lift_drag, AeroCoefficients, AeroForces};
