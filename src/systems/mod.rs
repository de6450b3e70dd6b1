pub mod aerodynamics;
mod dynamics;
pub mod propulsion;
pub mod stall;

pub use aerodynamics::{
    calculate_flight_state, calculate_lift_drag, AeroCoefficients, AeroCurve, AeroCurveTable,
    AeroForces,
};
pub use dynamics::flight_dynamics_system;
pub use propulsion::{calculate_thrust, thrust_magnitude, FuelSystem};
pub use stall::{StallDisturbance, StallPhase, StallStateMachine, StallTransition};
