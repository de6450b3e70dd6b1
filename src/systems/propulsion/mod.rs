mod engine;
mod fuel;

pub use engine::{calculate_thrust, thrust_magnitude};
pub use fuel::FuelSystem;
