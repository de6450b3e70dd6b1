mod model;
mod traits;

pub use model::{AircraftDynamicsModel, DynamicsOutput};
pub use traits::{NoiseSource, RandomSource};
