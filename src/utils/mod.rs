pub mod constants;
pub mod math;
pub mod noise;
pub mod rng;

pub use constants::*;
pub use math::*;
pub use self::noise::PerlinNoise;
pub use rng::{RngManager, RngSource};
