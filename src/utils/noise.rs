use noise::{NoiseFn, Perlin};

use crate::physics::NoiseSource;

/// Seeded 2D Perlin noise remapped into `[0, 1]`.
pub struct PerlinNoise {
    noise: Perlin,
}

impl PerlinNoise {
    pub fn new(seed: u32) -> Self {
        Self {
            noise: Perlin::new(seed),
        }
    }
}

impl Default for PerlinNoise {
    fn default() -> Self {
        Self::new(0)
    }
}

impl NoiseSource for PerlinNoise {
    fn sample(&self, x: f64, y: f64) -> f64 {
        // Perlin output sits in roughly [-1, 1]
        let raw = self.noise.get([x, y]);
        ((raw + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}
