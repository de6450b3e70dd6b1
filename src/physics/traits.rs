use nalgebra::Vector3;

/// Source of non-deterministic samples used for stall buffeting.
///
/// Production code wires in a real RNG; tests substitute a seeded or fixed
/// implementation so a tick becomes reproducible.
pub trait RandomSource: Send + Sync {
    /// A point sampled uniformly inside the unit ball (length ≤ 1).
    fn inside_unit_sphere(&mut self) -> Vector3<f64>;
}

/// Deterministic, band-limited 2D noise used to synthesise turbulence.
pub trait NoiseSource: Send + Sync {
    /// Noise value in `[0, 1]` at `(x, y)`. Must be a pure function of its inputs.
    fn sample(&self, x: f64, y: f64) -> f64;
}
