use nalgebra::Vector3;

use super::config::EnvironmentConfig;
use crate::physics::NoiseSource;
use crate::utils::{PerlinNoise, DENSITY_SCALE_HEIGHT, WIND_DRIFT_FACTOR};

/// Air density, wind and turbulence as pure functions of altitude and
/// simulation time. Holds no state beyond its configuration.
pub struct EnvironmentModel {
    sea_level_density: f64,
    wind_velocity: Vector3<f64>,
    turbulence_power: f64,
    turbulence_speed: f64,
    noise: Box<dyn NoiseSource>,
}

impl EnvironmentModel {
    pub fn new(config: &EnvironmentConfig) -> Self {
        Self::with_noise(config, Box::new(PerlinNoise::default()))
    }

    pub fn with_noise(config: &EnvironmentConfig, noise: Box<dyn NoiseSource>) -> Self {
        Self {
            sea_level_density: config.atmosphere.sea_level_density,
            wind_velocity: config.wind.velocity,
            turbulence_power: config.wind.turbulence_power,
            turbulence_speed: config.wind.turbulence_speed,
            noise,
        }
    }

    /// Exponential atmosphere: `ρ0 · exp(-h / 8000)`.
    pub fn air_density(&self, altitude: f64) -> f64 {
        self.sea_level_density * (-altitude / DENSITY_SCALE_HEIGHT).exp()
    }

    pub fn wind_velocity(&self) -> Vector3<f64> {
        self.wind_velocity
    }

    pub fn turbulence_power(&self) -> f64 {
        self.turbulence_power
    }

    /// Velocity of the body relative to the surrounding air mass.
    pub fn relative_air(&self, velocity: &Vector3<f64>) -> Vector3<f64> {
        velocity - self.wind_velocity
    }

    /// Constant-fraction drift force pushing the body along the wind.
    pub fn wind_force(&self, mass: f64) -> Vector3<f64> {
        self.wind_velocity * mass * WIND_DRIFT_FACTOR
    }

    /// Turbulence force at `sim_time`, each axis in
    /// `[-0.5, 0.5] · power · airspeed`. Zero when turbulence is disabled.
    pub fn turbulence_force(&self, airspeed: f64, sim_time: f64) -> Vector3<f64> {
        if self.turbulence_power <= 0.0 {
            return Vector3::zeros();
        }

        let t = sim_time * self.turbulence_speed;
        let gust = Vector3::new(
            self.noise.sample(t, 0.0) - 0.5,
            self.noise.sample(0.0, t) - 0.5,
            self.noise.sample(t, t) - 0.5,
        );
        gust * self.turbulence_power * airspeed
    }
}
