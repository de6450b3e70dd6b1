use flight_dynamics::{
    components::AircraftConfig, physics::AircraftDynamicsModel, resources::EnvironmentConfig,
    NoiseSource, RandomSource, SpatialComponent,
};
use nalgebra::{UnitQuaternion, Vector3};
use std::sync::{Arc, Mutex};

pub const TEST_DT: f64 = 0.02;

/// Random source that always returns the same direction
pub struct FixedRandom(pub Vector3<f64>);

impl RandomSource for FixedRandom {
    fn inside_unit_sphere(&mut self) -> Vector3<f64> {
        self.0
    }
}

/// Noise source returning a constant sample
pub struct ConstantNoise(pub f64);

impl NoiseSource for ConstantNoise {
    fn sample(&self, _x: f64, _y: f64) -> f64 {
        self.0
    }
}

/// Noise source returning a constant sample and logging every lookup
#[derive(Clone, Default)]
pub struct RecordingNoise {
    pub value: f64,
    pub samples: Arc<Mutex<Vec<(f64, f64)>>>,
}

impl RecordingNoise {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            samples: Arc::default(),
        }
    }

    /// Take every sample point recorded so far
    pub fn drain(&self) -> Vec<(f64, f64)> {
        std::mem::take(&mut *self.samples.lock().unwrap())
    }
}

impl NoiseSource for RecordingNoise {
    fn sample(&self, x: f64, y: f64) -> f64 {
        self.samples.lock().unwrap().push((x, y));
        self.value
    }
}

/// Default aircraft flying in still air
pub fn create_calm_config() -> AircraftConfig {
    AircraftConfig {
        name: "test_calm".to_string(),
        environment: EnvironmentConfig::calm(),
        ..Default::default()
    }
}

/// Model with fixed buffet direction and centred turbulence noise
pub fn create_deterministic_model(config: AircraftConfig) -> AircraftDynamicsModel {
    AircraftDynamicsModel::with_sources(
        config,
        Box::new(FixedRandom(Vector3::new(0.0, 0.0, 1.0))),
        Box::new(ConstantNoise(0.5)),
    )
    .expect("test config should be valid")
}

/// Level attitude, air approaching at `alpha_deg` below the nose
pub fn create_spatial_at_alpha(airspeed: f64, alpha_deg: f64, altitude: f64) -> SpatialComponent {
    let alpha = alpha_deg.to_radians();
    SpatialComponent {
        position: Vector3::new(0.0, 0.0, altitude),
        velocity: Vector3::new(airspeed * alpha.cos(), 0.0, -airspeed * alpha.sin()),
        attitude: UnitQuaternion::identity(),
        angular_velocity: Vector3::zeros(),
    }
}

/// Straight and level at `speed` along world +X
pub fn create_level_spatial(speed: f64) -> SpatialComponent {
    create_spatial_at_alpha(speed, 0.0, 1000.0)
}
