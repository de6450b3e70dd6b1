mod aero_curve;
mod aircraft;
mod geometry;
mod loader;
mod mass;
mod propulsion;

pub use aero_curve::{
    AeroConfig, CurveInterpolation, CurvePoint, DEFAULT_DRAG_CURVE, DEFAULT_LIFT_CURVE,
};
pub use aircraft::{AircraftConfig, AircraftSource, AircraftType};
pub use geometry::AircraftGeometry;
pub use loader::ConfigError;
pub(crate) use loader::{ensure_finite_vector, ensure_non_negative, ensure_positive};
pub use mass::MassConfig;
pub use propulsion::EngineConfig;
