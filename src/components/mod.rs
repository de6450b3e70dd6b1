pub mod aircraft;
pub mod controls;
pub mod physics;
pub mod spatial;

pub use aircraft::{
    AeroConfig, AircraftConfig, AircraftGeometry, AircraftSource, AircraftType, ConfigError,
    CurveInterpolation, CurvePoint, EngineConfig, FlightState, FuelState, MassConfig,
    StallStatus, Telemetry, DEFAULT_DRAG_CURVE, DEFAULT_LIFT_CURVE,
};
pub use controls::{PilotInput, ThrottleCommand};
pub use physics::{Force, ForceCategory, Moment, PhysicsComponent};
pub use spatial::SpatialComponent;
