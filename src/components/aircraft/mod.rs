pub mod config;
pub mod state;

pub use config::{
    AeroConfig, AircraftConfig, AircraftGeometry, AircraftSource, AircraftType, ConfigError,
    CurveInterpolation, CurvePoint, EngineConfig, MassConfig, DEFAULT_DRAG_CURVE,
    DEFAULT_LIFT_CURVE,
};
pub use state::{FlightState, FuelState, StallStatus, Telemetry};
