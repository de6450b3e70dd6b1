use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Air data derived every tick from the rigid-body velocity and the wind.
/// Nothing here survives from one tick to the next.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightState {
    /// Speed relative to the air mass (m/s).
    pub airspeed: f64,
    /// Angle of attack (degrees), zero when airspeed is negligible.
    pub angle_of_attack: f64,
    /// Velocity relative to the air mass, world frame (m/s).
    pub relative_air: Vector3<f64>,
    /// Height above the datum (m).
    pub altitude: f64,
    /// Air density at altitude (kg/m³).
    pub density: f64,
    /// `0.5 * ρ * V²` (Pa).
    pub dynamic_pressure: f64,
}

impl FlightState {
    /// True when airspeed is high enough for aerodynamic forces to apply.
    pub fn has_airflow(&self) -> bool {
        self.airspeed > crate::utils::MIN_AIRSPEED_THRESHOLD
    }
}

impl Default for FlightState {
    fn default() -> Self {
        Self {
            airspeed: 0.0,
            angle_of_attack: 0.0,
            relative_air: Vector3::zeros(),
            altitude: 0.0,
            density: crate::utils::SEA_LEVEL_DENSITY,
            dynamic_pressure: 0.0,
        }
    }
}

/// Stall flag and how long it has been set. Persists across ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StallStatus {
    pub in_stall: bool,
    /// Seconds since the current stall began; zero while flying.
    pub time_in_stall: f64,
}

/// Remaining fuel. Persists across ticks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelState {
    /// Fuel units left, always within `[0, capacity]`.
    pub remaining: f64,
}

/// Read-only snapshot of the most recently completed tick, polled by HUDs.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    /// m/s
    pub airspeed: f64,
    /// m
    pub altitude: f64,
    /// degrees
    pub angle_of_attack: f64,
    pub fuel_left: f64,
    pub is_stalled: bool,
}
