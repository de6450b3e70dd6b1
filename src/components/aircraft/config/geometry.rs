use serde::{Deserialize, Serialize};

use super::loader::{ensure_positive, ConfigError};

/// Configuration for the geometry of an aircraft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AircraftGeometry {
    /// The total wing area of the aircraft (m²).
    pub wing_area: f64,
    /// The wingspan of the aircraft (m).
    pub wing_span: f64,
    /// The mean chord length of the wing (m).
    pub chord_length: f64,
}

impl AircraftGeometry {
    /// Creates a new `AircraftGeometry` instance with the specified parameters.
    ///
    /// # Arguments
    /// * `wing_area` - The total wing area of the aircraft (m²).
    /// * `wing_span` - The wing span of the aircraft (m).
    /// * `chord_length` - The mean chord length (m).
    pub fn new(wing_area: f64, wing_span: f64, chord_length: f64) -> Self {
        AircraftGeometry {
            wing_area,
            wing_span,
            chord_length,
        }
    }

    pub fn light_sport() -> Self {
        Self::new(15.0, 10.0, 2.5)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("geometry.wing_area", self.wing_area)?;
        ensure_positive("geometry.wing_span", self.wing_span)?;
        ensure_positive("geometry.chord_length", self.chord_length)
    }
}

impl Default for AircraftGeometry {
    fn default() -> Self {
        Self::light_sport()
    }
}
