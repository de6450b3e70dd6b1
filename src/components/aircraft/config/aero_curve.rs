use serde::{Deserialize, Serialize};

use super::loader::{ensure_finite, ConfigError};

/// A single control point of an aerodynamic coefficient curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Angle of attack (degrees)
    pub angle: f64,
    /// Dimensionless coefficient at that angle
    pub coefficient: f64,
}

impl CurvePoint {
    pub const fn new(angle: f64, coefficient: f64) -> Self {
        Self { angle, coefficient }
    }
}

impl From<(f64, f64)> for CurvePoint {
    fn from((angle, coefficient): (f64, f64)) -> Self {
        Self::new(angle, coefficient)
    }
}

/// How a curve is evaluated between control points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveInterpolation {
    /// Straight segments between points.
    Linear,
    /// Cubic segments with flat tangents at every point, as produced by a
    /// keyframe curve built from bare `(time, value)` keys.
    #[default]
    Eased,
    /// Cubic segments with finite-difference tangents.
    CatmullRom,
}

pub const DEFAULT_LIFT_CURVE: [CurvePoint; 6] = [
    CurvePoint::new(-20.0, -0.5),
    CurvePoint::new(-5.0, 0.0),
    CurvePoint::new(5.0, 0.5),
    CurvePoint::new(15.0, 1.2),
    CurvePoint::new(20.0, 0.8),
    CurvePoint::new(25.0, 0.5),
];

pub const DEFAULT_DRAG_CURVE: [CurvePoint; 5] = [
    CurvePoint::new(-20.0, 0.8),
    CurvePoint::new(0.0, 0.05),
    CurvePoint::new(15.0, 0.1),
    CurvePoint::new(20.0, 0.3),
    CurvePoint::new(25.0, 0.5),
];

/// Aerodynamic configuration: stall threshold and coefficient curves.
///
/// Empty curves are legal and fall back to [`DEFAULT_LIFT_CURVE`] and
/// [`DEFAULT_DRAG_CURVE`] when the curve table is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AeroConfig {
    /// Angle of attack magnitude above which the wing stalls (degrees)
    pub stall_angle: f64,
    /// Lift coefficient against signed angle of attack
    pub lift_curve: Vec<CurvePoint>,
    /// Drag coefficient against angle of attack (queried with |α|)
    pub drag_curve: Vec<CurvePoint>,
    pub interpolation: CurveInterpolation,
}

impl AeroConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite("aero.stall_angle", self.stall_angle)?;
        if self.stall_angle <= 0.0 || self.stall_angle >= 90.0 {
            return Err(ConfigError::ValidationError(format!(
                "aero.stall_angle must lie in (0, 90) degrees, got {}",
                self.stall_angle
            )));
        }
        validate_curve("aero.lift_curve", &self.lift_curve)?;
        validate_curve("aero.drag_curve", &self.drag_curve)
    }
}

impl Default for AeroConfig {
    fn default() -> Self {
        Self {
            stall_angle: 12.0,
            lift_curve: Vec::new(),
            drag_curve: Vec::new(),
            interpolation: CurveInterpolation::default(),
        }
    }
}

fn validate_curve(name: &str, points: &[CurvePoint]) -> Result<(), ConfigError> {
    for (i, point) in points.iter().enumerate() {
        ensure_finite(&format!("{name}[{i}].angle"), point.angle)?;
        ensure_finite(&format!("{name}[{i}].coefficient"), point.coefficient)?;
    }

    let mut angles: Vec<f64> = points.iter().map(|p| p.angle).collect();
    angles.sort_by(f64::total_cmp);
    if let Some(pair) = angles.windows(2).find(|w| w[0] == w[1]) {
        return Err(ConfigError::ValidationError(format!(
            "{name} has duplicate control points at {} degrees",
            pair[0]
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AeroConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_duplicate_angles() {
        let config = AeroConfig {
            lift_curve: vec![(0.0, 0.1).into(), (5.0, 0.4).into(), (0.0, 0.2).into()],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_rejects_non_finite_coefficient() {
        let config = AeroConfig {
            drag_curve: vec![(0.0, f64::NAN).into()],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_stall_angle() {
        for stall_angle in [0.0, -3.0, 90.0, f64::INFINITY] {
            let config = AeroConfig {
                stall_angle,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "accepted {}", stall_angle);
        }
    }

    #[test]
    fn test_interpolation_deserializes_snake_case() {
        let mode: CurveInterpolation = serde_yaml::from_str("catmull_rom").unwrap();
        assert_eq!(mode, CurveInterpolation::CatmullRom);
    }
}
