use crate::components::{
    AeroConfig, ConfigError, CurveInterpolation, CurvePoint, DEFAULT_DRAG_CURVE,
    DEFAULT_LIFT_CURVE,
};

/// Coefficient as a piecewise function of angle of attack.
///
/// Control points are kept sorted by angle. Queries outside the covered
/// range return the value of the nearest end point.
#[derive(Debug, Clone, PartialEq)]
pub struct AeroCurve {
    points: Vec<CurvePoint>,
    interpolation: CurveInterpolation,
}

impl AeroCurve {
    pub fn new(
        points: impl IntoIterator<Item = CurvePoint>,
        interpolation: CurveInterpolation,
    ) -> Result<Self, ConfigError> {
        let mut points: Vec<CurvePoint> = points.into_iter().collect();
        if points.is_empty() {
            return Err(ConfigError::ValidationError(
                "curve needs at least one control point".to_string(),
            ));
        }
        if points
            .iter()
            .any(|p| !p.angle.is_finite() || !p.coefficient.is_finite())
        {
            return Err(ConfigError::ValidationError(
                "curve control points must be finite".to_string(),
            ));
        }
        points.sort_by(|a, b| a.angle.total_cmp(&b.angle));
        if points.windows(2).any(|w| w[0].angle == w[1].angle) {
            return Err(ConfigError::ValidationError(
                "curve control points must have distinct angles".to_string(),
            ));
        }
        Ok(Self {
            points,
            interpolation,
        })
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn interpolation(&self) -> CurveInterpolation {
        self.interpolation
    }

    /// Coefficient at an arbitrary angle (degrees).
    pub fn evaluate(&self, angle: f64) -> f64 {
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        if angle.is_nan() {
            return first.coefficient;
        }
        if angle <= first.angle {
            return first.coefficient;
        }
        if angle >= last.angle {
            return last.coefficient;
        }

        // Bracketing segment: points[i] <= angle < points[i + 1]
        let i = self.points.partition_point(|p| p.angle <= angle) - 1;
        let (p0, p1) = (self.points[i], self.points[i + 1]);
        let h = p1.angle - p0.angle;
        let t = (angle - p0.angle) / h;

        match self.interpolation {
            CurveInterpolation::Linear => p0.coefficient + (p1.coefficient - p0.coefficient) * t,
            CurveInterpolation::Eased => hermite(p0.coefficient, 0.0, p1.coefficient, 0.0, h, t),
            CurveInterpolation::CatmullRom => {
                let m0 = self.tangent(i);
                let m1 = self.tangent(i + 1);
                hermite(p0.coefficient, m0, p1.coefficient, m1, h, t)
            }
        }
    }

    /// Finite-difference slope at point `i`, one-sided at the ends.
    fn tangent(&self, i: usize) -> f64 {
        let n = self.points.len();
        let lo = self.points[i.saturating_sub(1)];
        let hi = self.points[(i + 1).min(n - 1)];
        let span = hi.angle - lo.angle;
        if span > 0.0 {
            (hi.coefficient - lo.coefficient) / span
        } else {
            0.0
        }
    }
}

/// Cubic Hermite segment over an interval of width `h` at parameter `t`.
fn hermite(y0: f64, m0: f64, y1: f64, m1: f64, h: f64, t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;
    h00 * y0 + h10 * h * m0 + h01 * y1 + h11 * h * m1
}

/// Lift and drag coefficient lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct AeroCurveTable {
    lift: AeroCurve,
    drag: AeroCurve,
}

impl AeroCurveTable {
    /// Builds both curves, substituting the default control points for any
    /// curve the configuration leaves empty.
    pub fn from_config(config: &AeroConfig) -> Result<Self, ConfigError> {
        let lift_points = if config.lift_curve.is_empty() {
            DEFAULT_LIFT_CURVE.to_vec()
        } else {
            config.lift_curve.clone()
        };
        let drag_points = if config.drag_curve.is_empty() {
            DEFAULT_DRAG_CURVE.to_vec()
        } else {
            config.drag_curve.clone()
        };
        Ok(Self {
            lift: AeroCurve::new(lift_points, config.interpolation)?,
            drag: AeroCurve::new(drag_points, config.interpolation)?,
        })
    }

    pub fn defaults(interpolation: CurveInterpolation) -> Self {
        Self {
            lift: AeroCurve {
                points: DEFAULT_LIFT_CURVE.to_vec(),
                interpolation,
            },
            drag: AeroCurve {
                points: DEFAULT_DRAG_CURVE.to_vec(),
                interpolation,
            },
        }
    }

    /// Lift coefficient at signed angle of attack (degrees).
    pub fn lift_coefficient(&self, angle_of_attack: f64) -> f64 {
        self.lift.evaluate(angle_of_attack)
    }

    /// Drag coefficient, always looked up with |α|.
    pub fn drag_coefficient(&self, angle_of_attack: f64) -> f64 {
        self.drag.evaluate(angle_of_attack.abs())
    }

    pub fn lift_curve(&self) -> &AeroCurve {
        &self.lift
    }

    pub fn drag_curve(&self) -> &AeroCurve {
        &self.drag
    }
}

impl Default for AeroCurveTable {
    fn default() -> Self {
        Self::defaults(CurveInterpolation::default())
    }
}
