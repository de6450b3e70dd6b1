use nalgebra::Vector3;
use std::f64::consts::PI;

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Unit vector along `v`, or `None` when `v` is too short to carry a direction.
#[inline]
pub fn safe_normalize(v: &Vector3<f64>, min_norm: f64) -> Option<Vector3<f64>> {
    v.try_normalize(min_norm)
}

/// True when every component of the vector is finite.
#[inline]
pub fn is_finite_vector(v: &Vector3<f64>) -> bool {
    v.iter().all(|c| c.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rad_to_deg() {
        assert_relative_eq!(rad_to_deg(PI), 180.0);
        assert_relative_eq!(rad_to_deg(12f64.to_radians()), 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_finite_vector_check() {
        assert!(is_finite_vector(&Vector3::new(1.0, -2.0, 0.0)));
        assert!(!is_finite_vector(&Vector3::new(0.0, f64::NAN, 0.0)));
        assert!(!is_finite_vector(&Vector3::new(f64::NEG_INFINITY, 0.0, 0.0)));
    }

    #[test]
    fn test_safe_normalize_rejects_degenerate() {
        assert!(safe_normalize(&Vector3::zeros(), 1e-9).is_none());
        let n = safe_normalize(&Vector3::new(3.0, 0.0, 4.0), 1e-9).unwrap();
        assert_relative_eq!(n.norm(), 1.0);
    }
}
