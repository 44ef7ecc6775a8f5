use std::f64::consts::PI;

use crate::error::{GeometryError, Result};
use crate::math::{Vector2, TOLERANCE};

use super::{Curve, CurveDomain};

/// A limaçon-style epitrochoid centred at the origin.
///
/// `P(t) = (2a cos(t) - b cos(2t), 2a sin(t) - b sin(2t))`, with domain
/// `[-pi, pi]`. `a = 3, b = 1` gives the classic kidney-like loop used in
/// the demo.
#[derive(Debug, Clone)]
pub struct Limacon {
    a: f64,
    b: f64,
}

impl Limacon {
    /// Creates a new limaçon.
    ///
    /// # Errors
    ///
    /// Returns an error if `a` is non-positive or `b` is not finite.
    pub fn new(a: f64, b: f64) -> Result<Self> {
        if !a.is_finite() || a < TOLERANCE {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "a",
                value: a,
                min: TOLERANCE,
                max: f64::MAX,
            }
            .into());
        }
        if !b.is_finite() {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "b",
                value: b,
                min: f64::MIN,
                max: f64::MAX,
            }
            .into());
        }
        Ok(Self { a, b })
    }
}

impl Curve<f64, 2> for Limacon {
    fn value_at(&self, t: f64) -> Vector2 {
        let two_a = 2.0 * self.a;
        Vector2::new([
            two_a * t.cos() - self.b * (2.0 * t).cos(),
            two_a * t.sin() - self.b * (2.0 * t).sin(),
        ])
    }

    fn domain(&self) -> CurveDomain<f64> {
        CurveDomain::new(-PI, PI)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_at_zero_and_pi() {
        let l = Limacon::new(3.0, 1.0).unwrap();
        assert!((l.value_at(0.0) - Vector2::new([5.0, 0.0])).norm() < 1e-12);
        assert!((l.value_at(PI) - Vector2::new([-7.0, 0.0])).norm() < 1e-12);
    }

    #[test]
    fn symmetric_about_x_axis() {
        let l = Limacon::new(3.0, 1.0).unwrap();
        let p = l.value_at(0.8);
        let q = l.value_at(-0.8);
        assert!((p[0] - q[0]).abs() < 1e-12);
        assert!((p[1] + q[1]).abs() < 1e-12);
    }

    #[test]
    fn invalid_coefficients() {
        assert!(Limacon::new(0.0, 1.0).is_err());
        assert!(Limacon::new(1.0, f64::INFINITY).is_err());
    }
}
