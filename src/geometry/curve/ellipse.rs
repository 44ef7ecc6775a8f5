use std::f64::consts::PI;

use crate::error::{GeometryError, Result};
use crate::math::{Vector2, TOLERANCE};

use super::{Curve, CurveDomain};

/// An axis-aligned ellipse in the plane.
///
/// `P(t) = center + (semi_x * cos(t), semi_y * sin(t))`, with domain
/// `[-pi, pi]`.
#[derive(Debug, Clone)]
pub struct Ellipse {
    center: Vector2,
    semi_x: f64,
    semi_y: f64,
}

impl Ellipse {
    /// Creates a new ellipse.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the ellipse
    /// * `semi_x` - Semi-axis along x (must be positive)
    /// * `semi_y` - Semi-axis along y (must be positive)
    ///
    /// # Errors
    ///
    /// Returns an error if either semi-axis is non-positive or not finite.
    pub fn new(center: Vector2, semi_x: f64, semi_y: f64) -> Result<Self> {
        if !semi_x.is_finite() || semi_x < TOLERANCE {
            return Err(GeometryError::Degenerate("x semi-axis must be positive".into()).into());
        }
        if !semi_y.is_finite() || semi_y < TOLERANCE {
            return Err(GeometryError::Degenerate("y semi-axis must be positive".into()).into());
        }
        Ok(Self {
            center,
            semi_x,
            semi_y,
        })
    }

    /// Returns the center of the ellipse.
    #[must_use]
    pub fn center(&self) -> &Vector2 {
        &self.center
    }

    /// Returns the semi-axis along x.
    #[must_use]
    pub fn semi_x(&self) -> f64 {
        self.semi_x
    }

    /// Returns the semi-axis along y.
    #[must_use]
    pub fn semi_y(&self) -> f64 {
        self.semi_y
    }
}

impl Curve<f64, 2> for Ellipse {
    fn value_at(&self, t: f64) -> Vector2 {
        self.center + Vector2::new([self.semi_x * t.cos(), self.semi_y * t.sin()])
    }

    fn domain(&self) -> CurveDomain<f64> {
        CurveDomain::new(-PI, PI)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn evaluate_on_axes() {
        let e = Ellipse::new(Vector2::zeros(), 3.0, 2.0).unwrap();
        assert!((e.value_at(0.0) - Vector2::new([3.0, 0.0])).norm() < 1e-12);
        assert!((e.value_at(FRAC_PI_2) - Vector2::new([0.0, 2.0])).norm() < 1e-12);
    }

    #[test]
    fn derivative_on_major_vertex() {
        let e = Ellipse::new(Vector2::zeros(), 3.0, 2.0).unwrap();
        let d = e.derivative_at(0.0);
        assert!(d[0].abs() < 1e-9);
        assert!((d[1] - 2.0).abs() < 1e-8);
    }

    #[test]
    fn invalid_axes() {
        assert!(Ellipse::new(Vector2::zeros(), 0.0, 1.0).is_err());
        assert!(Ellipse::new(Vector2::zeros(), 1.0, -2.0).is_err());
    }
}
