use std::f64::consts::PI;

use crate::error::{GeometryError, Result};
use crate::math::{Vector2, TOLERANCE};

use super::{Curve, CurveDomain};

/// A full circle in the plane.
///
/// `P(t) = center + radius * (cos(t), sin(t))`, with domain `[-pi, pi]`.
#[derive(Debug, Clone)]
pub struct Circle {
    center: Vector2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive or not finite.
    pub fn new(center: Vector2, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius < TOLERANCE {
            return Err(
                GeometryError::Degenerate("circle radius must be positive".into()).into(),
            );
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Vector2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Exact tangent `P'(t)`.
    #[must_use]
    pub fn tangent(&self, t: f64) -> Vector2 {
        Vector2::new([-self.radius * t.sin(), self.radius * t.cos()])
    }
}

impl Curve<f64, 2> for Circle {
    fn value_at(&self, t: f64) -> Vector2 {
        self.center + Vector2::new([self.radius * t.cos(), self.radius * t.sin()])
    }

    fn domain(&self) -> CurveDomain<f64> {
        CurveDomain::new(-PI, PI)
    }
}
