use crate::error::{GeometryError, Result};
use crate::math::{real, Real, Vector, TOLERANCE};

use super::Curve;

/// An infinite line defined by an origin point and a direction vector.
///
/// The parametric form is: `P(t) = origin + t * direction`. The direction
/// is kept as given, so `t = 1` lands on `origin + direction`.
#[derive(Debug, Clone)]
pub struct Line<T, const N: usize> {
    origin: Vector<T, N>,
    direction: Vector<T, N>,
}

impl<T: Real, const N: usize> Line<T, N> {
    /// Creates a new line from an origin and direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction vector is zero-length.
    pub fn new(origin: Vector<T, N>, direction: Vector<T, N>) -> Result<Self> {
        if direction.norm() < real(TOLERANCE) {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self { origin, direction })
    }

    /// Returns the origin point of the line.
    #[must_use]
    pub fn origin(&self) -> &Vector<T, N> {
        &self.origin
    }

    /// Returns the direction vector of the line.
    #[must_use]
    pub fn direction(&self) -> &Vector<T, N> {
        &self.direction
    }

    /// Parameter of the perpendicular foot of `point`:
    /// `t = (point - origin) . d / (d . d)`.
    #[must_use]
    pub fn foot_parameter(&self, point: &Vector<T, N>) -> T {
        ((*point - self.origin) * self.direction) / (self.direction * self.direction)
    }
}

impl<T: Real, const N: usize> Curve<T, N> for Line<T, N> {
    fn value_at(&self, t: T) -> Vector<T, N> {
        self.origin + Vector::new(std::array::from_fn(|i| t * self.direction[i]))
    }
}
