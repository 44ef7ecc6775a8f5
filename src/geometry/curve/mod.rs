mod circle;
mod ellipse;
mod limacon;
mod line;
mod parametric;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use limacon::Limacon;
pub use line::Line;
pub use parametric::{component, ComponentFn, ParametricCurve};

use crate::math::{real, Real, Vector, DEFAULT_DERIVATIVE_STEP};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain<T> {
    /// Start of the parameter range.
    pub t_min: T,
    /// End of the parameter range.
    pub t_max: T,
}

impl<T: Real> CurveDomain<T> {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: T, t_max: T) -> Self {
        Self { t_min, t_max }
    }

    /// The whole real line.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            t_min: real(f64::NEG_INFINITY),
            t_max: real(f64::INFINITY),
        }
    }

    /// Returns `true` if `t` lies within the domain (inclusive).
    #[must_use]
    pub fn contains(&self, t: T) -> bool {
        self.t_min <= t && t <= self.t_max
    }

    /// Returns `true` if both ends are finite.
    ///
    /// Ordering is not checked here.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.t_min.is_finite() && self.t_max.is_finite()
    }
}

/// Trait for parametric curves in N-dimensional space.
pub trait Curve<T: Real, const N: usize> {
    /// Evaluates the curve at parameter `t`.
    fn value_at(&self, t: T) -> Vector<T, N>;

    /// Approximates the tangent `c'(t)` with the default step.
    fn derivative_at(&self, t: T) -> Vector<T, N> {
        self.derivative_at_with_step(t, real(DEFAULT_DERIVATIVE_STEP))
    }

    /// Approximates the tangent `c'(t)` by the central difference
    /// `(c(t + dt) - c(t - dt)) / (2 dt)`.
    ///
    /// Accuracy depends only on `dt` and the smoothness of the curve.
    fn derivative_at_with_step(&self, t: T, dt: T) -> Vector<T, N> {
        let right = self.value_at(t + dt);
        let left = self.value_at(t - dt);
        (right - left) / (real::<T>(2.0) * dt)
    }

    /// Returns the natural parameter domain of the curve.
    fn domain(&self) -> CurveDomain<T> {
        CurveDomain::unbounded()
    }
}
