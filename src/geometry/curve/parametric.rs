use std::fmt;

use crate::math::{Real, Vector};

use super::{Curve, CurveDomain};

/// One scalar component `t -> x_i(t)` of a [`ParametricCurve`].
pub type ComponentFn<T> = Box<dyn Fn(T) -> T + Send + Sync>;

/// Boxes a closure as a curve component.
///
/// Lets an array of distinct closures coerce to `[ComponentFn<T>; N]`.
#[must_use]
pub fn component<T, F>(f: F) -> ComponentFn<T>
where
    F: Fn(T) -> T + Send + Sync + 'static,
{
    Box::new(f)
}

/// A curve given by `N` independent scalar functions of one parameter.
///
/// `P(t) = (x_0(t), x_1(t), ..., x_{N-1}(t))`
///
/// The components are owned by the curve and never change after
/// construction. They are assumed pure and defined over any range the curve
/// is sampled on, including the derivative step on either side.
pub struct ParametricCurve<T, const N: usize> {
    components: [ComponentFn<T>; N],
    domain: CurveDomain<T>,
}

impl<T: Real, const N: usize> ParametricCurve<T, N> {
    /// Creates a curve from its component functions, with an unbounded
    /// domain.
    ///
    /// ```
    /// use curveproj::geometry::curve::{component, Curve, ParametricCurve};
    ///
    /// let circle = ParametricCurve::new([
    ///     component(|t: f64| 2.0 * t.cos()),
    ///     component(|t: f64| 2.0 * t.sin()),
    /// ]);
    /// assert!((circle.value_at(0.0)[0] - 2.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn new(components: [ComponentFn<T>; N]) -> Self {
        Self {
            components,
            domain: CurveDomain::unbounded(),
        }
    }

    /// Restricts the natural domain reported by [`Curve::domain`].
    ///
    /// Evaluation outside the domain is still allowed.
    #[must_use]
    pub fn with_domain(mut self, t_min: T, t_max: T) -> Self {
        self.domain = CurveDomain::new(t_min, t_max);
        self
    }

    /// Returns the `i`-th component function.
    ///
    /// # Panics
    ///
    /// Panics if `i >= N`.
    #[must_use]
    pub fn component(&self, i: usize) -> &(dyn Fn(T) -> T + Send + Sync) {
        self.components[i].as_ref()
    }
}

impl<T: Real, const N: usize> Curve<T, N> for ParametricCurve<T, N> {
    fn value_at(&self, t: T) -> Vector<T, N> {
        Vector::new(std::array::from_fn(|i| (self.components[i])(t)))
    }

    fn domain(&self) -> CurveDomain<T> {
        self.domain
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for ParametricCurve<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParametricCurve")
            .field("dimension", &N)
            .field("domain", &self.domain)
            .finish_non_exhaustive()
    }
}
