use tracing::{debug, trace, warn};

use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::curve::Curve;
use crate::math::roots::{bisect, bisect_bounded, isolate_sign_changes, Bracket, Root};
use crate::math::{
    real, Real, Vector, DEFAULT_DERIVATIVE_STEP, DEFAULT_SAMPLES, DEFAULT_TOLERANCE,
};

/// Perpendicularity error `e(t) = (p - c(t)) . c'(t)`.
///
/// Zero exactly where the segment from the curve to `point` is orthogonal
/// to the tangent.
#[must_use]
pub fn perpendicularity_error<T, const N: usize, C>(
    curve: &C,
    point: &Vector<T, N>,
    t: T,
    dt: T,
) -> T
where
    T: Real,
    C: Curve<T, N> + ?Sized,
{
    (*point - curve.value_at(t)) * curve.derivative_at_with_step(t, dt)
}

/// Projects `point` onto `curve` over `[t0, t1]`.
///
/// Samples the perpendicularity error on 10 uniform sub-intervals, then
/// bisects every sub-interval whose end values differ in sign bit until
/// `|e| < tolerance`. Returns the curve points left to right, or an empty
/// vector when no sign change was found.
///
/// Inputs are not checked: `t0 < t1` and `tolerance > 0` are the caller's
/// responsibility. Bisection is unbounded, so a tolerance the error can
/// never reach (for instance across a discontinuity) makes this loop
/// forever. [`ProjectPointOnCurve`] validates its inputs and can cap the
/// iteration count instead.
#[must_use]
pub fn project_point<T, const N: usize, C>(
    curve: &C,
    point: &Vector<T, N>,
    t0: T,
    t1: T,
    tolerance: T,
) -> Vec<Vector<T, N>>
where
    T: Real,
    C: Curve<T, N> + ?Sized,
{
    let dt = real(DEFAULT_DERIVATIVE_STEP);
    let error = |t| perpendicularity_error(curve, point, t, dt);

    let brackets = isolate_sign_changes(error, t0, t1, DEFAULT_SAMPLES);
    debug!(
        brackets = brackets.len(),
        t0 = %t0,
        t1 = %t1,
        "isolated perpendicularity sign changes"
    );

    brackets
        .into_iter()
        .map(|bracket| {
            let root = bisect(error, bracket, tolerance);
            trace!(
                t = %root.t,
                residual = %root.value,
                iterations = root.iterations,
                "bracket converged"
            );
            curve.value_at(root.t)
        })
        .collect()
}

/// Tuning for [`ProjectPointOnCurve`].
#[derive(Debug, Clone, Copy)]
pub struct ProjectionConfig<T> {
    tolerance: T,
    samples: usize,
    derivative_step: T,
    max_iterations: Option<usize>,
}

impl<T: Real> Default for ProjectionConfig<T> {
    fn default() -> Self {
        Self {
            tolerance: real(DEFAULT_TOLERANCE),
            samples: DEFAULT_SAMPLES,
            derivative_step: real(DEFAULT_DERIVATIVE_STEP),
            max_iterations: None,
        }
    }
}

impl<T: Real> ProjectionConfig<T> {
    /// Creates a configuration with the given residual tolerance and default
    /// sampling.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not positive and finite.
    pub fn new(tolerance: T) -> Result<Self> {
        if !is_positive(tolerance) {
            return Err(
                OperationError::InvalidInput(format!("tolerance must be positive, got {tolerance}"))
                    .into(),
            );
        }
        Ok(Self {
            tolerance,
            ..Self::default()
        })
    }

    /// Sets the number of uniform sub-intervals used for isolation.
    ///
    /// # Errors
    ///
    /// Returns an error if `samples` is zero.
    pub fn with_samples(mut self, samples: usize) -> Result<Self> {
        if samples == 0 {
            return Err(
                OperationError::InvalidInput("at least one sample interval is required".to_owned())
                    .into(),
            );
        }
        self.samples = samples;
        Ok(self)
    }

    /// Sets the central-difference step.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is not positive and finite.
    pub fn with_derivative_step(mut self, step: T) -> Result<Self> {
        if !is_positive(step) {
            return Err(OperationError::InvalidInput(format!(
                "derivative step must be positive, got {step}"
            ))
            .into());
        }
        self.derivative_step = step;
        Ok(self)
    }

    /// Caps bisection at `max_iterations` midpoints per bracket.
    ///
    /// A bracket that hits the cap fails the query with
    /// [`OperationError::DidNotConverge`].
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iterations` is zero.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Result<Self> {
        if max_iterations == 0 {
            return Err(OperationError::InvalidInput(
                "iteration cap must allow at least one bisection step".to_owned(),
            )
            .into());
        }
        self.max_iterations = Some(max_iterations);
        Ok(self)
    }

    /// Returns the residual tolerance.
    #[must_use]
    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    /// Returns the number of sample intervals.
    #[must_use]
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Returns the central-difference step.
    #[must_use]
    pub fn derivative_step(&self) -> T {
        self.derivative_step
    }

    /// Returns the bisection cap, if any.
    #[must_use]
    pub fn max_iterations(&self) -> Option<usize> {
        self.max_iterations
    }
}

fn is_positive<T: Real>(value: T) -> bool {
    value.is_finite() && value > T::zero()
}

/// A single projection of a point onto a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection<T, const N: usize> {
    /// The projected point on the curve.
    pub point: Vector<T, N>,
    /// The parameter value at the projected point.
    pub parameter: T,
    /// The distance from the query point to the projected point.
    pub distance: T,
    /// Perpendicularity error left at `parameter`.
    pub residual: T,
}

/// Finds every orthogonal projection of a point onto a curve.
#[derive(Debug, Clone)]
pub struct ProjectPointOnCurve<T, const N: usize> {
    point: Vector<T, N>,
    range: Option<(T, T)>,
    config: ProjectionConfig<T>,
}

impl<T: Real, const N: usize> ProjectPointOnCurve<T, N> {
    /// Creates a new query with default configuration, searching the
    /// curve's own domain.
    #[must_use]
    pub fn new(point: Vector<T, N>) -> Self {
        Self {
            point,
            range: None,
            config: ProjectionConfig::default(),
        }
    }

    /// Searches `[t0, t1]` instead of the curve's domain.
    #[must_use]
    pub fn with_range(mut self, t0: T, t1: T) -> Self {
        self.range = Some((t0, t1));
        self
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ProjectionConfig<T>) -> Self {
        self.config = config;
        self
    }

    /// Executes the query, returning projections in increasing parameter
    /// order. An empty vector means no perpendicular foot was found.
    ///
    /// # Errors
    ///
    /// Returns an error if no range was given and the curve's domain is
    /// unbounded, if the range is not finite and increasing, if the point
    /// has a non-finite component, or if a capped bisection did not
    /// converge.
    pub fn execute<C>(&self, curve: &C) -> Result<Vec<Projection<T, N>>>
    where
        C: Curve<T, N> + ?Sized,
    {
        let (t0, t1) = self.search_range(curve)?;

        if !self.point.as_slice().iter().all(|c| c.is_finite()) {
            return Err(OperationError::InvalidInput(format!(
                "query point {} has non-finite components",
                self.point
            ))
            .into());
        }

        let dt = self.config.derivative_step;
        let point = &self.point;
        let error = |t| perpendicularity_error(curve, point, t, dt);

        let brackets = isolate_sign_changes(error, t0, t1, self.config.samples);
        debug!(
            brackets = brackets.len(),
            samples = self.config.samples,
            t0 = %t0,
            t1 = %t1,
            "isolated perpendicularity sign changes"
        );

        brackets
            .into_iter()
            .enumerate()
            .map(|(index, bracket)| -> Result<Projection<T, N>> {
                let root = self.refine(error, index, bracket)?;
                let on_curve = curve.value_at(root.t);
                Ok(Projection {
                    point: on_curve,
                    parameter: root.t,
                    distance: (self.point - on_curve).norm(),
                    residual: root.value,
                })
            })
            .collect()
    }

    fn search_range<C>(&self, curve: &C) -> Result<(T, T)>
    where
        C: Curve<T, N> + ?Sized,
    {
        let (t0, t1) = match self.range {
            Some(range) => range,
            None => {
                let domain = curve.domain();
                if !domain.is_bounded() {
                    return Err(GeometryError::UnboundedDomain.into());
                }
                (domain.t_min, domain.t_max)
            }
        };

        if !(t0.is_finite() && t1.is_finite() && t0 < t1) {
            return Err(OperationError::InvalidInput(format!(
                "search range [{t0}, {t1}] must be finite and increasing"
            ))
            .into());
        }
        Ok((t0, t1))
    }

    fn refine<F>(&self, error: F, index: usize, bracket: Bracket<T>) -> Result<Root<T>>
    where
        F: FnMut(T) -> T,
    {
        let tolerance = self.config.tolerance;
        let root = match self.config.max_iterations {
            None => bisect(error, bracket, tolerance),
            Some(max_iterations) => bisect_bounded(error, bracket, tolerance, max_iterations)
                .ok_or_else(|| {
                    warn!(
                        bracket = index,
                        lo = %bracket.lo,
                        hi = %bracket.hi,
                        max_iterations,
                        "bisection gave up before reaching tolerance"
                    );
                    OperationError::DidNotConverge {
                        bracket: index,
                        iterations: max_iterations,
                    }
                })?,
        };
        trace!(
            bracket = index,
            t = %root.t,
            residual = %root.value,
            iterations = root.iterations,
            "bracket converged"
        );
        Ok(root)
    }
}

/// Returns the projection nearest to the query point.
#[must_use]
pub fn closest<T: Real, const N: usize>(
    projections: &[Projection<T, N>],
) -> Option<&Projection<T, N>> {
    projections.iter().min_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}
