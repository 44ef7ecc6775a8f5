//! Sign-change isolation and bisection for scalar functions of one variable.
//!
//! Signs are compared by their IEEE-754 sign bit, so `+0.0` and `-0.0`
//! count as opposite signs. A sample landing exactly on a root therefore
//! brackets on one side or the other depending on the sign of the zero
//! the function produced there.

use super::{real, Real};

/// A sub-interval `[lo, hi]` whose endpoint values differ in sign bit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket<T> {
    /// Left end of the sub-interval.
    pub lo: T,
    /// Right end of the sub-interval.
    pub hi: T,
    /// Function value at `lo`.
    pub f_lo: T,
    /// Function value at `hi`.
    pub f_hi: T,
}

impl<T: Real> Bracket<T> {
    /// Midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> T {
        (self.lo + self.hi) / real(2.0)
    }

    /// Width `hi - lo`.
    #[must_use]
    pub fn width(&self) -> T {
        self.hi - self.lo
    }
}

/// A root accepted by bisection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root<T> {
    /// Parameter of the accepted midpoint.
    pub t: T,
    /// Function value at `t`; `|value| < tolerance`.
    pub value: T,
    /// Number of midpoints evaluated, including the accepted one.
    pub iterations: usize,
}

/// Returns `true` when `a` and `b` have different IEEE sign bits.
#[must_use]
pub fn sign_bits_differ<T: Real>(a: T, b: T) -> bool {
    a.is_sign_negative() != b.is_sign_negative()
}

/// Samples `f` on `samples + 1` uniform grid points over `[t0, t1]` and
/// returns every adjacent pair whose values differ in sign bit, left to
/// right.
///
/// Each grid point is evaluated exactly once. Roots that cancel out inside
/// one sub-interval (an even number of sign changes) are not reported.
#[must_use]
pub fn isolate_sign_changes<T, F>(mut f: F, t0: T, t1: T, samples: usize) -> Vec<Bracket<T>>
where
    T: Real,
    F: FnMut(T) -> T,
{
    #[allow(clippy::cast_precision_loss)]
    let h = (t1 - t0) / real::<T>(samples as f64);

    let mut brackets = Vec::new();
    let mut lo = t0;
    let mut f_lo = f(lo);

    for i in 1..=samples {
        // Pin the last grid point so accumulated rounding never skips t1.
        #[allow(clippy::cast_precision_loss)]
        let hi = if i == samples {
            t1
        } else {
            t0 + h * real::<T>(i as f64)
        };
        let f_hi = f(hi);

        if sign_bits_differ(f_lo, f_hi) {
            brackets.push(Bracket { lo, hi, f_lo, f_hi });
        }

        lo = hi;
        f_lo = f_hi;
    }

    brackets
}

/// Halving state for one bracket.
struct Bisector<T, F> {
    f: F,
    lo: T,
    f_lo: T,
    hi: T,
}

impl<T: Real, F: FnMut(T) -> T> Bisector<T, F> {
    fn new(f: F, bracket: Bracket<T>) -> Self {
        Self {
            f,
            lo: bracket.lo,
            f_lo: bracket.f_lo,
            hi: bracket.hi,
        }
    }

    /// Evaluates the midpoint and keeps the half that still changes sign.
    fn step(&mut self) -> (T, T) {
        let mid = (self.lo + self.hi) / real(2.0);
        let f_mid = (self.f)(mid);

        if sign_bits_differ(self.f_lo, f_mid) {
            self.hi = mid;
        } else {
            self.lo = mid;
            self.f_lo = f_mid;
        }

        (mid, f_mid)
    }
}

/// Bisects `bracket` until `|f(mid)| < tolerance`.
///
/// There is no iteration cap: if the tolerance cannot be reached (a
/// discontinuity, or a tolerance below what floating point can resolve
/// near the root) this never returns. Use [`bisect_bounded`] when that is
/// not acceptable.
#[must_use]
pub fn bisect<T, F>(f: F, bracket: Bracket<T>, tolerance: T) -> Root<T>
where
    T: Real,
    F: FnMut(T) -> T,
{
    let mut bisector = Bisector::new(f, bracket);
    let mut iterations = 0;
    loop {
        let (t, value) = bisector.step();
        iterations += 1;
        if value.abs() < tolerance {
            return Root {
                t,
                value,
                iterations,
            };
        }
    }
}

/// Like [`bisect`], but gives up after `max_iterations` midpoints and
/// returns `None`.
#[must_use]
pub fn bisect_bounded<T, F>(
    f: F,
    bracket: Bracket<T>,
    tolerance: T,
    max_iterations: usize,
) -> Option<Root<T>>
where
    T: Real,
    F: FnMut(T) -> T,
{
    let mut bisector = Bisector::new(f, bracket);
    (1..=max_iterations).find_map(|iterations| {
        let (t, value) = bisector.step();
        (value.abs() < tolerance).then_some(Root {
            t,
            value,
            iterations,
        })
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{PI, SQRT_2};

    #[test]
    fn sign_bits_distinguish_signed_zero() {
        assert!(sign_bits_differ(0.0, -0.0));
        assert!(sign_bits_differ(-1.0, 2.0));
        assert!(!sign_bits_differ(0.0, 1.0));
        assert!(!sign_bits_differ(-0.0, -3.0));
    }

    #[test]
    fn isolates_single_root() {
        let brackets = isolate_sign_changes(|x: f64| x * x - 2.0, 0.0, 2.0, 10);
        assert_eq!(brackets.len(), 1);
        let b = brackets[0];
        assert!(b.lo < SQRT_2 && SQRT_2 < b.hi);
        assert_abs_diff_eq!(b.width(), 0.2, epsilon = 1e-12);
    }

    #[test]
    fn isolates_roots_left_to_right() {
        let brackets = isolate_sign_changes(f64::sin, 0.5, 10.0, 10);
        assert_eq!(brackets.len(), 3);
        for (b, k) in brackets.iter().zip(1..) {
            let root = PI * f64::from(k);
            assert!(b.lo < root && root < b.hi, "bracket {b:?} misses {root}");
        }
    }

    #[test]
    fn evaluates_each_grid_point_once() {
        let mut calls = 0;
        let _ = isolate_sign_changes(
            |x: f64| {
                calls += 1;
                x
            },
            -1.0,
            1.0,
            10,
        );
        assert_eq!(calls, 11);
    }

    #[test]
    fn last_grid_point_is_t1() {
        let mut last = 0.0;
        let _ = isolate_sign_changes(
            |x: f64| {
                last = x;
                1.0
            },
            0.1,
            0.7,
            10,
        );
        assert!((last - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn constant_sign_has_no_brackets() {
        assert!(isolate_sign_changes(|x: f64| x * x + 1.0, -3.0, 3.0, 10).is_empty());
    }

    #[test]
    fn double_root_is_invisible() {
        let f = |x: f64| (x - 0.55).powi(2);
        assert!(isolate_sign_changes(f, 0.0, 1.0, 10).is_empty());
    }

    #[test]
    fn even_sign_changes_within_one_cell_are_invisible() {
        // Roots at 0.12 and 0.18 both sit inside [0.1, 0.2].
        let f = |x: f64| (x - 0.12) * (x - 0.18);
        assert!(isolate_sign_changes(f, 0.0, 1.0, 10).is_empty());
    }

    #[test]
    fn root_on_grid_point_follows_zero_sign() {
        // f(0) = +0.0: same sign bit as the right side, bracket on the left.
        let brackets = isolate_sign_changes(|x: f64| x, -1.0, 1.0, 2);
        assert_eq!(brackets.len(), 1);
        assert!((brackets[0].hi).abs() < f64::EPSILON);

        // f(0) = -0.0: same sign bit as the right side again.
        let brackets = isolate_sign_changes(|x: f64| -x, -1.0, 1.0, 2);
        assert_eq!(brackets.len(), 1);
        assert!((brackets[0].lo + 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn bisect_converges_to_sqrt2() {
        let f = |x: f64| x * x - 2.0;
        let bracket = isolate_sign_changes(f, 0.0, 2.0, 10)[0];
        let root = bisect(f, bracket, 1e-9);
        assert!(root.value.abs() < 1e-9);
        assert_abs_diff_eq!(root.t, SQRT_2, epsilon = 1e-9);
        assert!(root.iterations > 1);
    }

    #[test]
    fn bisect_handles_decreasing_function() {
        let f = |x: f64| 1.0 - x;
        let bracket = Bracket {
            lo: 0.0,
            hi: 3.0,
            f_lo: f(0.0),
            f_hi: f(3.0),
        };
        let root = bisect(f, bracket, 1e-12);
        assert_abs_diff_eq!(root.t, 1.0, epsilon = 1e-11);
    }

    #[test]
    fn bisect_accepts_first_midpoint() {
        let f = |x: f64| x - 0.5;
        let bracket = Bracket {
            lo: 0.0,
            hi: 1.0,
            f_lo: -0.5,
            f_hi: 0.5,
        };
        let root = bisect(f, bracket, 1e-6);
        assert_eq!(root.iterations, 1);
        assert!((root.t - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn bounded_bisection_matches_unbounded() {
        let f = |x: f64| x.cos();
        let bracket = isolate_sign_changes(f, 0.0, 3.0, 10)[0];
        let a = bisect(f, bracket, 1e-8);
        let b = bisect_bounded(f, bracket, 1e-8, 200).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn bounded_bisection_gives_up_on_jump() {
        // Sign change without a root: |f| never drops below 1.
        let f = |x: f64| if x < 0.3 { -1.0 } else { 1.0 };
        let bracket = isolate_sign_changes(f, 0.0, 1.0, 10)[0];
        assert!(bisect_bounded(f, bracket, 1e-6, 100).is_none());
    }

    #[test]
    fn bracket_midpoint() {
        let b = Bracket {
            lo: 1.0_f32,
            hi: 2.0,
            f_lo: -1.0,
            f_hi: 1.0,
        };
        assert!((b.midpoint() - 1.5).abs() < f32::EPSILON);
    }
}
