use std::fmt;
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Sub, SubAssign};

use nalgebra::SVector;

use super::Real;

/// Builds a [`Vector`](crate::math::Vector) from explicit components.
///
/// The dimension is the number of arguments.
///
/// ```
/// let v = curveproj::vector![1.0, 2.0, 3.0];
/// assert_eq!(v[2], 3.0);
/// ```
#[macro_export]
macro_rules! vector {
    ($($component:expr),+ $(,)?) => {
        $crate::math::Vector::new([$($component),+])
    };
}

/// A fixed-dimension value vector of `N` floating-point components.
///
/// Binary operators return new values and leave their operands untouched.
/// `*` between two vectors is the dot product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<T, const N: usize>(SVector<T, N>);

impl<T: Real, const N: usize> Vector<T, N> {
    /// Creates a vector from an array of components.
    #[must_use]
    pub fn new(components: [T; N]) -> Self {
        Self(SVector::from(components))
    }

    /// Returns the zero vector.
    #[must_use]
    pub fn zeros() -> Self {
        Self(SVector::zeros())
    }

    /// Dot product, same as `self * other`.
    #[must_use]
    pub fn dot(&self, other: &Self) -> T {
        self.0.dot(&other.0)
    }

    /// Euclidean length.
    #[must_use]
    pub fn norm(&self) -> T {
        self.0.norm()
    }

    /// Returns the components as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.0.as_slice()
    }
}

impl<T: Real, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(components: [T; N]) -> Self {
        Self::new(components)
    }
}

impl<T: Real, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self {
        v.0.into()
    }
}

impl<T: Real, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.0[i]
    }
}

impl<T: Real, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.0[i]
    }
}

impl<T: Real, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<T: Real, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<T: Real, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T: Real, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<T: Real, const N: usize> Mul for Vector<T, N> {
    type Output = T;

    fn mul(self, rhs: Self) -> T {
        self.dot(&rhs)
    }
}

impl<T: Real, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self(self.0 / rhs)
    }
}

/// Renders as `(v0, v1, ..., vN-1)`, forwarding any precision to each
/// component (`{:.2}` prints two decimals).
impl<T: Real, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match f.precision() {
                Some(p) => write!(f, "{c:.p$}")?,
                None => write!(f, "{c}")?,
            }
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn macro_builds_from_components() {
        let v = crate::vector![1.0, -2.0, 0.5];
        assert_eq!(v, Vector::new([1.0, -2.0, 0.5]));
    }

    #[test]
    fn add_and_sub_leave_operands_untouched() {
        let a = Vector::new([1.0, 2.0]);
        let b = Vector::new([0.5, -1.0]);
        assert_eq!(a + b, Vector::new([1.5, 1.0]));
        assert_eq!(a - b, Vector::new([0.5, 3.0]));
        assert_eq!(a, Vector::new([1.0, 2.0]));
        assert_eq!(b, Vector::new([0.5, -1.0]));
    }

    #[test]
    fn compound_assign_updates_in_place() {
        let mut v = Vector::new([1.0, 1.0, 1.0]);
        v += Vector::new([1.0, 2.0, 3.0]);
        assert_eq!(v, Vector::new([2.0, 3.0, 4.0]));
        v -= Vector::new([2.0, 2.0, 2.0]);
        assert_eq!(v, Vector::new([0.0, 1.0, 2.0]));
    }

    #[test]
    fn mul_is_dot_product() {
        let a = Vector::new([1.0, 2.0, 3.0]);
        let b = Vector::new([4.0, -5.0, 6.0]);
        assert_relative_eq!(a * b, 12.0);
        assert_relative_eq!(a.dot(&b), 12.0);
    }

    #[test]
    fn div_by_scalar() {
        let v = Vector::new([2.0_f32, -4.0]) / 2.0;
        assert_eq!(v, Vector::new([1.0, -2.0]));
    }

    #[test]
    fn index_read_write() {
        let mut v = Vector::new([0.0_f64, 0.0]);
        v[1] = 3.0;
        assert!((v[0]).abs() < f64::EPSILON);
        assert!((v[1] - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    #[should_panic(expected = "Matrix index out of bounds")]
    fn index_out_of_range_panics() {
        let v = Vector::new([1.0, 2.0]);
        let _ = v[2];
    }

    #[test]
    fn norm_of_3_4() {
        assert_relative_eq!(Vector::new([3.0, 4.0]).norm(), 5.0);
    }

    #[test]
    fn display_default_and_precision() {
        let v = Vector::new([1.0, -0.5]);
        assert_eq!(v.to_string(), "(1, -0.5)");
        assert_eq!(format!("{v:.2}"), "(1.00, -0.50)");
    }

    #[test]
    fn display_single_component() {
        assert_eq!(Vector::new([2.5]).to_string(), "(2.5)");
    }

    #[test]
    fn array_round_trip() {
        let arr: [f64; 3] = Vector::new([1.0, 2.0, 3.0]).into();
        assert_eq!(arr, [1.0, 2.0, 3.0]);
    }
}
