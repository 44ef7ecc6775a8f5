pub mod roots;
mod vector;

pub use vector::Vector;

use std::fmt;

/// Floating-point scalar usable as a curve coordinate and parameter.
///
/// Implemented for every `nalgebra::RealField` that is `Copy`, which in
/// practice means `f32` and `f64`.
pub trait Real: nalgebra::RealField + Copy + fmt::Display {}

impl<T: nalgebra::RealField + Copy + fmt::Display> Real for T {}

/// 2D vector type.
pub type Vector2 = Vector<f64, 2>;

/// Default residual tolerance `|e(t)|` accepted by bisection.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default number of uniform sub-intervals used to isolate sign changes.
pub const DEFAULT_SAMPLES: usize = 10;

/// Default step of the central-difference derivative.
pub const DEFAULT_DERIVATIVE_STEP: f64 = 1e-5;

/// Global geometric tolerance for validating curve parameters.
pub const TOLERANCE: f64 = 1e-10;

/// Converts an `f64` constant into the scalar type `T`.
#[must_use]
pub fn real<T: Real>(value: f64) -> T {
    nalgebra::convert(value)
}
