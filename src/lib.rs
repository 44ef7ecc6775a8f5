//! Orthogonal projection of points onto parametric curves in N dimensions.
//!
//! The solver samples the perpendicularity error `e(t) = (p - c(t)) . c'(t)`
//! on a fixed grid, isolates sign changes and bisects each one down to a
//! residual tolerance.
//!
//! ```
//! use curveproj::geometry::Circle;
//! use curveproj::operations::query::ProjectPointOnCurve;
//! use curveproj::vector;
//!
//! let circle = Circle::new(vector![0.0, 0.0], 2.0)?;
//! let projections = ProjectPointOnCurve::new(vector![1.0, 1.0]).execute(&circle)?;
//! assert_eq!(projections.len(), 2);
//! # Ok::<(), curveproj::ProjectionError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{ProjectionError, Result};
