use thiserror::Error;

/// Top-level error type for curve projection.
#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised while building or evaluating curves.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,

    #[error("curve domain is unbounded; an explicit search range is required")]
    UnboundedDomain,
}

/// Errors raised by projection queries.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Bisection of an isolated bracket hit the configured iteration cap.
    ///
    /// Distinct from an empty result, which means no sign change was found.
    #[error("bracket {bracket} did not converge within {iterations} iterations")]
    DidNotConverge { bracket: usize, iterations: usize },
}

/// Convenience type alias for results using [`ProjectionError`].
pub type Result<T> = std::result::Result<T, ProjectionError>;
