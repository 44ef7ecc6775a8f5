pub mod curve;

pub use curve::{Circle, Curve, CurveDomain, Ellipse, Limacon, Line, ParametricCurve};
