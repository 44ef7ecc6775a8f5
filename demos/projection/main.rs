//! Projects a few sample points onto sample curves and prints the results.
//!
//! Usage:
//! ```text
//! cargo run --example projection
//! RUST_LOG=curveproj=trace cargo run --example projection
//! ```

use std::f64::consts::PI;

use curveproj::geometry::curve::{component, Circle, Curve, Ellipse, Limacon, ParametricCurve};
use curveproj::math::Vector2;
use curveproj::operations::query::ProjectPointOnCurve;
use curveproj::vector;

fn main() -> curveproj::Result<()> {
    // Default: WARN for everything, INFO for curveproj.
    // Override with RUST_LOG env var (e.g. RUST_LOG=curveproj=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("curveproj=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let circle = Circle::new(vector![0.0, 0.0], 2.0)?;
    let ellipse = Ellipse::new(vector![0.0, 0.0], 3.0, 2.0)?;
    let line = ParametricCurve::new([
        component(|t: f64| 3.0 + 2.0 * t),
        component(|t: f64| 2.0 - 0.5 * t),
    ])
    .with_domain(0.0, 1.0);
    let limacon = Limacon::new(3.0, 1.0)?;

    report("circle", &circle, vector![1.0, 1.0], (-PI, PI))?;
    report("ellipse", &ellipse, vector![1.0, 1.0], (-PI, PI))?;
    report("line", &line, vector![1.0, 1.0], (0.0, 1.0))?;
    report("line", &line, vector![3.5, 1.0], (0.0, 1.0))?;
    report("limacon", &limacon, vector![2.0, 2.0], (-PI, PI))?;

    Ok(())
}

fn report<C>(name: &str, curve: &C, point: Vector2, (t0, t1): (f64, f64)) -> curveproj::Result<()>
where
    C: Curve<f64, 2>,
{
    let projections = ProjectPointOnCurve::new(point)
        .with_range(t0, t1)
        .execute(curve)?;

    println!("Projection(s) of point {point} to {name}:");
    if projections.is_empty() {
        println!("\tno solution");
    } else {
        for projection in &projections {
            println!("\t{:.6}", projection.point);
        }
    }
    println!();

    Ok(())
}
