mod project_point;

pub use project_point::{
    closest, perpendicularity_error, project_point, ProjectPointOnCurve, Projection,
    ProjectionConfig,
};
