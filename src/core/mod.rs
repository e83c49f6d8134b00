mod engine;
mod types;

pub use engine::project;
pub use types::{
    ProjectionParams, ProjectionResult, ProjectionSummary, ValidationError, YearRecord,
};
