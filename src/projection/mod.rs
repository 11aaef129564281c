//! Year-by-year compound and simple interest projection

mod engine;
mod points;

pub use engine::{project, round_amount, ProjectionEngine};
pub use points::{ProjectionPoint, ProjectionResult, MaturitySummary};
