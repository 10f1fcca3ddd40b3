pub mod advisor;
pub mod evaluator;
pub mod preprocess;

pub use crate::domain::model::{Dataset, EvaluationResult, Marks, Record, Status};
pub use crate::utils::error::Result;
