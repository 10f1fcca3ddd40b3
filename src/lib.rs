pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::advisor::build_suggestions;
pub use core::evaluator::evaluate;
pub use core::preprocess::{
    build_preprocessor, load_dataset, Preprocessor, FEATURE_COLS, TARGET_COL,
};
pub use domain::model::{Dataset, EvaluationResult, Marks, Record, Status};
pub use utils::error::{PredictorError, Result};
