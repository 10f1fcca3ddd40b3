use crate::domain::model::{Dataset, Record};
use crate::utils::error::{PredictorError, Result};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Numeric feature columns of the student-record dataset. These share names
/// with the exam marks (G1, G2, G3) but belong to an unrelated dataset; no
/// data flows from here into the evaluator.
pub const FEATURE_COLS: [&str; 7] = [
    "studytime",
    "failures",
    "absences",
    "Medu",
    "Fedu",
    "G1",
    "G2",
];

/// Final mark to predict.
pub const TARGET_COL: &str = "G3";

pub const DEFAULT_DATASET_PATH: &str = "data/student_dataset_10k.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transform {
    MedianImpute,
    StandardScale,
}

#[derive(Debug, Clone, Serialize)]
pub struct PipelineStep {
    pub name: &'static str,
    pub transform: Transform,
}

/// Preprocessing plan for the numeric features: an ordered list of named
/// steps plus the columns they apply to. Kept as plain inspectable data so
/// any processing backend can reconstruct it.
#[derive(Debug, Clone, Serialize)]
pub struct Preprocessor {
    pub steps: Vec<PipelineStep>,
    pub columns: Vec<String>,
}

/// Impute missing numeric values with the median, then standard-scale.
pub fn build_preprocessor() -> Preprocessor {
    Preprocessor {
        steps: vec![
            PipelineStep {
                name: "imputer",
                transform: Transform::MedianImpute,
            },
            PipelineStep {
                name: "scaler",
                transform: Transform::StandardScale,
            },
        ],
        columns: FEATURE_COLS.iter().map(|c| c.to_string()).collect(),
    }
}

/// Loads the student dataset, from `data/student_dataset_10k.csv` by default.
///
/// Fails with `DatasetNotFound` when the file is absent and with
/// `MissingColumns` when any required feature or target column is missing
/// from the header. No other schema validation is performed.
pub fn load_dataset(csv_path: Option<&Path>) -> Result<Dataset> {
    let path: PathBuf = csv_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_PATH));

    if !path.exists() {
        return Err(PredictorError::DatasetNotFound { path });
    }

    let mut reader = csv::Reader::from_path(&path)?;
    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let missing: Vec<String> = FEATURE_COLS
        .iter()
        .copied()
        .chain(std::iter::once(TARGET_COL))
        .filter(|required| !columns.iter().any(|header| header == required))
        .map(str::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(PredictorError::MissingColumns { columns: missing });
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut data = HashMap::new();
        for (column, field) in columns.iter().zip(row.iter()) {
            let value = match field.parse::<f64>() {
                Ok(n) => serde_json::Number::from_f64(n)
                    .map(Value::Number)
                    .unwrap_or_else(|| Value::String(field.to_string())),
                Err(_) => Value::String(field.to_string()),
            };
            data.insert(column.clone(), value);
        }
        records.push(Record { data });
    }

    tracing::debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(Dataset { columns, records })
}
