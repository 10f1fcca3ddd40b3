use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Pass,
    Fail,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Pass => write!(f, "Pass"),
            Status::Fail => write!(f, "Fail"),
        }
    }
}

/// Verdict for one evaluation. Recomputed on every invocation, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub status: Status,
    pub average: f64,
    pub total: f64,
    pub reasons: Vec<String>,
}

/// The three subject marks of a single exam attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marks {
    pub g1: f64,
    pub g2: f64,
    pub g3: f64,
}

impl Marks {
    pub fn new(g1: f64, g2: f64, g3: f64) -> Self {
        Self { g1, g2, g3 }
    }

    /// Labeled marks in declaration order. Minimum-search over this slice
    /// keeps the first minimal subject, which fixes the weakest-subject
    /// tie-break to the lowest-numbered subject.
    pub fn labeled(&self) -> [(&'static str, f64); 3] {
        [
            ("Subject 1", self.g1),
            ("Subject 2", self.g2),
            ("Subject 3", self.g3),
        ]
    }
}

/// One dataset row, keyed by column name. Numeric fields are parsed into
/// JSON numbers, everything else stays as text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub data: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}
