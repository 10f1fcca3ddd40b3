use crate::domain::model::{EvaluationResult, Marks, Status};

/// A subject mark below this threshold fails the attempt on its own.
pub const MIN_SUBJECT_MARK: f64 = 35.0;

/// An average below this threshold fails the attempt even when every
/// subject clears the per-subject minimum.
pub const MIN_PASS_AVERAGE: f64 = 40.0;

/// Rule-based verdict over three subject marks: Fail if any subject is
/// below 35 or the average is below 40, else Pass.
///
/// Accepts any numeric input; range constraints belong to the input
/// surface, not to this function. Reasons are collected in fixed order:
/// subject 1, subject 2, subject 3, then the average.
pub fn evaluate(marks: &Marks) -> EvaluationResult {
    let total = marks.g1 + marks.g2 + marks.g3;
    let average = total / 3.0;

    let mut reasons = Vec::new();
    for (subject, mark) in marks.labeled() {
        if mark < MIN_SUBJECT_MARK {
            reasons.push(format!("{} mark is below 35.", subject));
        }
    }
    if average < MIN_PASS_AVERAGE {
        reasons.push("Overall average is below 40.".to_string());
    }

    let status = if reasons.is_empty() {
        Status::Pass
    } else {
        Status::Fail
    };

    EvaluationResult {
        status,
        average,
        total,
        reasons,
    }
}
