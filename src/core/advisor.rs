use crate::core::evaluator::{MIN_PASS_AVERAGE, MIN_SUBJECT_MARK};
use crate::domain::model::{Marks, Status};

/// A passing average below this still earns a "can be better" tip.
pub const COMFORTABLE_AVERAGE: f64 = 60.0;

/// Builds an ordered, never-empty list of improvement tips from the marks
/// and the verdict the evaluator produced for them.
pub fn build_suggestions(marks: &Marks, status: Status, average: f64) -> Vec<String> {
    let mut suggestions = Vec::new();

    let labeled = marks.labeled();
    // Strict less-than keeps the first minimal subject on ties.
    let mut weakest = labeled[0];
    for pair in &labeled[1..] {
        if pair.1 < weakest.1 {
            weakest = *pair;
        }
    }
    let (weakest_subject, weakest_mark) = weakest;

    match status {
        Status::Fail => {
            suggestions.push(format!(
                "**{}** is your weakest area (**{:.1}**). \
                 Allocate extra daily revision time to this subject.",
                weakest_subject, weakest_mark
            ));
            for (subject, mark) in labeled {
                if mark < MIN_SUBJECT_MARK {
                    suggestions.push(format!(
                        "{} is below the minimum pass mark. \
                         Redo core topics and solve at least 5–10 practice questions per day.",
                        subject
                    ));
                }
            }
            if average < MIN_PASS_AVERAGE {
                suggestions.push(
                    "Your **overall average is low**. Create a realistic daily study plan \
                     with fixed time blocks for each subject (e.g., 1–2 hours per subject)."
                        .to_string(),
                );
            }
            suggestions.push(
                "After revising, take short timed mock tests and track your improvement."
                    .to_string(),
            );
        }
        Status::Pass => {
            if average < COMFORTABLE_AVERAGE {
                suggestions.push(format!(
                    "You passed, but your average (**{:.1}**) can be better. \
                     Focus on **{}** to boost your overall score.",
                    average, weakest_subject
                ));
            } else {
                suggestions.push(format!(
                    "Solid performance with an average of **{:.1}**. \
                     Maintain your current study routine and keep revising regularly.",
                    average
                ));
            }
            suggestions.push(
                "Use previous-year question papers and timed practice sessions to \
                 strengthen exam performance."
                    .to_string(),
            );
        }
    }

    suggestions
}
