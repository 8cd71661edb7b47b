//! Text reporter
//!
//! The canonical explanation. Five lines, no trailing newline, no
//! color codes: this text is the checker's observable output and must
//! be byte-stable for identical input.

use crate::models::Evaluation;

/// Reasons line when no rule fired
pub const NO_REASONS: &str = "none detected";

/// Render an evaluation as the five-line explanation
pub fn render(evaluation: &Evaluation) -> String {
    let reasons = if evaluation.reasons.is_empty() {
        NO_REASONS.to_string()
    } else {
        evaluation.reason_texts().join(", ")
    };

    format!(
        "URL: {}\nClassification: {}\nScore: {}\nConfidence (approx): {:.2}\nReasons: {}",
        evaluation.url, evaluation.label, evaluation.score, evaluation.confidence, reasons
    )
}
