//! JSON reporter
//!
//! Outputs the full Evaluation as pretty-printed JSON.
//! Useful for machine consumption, piping to jq, or further processing.

use crate::models::Evaluation;
use anyhow::Result;

/// Render evaluation as JSON
pub fn render(evaluation: &Evaluation) -> Result<String> {
    Ok(serde_json::to_string_pretty(evaluation)?)
}
