//! Output reporters for phishcheck results
//!
//! Supports two output formats:
//! - `text` - The canonical five-line explanation
//! - `json` - Machine-readable JSON of the same evaluation

mod json;
mod text;

pub use text::{render as render_text, NO_REASONS};

use crate::models::Evaluation;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render an evaluation using an OutputFormat enum
pub fn report_with_format(evaluation: &Evaluation, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render(evaluation)),
        OutputFormat::Json => json::render(evaluation),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{Label, RuleHit};

    /// Evaluation for `https://secure-paypal.com/verify`
    pub(crate) fn test_evaluation() -> Evaluation {
        Evaluation {
            url: "https://secure-paypal.com/verify".into(),
            label: Label::Legitimate,
            score: 3,
            confidence: 0.74,
            threshold: 4,
            reasons: vec![
                RuleHit {
                    rule: "suspicious-keywords".into(),
                    weight: 2,
                    reason: "Suspicious keywords: paypal, secure, verify".into(),
                },
                RuleHit {
                    rule: "hyphen-host".into(),
                    weight: 1,
                    reason: "Hyphen in domain".into(),
                },
            ],
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("sarif").is_err());
    }

    #[test]
    fn test_report_dispatch() {
        let evaluation = test_evaluation();
        let text = report_with_format(&evaluation, OutputFormat::Text).unwrap();
        assert!(text.starts_with("URL: https://secure-paypal.com/verify\n"));
        let json = report_with_format(&evaluation, OutputFormat::Json).unwrap();
        assert!(json.starts_with('{'));
    }
}
