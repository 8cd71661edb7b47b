//! Verdict computation

use crate::models::{Label, RuleHit};

/// Inclusive lower bound of the Phishing class
pub const DEFAULT_THRESHOLD: u32 = 4;

/// Confidence reported for a score of zero
pub const CONFIDENCE_BASE: f64 = 0.20;
/// Confidence added per score point
pub const CONFIDENCE_PER_POINT: f64 = 0.18;
/// Upper bound of the confidence proxy
pub const CONFIDENCE_CAP: f64 = 0.99;

/// Sum of the weights of every fired rule
pub fn total_score(hits: &[RuleHit]) -> u32 {
    hits.iter().map(|h| h.weight).sum()
}

/// Threshold a score into a label
pub fn classify(score: u32, threshold: u32) -> Label {
    if score >= threshold {
        Label::Phishing
    } else {
        Label::Legitimate
    }
}

/// Capped linear confidence proxy
pub fn confidence(score: u32) -> f64 {
    (CONFIDENCE_BASE + CONFIDENCE_PER_POINT * f64::from(score)).min(CONFIDENCE_CAP)
}

/// Aggregated outcome of a set of rule hits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    pub score: u32,
    pub label: Label,
    pub confidence: f64,
}

impl Verdict {
    pub fn from_hits(hits: &[RuleHit], threshold: u32) -> Self {
        let score = total_score(hits);
        Self {
            score,
            label: classify(score, threshold),
            confidence: confidence(score),
        }
    }
}
