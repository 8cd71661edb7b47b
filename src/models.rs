//! Core data models for phishcheck
//!
//! These models carry the result of a single URL check from the rule
//! engine through scoring and into the reporters.

use serde::{Deserialize, Serialize};

/// Binary classification of a checked URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Label {
    #[default]
    Legitimate,
    Phishing,
}

impl Label {
    pub fn is_phishing(&self) -> bool {
        matches!(self, Label::Phishing)
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Legitimate => write!(f, "Legitimate"),
            Label::Phishing => write!(f, "Phishing"),
        }
    }
}

/// A rule that fired against a URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleHit {
    /// Stable rule identifier (e.g. "ip-host")
    pub rule: String,
    /// Weight the rule adds to the score
    pub weight: u32,
    /// Human-readable reason, may embed rule-specific detail
    pub reason: String,
}

/// Full outcome of checking one URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// The input exactly as the caller supplied it
    pub url: String,
    pub label: Label,
    pub score: u32,
    /// Display-only confidence proxy in [0.20, 0.99]
    pub confidence: f64,
    /// Threshold the score was compared against
    pub threshold: u32,
    /// Fired rules in evaluation order
    pub reasons: Vec<RuleHit>,
}

impl Evaluation {
    /// Reason texts in rule order (empty if nothing fired)
    pub fn reason_texts(&self) -> Vec<&str> {
        self.reasons.iter().map(|h| h.reason.as_str()).collect()
    }
}
