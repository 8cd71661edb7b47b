//! Score aggregation, classification and confidence
//!
//! Turns the rule hits for one URL into a verdict.
//!
//! # Scoring Formula
//!
//! ```text
//! score      = Σ weight(fired rule)            (0..=16 with the default table)
//! label      = Phishing   if score >= threshold
//!              Legitimate otherwise
//! confidence = min(0.99, 0.20 + 0.18 × score)
//! ```
//!
//! # Threshold
//!
//! The threshold defaults to 4 and is inclusive on the Phishing side:
//! a score of 3 is Legitimate, 4 is Phishing. It is an empirically tuned
//! constant and can be overridden through configuration.
//!
//! # Confidence
//!
//! Confidence is a display heuristic, not a calibrated probability. It
//! starts at 0.20 for a clean URL and saturates at 0.99 from a score of
//! 5 upward.

mod scorer;

pub use scorer::{
    classify, confidence, total_score, Verdict, CONFIDENCE_BASE, CONFIDENCE_CAP,
    CONFIDENCE_PER_POINT, DEFAULT_THRESHOLD,
};
