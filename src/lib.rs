//! phishcheck - rule-based phishing URL classifier
//!
//! A small, deterministic heuristic that labels a URL as Phishing or
//! Legitimate and explains why. No network access, no trained model:
//! eight fixed, weighted rules, a score threshold and a readable report.
//!
//! ```
//! let report = phishcheck::check_url("http://bit.ly/2abcde");
//! assert!(report.contains("Classification: Legitimate"));
//! assert!(report.contains("Reasons: Shortening service"));
//! ```

pub mod checker;
pub mod config;
pub mod models;
pub mod normalizer;
pub mod reporters;
pub mod rules;
pub mod scoring;

pub use checker::{check_url, CheckError, Checker, EMPTY_INPUT_MESSAGE};
pub use config::CheckerConfig;
pub use models::{Evaluation, Label, RuleHit};
