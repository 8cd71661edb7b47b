//! URL checking entry point
//!
//! Wires normalization, rule evaluation, scoring and the text reporter
//! together. [`check_url`] is the string-in/string-out surface: it always
//! returns one of
//!
//! - the guidance message for blank input,
//! - the five-line report,
//! - an `[ERROR] ...` line describing why the check could not run.
//!
//! Callers that want the typed outcome use [`Checker::evaluate`].

use crate::config::CheckerConfig;
use crate::models::Evaluation;
use crate::normalizer::NormalizedUrl;
use crate::reporters;
use crate::rules::RuleEngine;
use crate::scoring::{Verdict, DEFAULT_THRESHOLD};
use thiserror::Error;
use tracing::debug;

/// Message returned for empty or whitespace-only input
pub const EMPTY_INPUT_MESSAGE: &str = "Please provide a non-empty URL string.";

/// Prefix of every error line produced by [`check_url`]
pub const ERROR_PREFIX: &str = "[ERROR]";

/// Errors that can occur while checking a URL
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("{}", EMPTY_INPUT_MESSAGE)]
    InvalidInput,

    #[error("{0}")]
    MalformedUrl(String),

    #[error("{0}")]
    Internal(String),
}

pub type CheckResult<T> = Result<T, CheckError>;

/// Rule-based URL classifier
#[derive(Clone, Copy)]
pub struct Checker {
    engine: RuleEngine<'static>,
    threshold: u32,
}

impl Default for Checker {
    fn default() -> Self {
        Self {
            engine: RuleEngine::default(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl Checker {
    pub fn new(config: &CheckerConfig) -> Self {
        Self::default().with_threshold(config.threshold())
    }

    /// Override the Phishing threshold
    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Evaluate a URL and return the typed result
    pub fn evaluate(&self, url: &str) -> CheckResult<Evaluation> {
        let normalized = NormalizedUrl::parse(url)?;
        let hits = self.engine.evaluate(&normalized);
        let verdict = Verdict::from_hits(&hits, self.threshold);

        debug!(
            host = %normalized.host,
            score = verdict.score,
            label = %verdict.label,
            "URL evaluated"
        );

        Ok(Evaluation {
            url: url.to_string(),
            label: verdict.label,
            score: verdict.score,
            confidence: verdict.confidence,
            threshold: self.threshold,
            reasons: hits,
        })
    }

    /// Evaluate a URL and render the outcome as a string. Never fails.
    pub fn check(&self, url: &str) -> String {
        match self.evaluate(url) {
            Ok(evaluation) => reporters::render_text(&evaluation),
            Err(e) => render_failure(&e),
        }
    }
}

/// User-facing text for a check that produced no evaluation
pub fn render_failure(err: &CheckError) -> String {
    match err {
        CheckError::InvalidInput => EMPTY_INPUT_MESSAGE.to_string(),
        other => format!("{ERROR_PREFIX} Exception during check: {other}"),
    }
}

/// Classify a URL with the default threshold and return the explanation
pub fn check_url(url: &str) -> String {
    Checker::default().check(url)
}
