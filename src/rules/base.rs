//! Base rule trait
//!
//! Every heuristic is a [`Rule`]: a fixed-weight predicate over a
//! [`NormalizedUrl`] that explains itself when it fires.

use crate::normalizer::NormalizedUrl;

/// Trait for all URL heuristics
///
/// Rules are independent. A rule never looks at the outcome of another
/// rule, and the engine never stops early, so every rule sees the same
/// input.
///
/// # Example Implementation
///
/// ```ignore
/// pub struct MyRule;
///
/// impl Rule for MyRule {
///     fn id(&self) -> &'static str { "my-rule" }
///     fn description(&self) -> &'static str { "Flags something odd" }
///     fn weight(&self) -> u32 { 1 }
///
///     fn evaluate(&self, url: &NormalizedUrl) -> Option<String> {
///         url.host.ends_with(".zip").then(|| "Odd TLD".to_string())
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Stable identifier, used in JSON output and rule listings
    fn id(&self) -> &'static str;

    /// Human-readable description of what the rule looks for
    fn description(&self) -> &'static str;

    /// Score contribution when the rule fires
    fn weight(&self) -> u32;

    /// Check the URL, returning the reason text if the rule fires
    fn evaluate(&self, url: &NormalizedUrl) -> Option<String>;
}

/// Case-sensitive substring search over already-lowercased text
pub(crate) fn contains(haystack: &str, needle: &str) -> bool {
    memchr::memmem::find(haystack.as_bytes(), needle.as_bytes()).is_some()
}
