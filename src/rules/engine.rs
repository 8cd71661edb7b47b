//! Rule execution engine
//!
//! Runs every rule of a table, in table order, against one URL and
//! collects the ones that fire. There is no early exit: a rule firing
//! never suppresses another, so the hits are always a subsequence of
//! the table.

use crate::models::RuleHit;
use crate::normalizer::NormalizedUrl;
use crate::rules::base::Rule;
use crate::rules::rule_table;
use tracing::{debug, trace};

/// Evaluates an ordered rule table against normalized URLs
#[derive(Clone, Copy)]
pub struct RuleEngine<'a> {
    rules: &'a [&'a dyn Rule],
}

impl Default for RuleEngine<'static> {
    fn default() -> Self {
        Self::new(rule_table())
    }
}

impl<'a> RuleEngine<'a> {
    /// Create an engine over an explicit rule table
    pub fn new(rules: &'a [&'a dyn Rule]) -> Self {
        Self { rules }
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &'a [&'a dyn Rule] {
        self.rules
    }

    /// Highest score the table can produce (every rule firing)
    pub fn max_score(&self) -> u32 {
        self.rules.iter().map(|r| r.weight()).sum()
    }

    /// Run all rules and return the hits in table order
    pub fn evaluate(&self, url: &NormalizedUrl) -> Vec<RuleHit> {
        let mut hits = Vec::new();
        for rule in self.rules {
            match rule.evaluate(url) {
                Some(reason) => {
                    debug!(rule = rule.id(), weight = rule.weight(), %reason, "rule fired");
                    hits.push(RuleHit {
                        rule: rule.id().to_string(),
                        weight: rule.weight(),
                        reason,
                    });
                }
                None => trace!(rule = rule.id(), "rule did not fire"),
            }
        }
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysRule;

    impl Rule for AlwaysRule {
        fn id(&self) -> &'static str {
            "always"
        }
        fn description(&self) -> &'static str {
            "Always fires"
        }
        fn weight(&self) -> u32 {
            2
        }
        fn evaluate(&self, _url: &NormalizedUrl) -> Option<String> {
            Some("always".to_string())
        }
    }

    struct NeverRule;

    impl Rule for NeverRule {
        fn id(&self) -> &'static str {
            "never"
        }
        fn description(&self) -> &'static str {
            "Never fires"
        }
        fn weight(&self) -> u32 {
            5
        }
        fn evaluate(&self, _url: &NormalizedUrl) -> Option<String> {
            None
        }
    }

    fn parse(raw: &str) -> NormalizedUrl {
        NormalizedUrl::parse(raw).unwrap()
    }

    #[test]
    fn test_custom_table() {
        let table: [&dyn Rule; 3] = [&NeverRule, &AlwaysRule, &AlwaysRule];
        let engine = RuleEngine::new(&table);
        let hits = engine.evaluate(&parse("example.com"));
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|h| h.rule == "always" && h.weight == 2));
        assert_eq!(engine.max_score(), 9);
    }

    #[test]
    fn test_default_table_max_score() {
        assert_eq!(RuleEngine::default().max_score(), 16);
    }

    #[test]
    fn test_hits_follow_table_order() {
        let engine = RuleEngine::default();
        let hits = engine.evaluate(&parse("http://192.168.1.1/login"));
        let ids: Vec<&str> = hits.iter().map(|h| h.rule.as_str()).collect();
        assert_eq!(ids, vec!["ip-host", "suspicious-keywords", "host-digits", "many-subdomains"]);
    }

    #[test]
    fn test_no_hits() {
        let engine = RuleEngine::default();
        assert!(engine.evaluate(&parse("https://www.wikipedia.org")).is_empty());
    }
}
