//! Phishing heuristics
//!
//! This module provides the rule framework and the fixed rule table used
//! to score URLs.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       RuleEngine                            │
//! │  - Walks the rule table in order                            │
//! │  - Never short-circuits                                     │
//! │  - Collects (rule, weight, reason) for every hit            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Rule Trait                           │
//! │  - id(): Stable identifier                                  │
//! │  - weight(): Fixed score contribution                       │
//! │  - evaluate(url): Reason text if the rule fires             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Rule Table
//!
//! | # | Rule                     | Weight |
//! |---|--------------------------|--------|
//! | 1 | `IpHostRule`             | 4      |
//! | 2 | `ShortenerRule`          | 3      |
//! | 3 | `AtSymbolRule`           | 3      |
//! | 4 | `LongUrlRule`            | 1      |
//! | 5 | `SuspiciousKeywordsRule` | 2      |
//! | 6 | `HostDigitsRule`         | 1      |
//! | 7 | `ManySubdomainsRule`     | 1      |
//! | 8 | `HyphenHostRule`         | 1      |
//!
//! The order is part of the output contract: reasons are reported in
//! table order.

mod base;
mod engine;

mod at_symbol;
mod host_digits;
mod hyphen;
mod ip_host;
mod keywords;
mod long_url;
mod shortener;
mod subdomains;

pub use at_symbol::AtSymbolRule;
pub use base::Rule;
pub use engine::RuleEngine;
pub use host_digits::{HostDigitsRule, MAX_HOST_DIGITS};
pub use hyphen::HyphenHostRule;
pub use ip_host::IpHostRule;
pub use keywords::{SuspiciousKeywordsRule, SUSPICIOUS_KEYWORDS};
pub use long_url::{LongUrlRule, MAX_URL_CHARS};
pub use shortener::{ShortenerRule, SHORTENER_FRAGMENTS};
pub use subdomains::ManySubdomainsRule;

static RULE_TABLE: [&dyn Rule; 8] = [
    &IpHostRule,
    &ShortenerRule,
    &AtSymbolRule,
    &LongUrlRule,
    &SuspiciousKeywordsRule,
    &HostDigitsRule,
    &ManySubdomainsRule,
    &HyphenHostRule,
];

/// The fixed, ordered rule table shared by every check
pub fn rule_table() -> &'static [&'static dyn Rule] {
    &RULE_TABLE
}
