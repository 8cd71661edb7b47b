//! `phishcheck rules` - print the rule table

use anyhow::Result;
use phishcheck::rules::{rule_table, RuleEngine};
use phishcheck::scoring::DEFAULT_THRESHOLD;

pub(super) fn run() -> Result<()> {
    print!("{}", render());
    Ok(())
}

fn render() -> String {
    let mut out = String::new();
    out.push_str(&format!("  #  {:<21} {:>6}  DESCRIPTION\n", "RULE", "WEIGHT"));
    for (i, rule) in rule_table().iter().enumerate() {
        out.push_str(&format!(
            "  {}  {:<21} {:>6}  {}\n",
            i + 1,
            rule.id(),
            rule.weight(),
            rule.description()
        ));
    }
    out.push_str(&format!(
        "\nMax score: {}  Default threshold: {}\n",
        RuleEngine::default().max_score(),
        DEFAULT_THRESHOLD
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lists_every_rule_in_order() {
        let out = render();
        let ip = out.find("ip-host").unwrap();
        let hyphen = out.find("hyphen-host").unwrap();
        assert!(ip < hyphen);
        for rule in rule_table() {
            assert!(out.contains(rule.id()), "missing {}", rule.id());
        }
        assert_eq!(out.lines().count(), 11);
        assert!(out.contains("Max score: 16  Default threshold: 4"));
    }
}
