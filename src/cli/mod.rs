//! CLI command definitions and handlers

mod check;
mod rules;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// phishcheck - rule-based phishing URL classifier
///
/// 100% LOCAL - No network lookups. URLs never leave your machine.
#[derive(Parser, Debug)]
#[command(name = "phishcheck")]
#[command(
    version,
    about = "Classify URLs as Phishing or Legitimate with a transparent, weighted rule set",
    args_conflicts_with_subcommands = true,
    after_help = "\
Examples:
  phishcheck http://192.168.1.1/login            Check one URL
  phishcheck --file urls.txt                     Check every line of a file
  phishcheck example.com --format json           JSON output for scripting
  phishcheck --threshold 3 http://bit.ly/x       Stricter classification
  phishcheck --file urls.txt --fail-on-phishing  Exit code 1 if any URL is Phishing
  phishcheck rules                               List the rule table
  phishcheck -- rules                            Check a URL literally named \"rules\"

With several URLs, --format json prints one JSON array in input order."
)]
pub struct Cli {
    /// URLs to check
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,

    /// Read additional URLs from a file, one per line
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,

    /// Output format: text, json
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Score at or above which a URL is Phishing (default: 4)
    #[arg(long)]
    pub threshold: Option<u32>,

    /// Config file (default: phishcheck.toml in the current directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Exit with code 1 if any URL is classified as Phishing
    #[arg(long)]
    pub fail_on_phishing: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the rules in evaluation order with their weights
    Rules,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Rules) => rules::run(),
        None => check::run(check::CheckArgs {
            urls: cli.urls,
            file: cli.file,
            format: &cli.format,
            threshold: cli.threshold,
            config: cli.config,
            fail_on_phishing: cli.fail_on_phishing,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_urls_and_flags() {
        let cli = Cli::try_parse_from([
            "phishcheck",
            "example.com",
            "http://bit.ly/x",
            "--format",
            "json",
            "--threshold",
            "3",
            "--fail-on-phishing",
        ])
        .unwrap();
        assert_eq!(cli.urls, vec!["example.com", "http://bit.ly/x"]);
        assert_eq!(cli.format, "json");
        assert_eq!(cli.threshold, Some(3));
        assert!(cli.fail_on_phishing);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_rules_subcommand() {
        let cli = Cli::try_parse_from(["phishcheck", "rules"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Rules)));
    }

    #[test]
    fn test_escaped_subcommand_name_is_a_url() {
        let cli = Cli::try_parse_from(["phishcheck", "--", "rules"]).unwrap();
        assert_eq!(cli.urls, vec!["rules"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["phishcheck", "a.com", "--format", "sarif"]).is_err());
    }

    #[test]
    fn test_rejects_negative_threshold() {
        assert!(Cli::try_parse_from(["phishcheck", "a.com", "--threshold", "-1"]).is_err());
    }
}
