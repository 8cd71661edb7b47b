//! Default command - check URLs and print their reports

use anyhow::{bail, Context, Result};
use phishcheck::checker::{render_failure, CheckResult};
use phishcheck::reporters::{report_with_format, OutputFormat};
use phishcheck::{Checker, CheckerConfig, Evaluation};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

pub(super) struct CheckArgs<'a> {
    pub urls: Vec<String>,
    pub file: Option<PathBuf>,
    pub format: &'a str,
    pub threshold: Option<u32>,
    pub config: Option<PathBuf>,
    pub fail_on_phishing: bool,
}

pub(super) fn run(args: CheckArgs<'_>) -> Result<()> {
    let format = OutputFormat::from_str(args.format)?;
    let checker = build_checker(args.threshold, args.config.as_deref())?;

    let mut urls = args.urls;
    if let Some(path) = &args.file {
        urls.extend(read_url_file(path)?);
    }
    if urls.is_empty() {
        bail!("No URLs given. Pass URLs as arguments or use --file <PATH>.");
    }

    info!(
        "Checking {} URL(s) with threshold {}",
        urls.len(),
        checker.threshold()
    );

    // Each check is independent; collect() keeps input order
    let results: Vec<CheckResult<Evaluation>> =
        urls.par_iter().map(|url| checker.evaluate(url)).collect();

    println!("{}", render_batch(&urls, &results, format)?);

    let phishing = results
        .iter()
        .filter(|r| matches!(r, Ok(e) if e.label.is_phishing()))
        .count();
    info!("{} of {} URL(s) classified as Phishing", phishing, urls.len());

    if args.fail_on_phishing && phishing > 0 {
        eprintln!(
            "Failing due to --fail-on-phishing: {} URL(s) classified as Phishing",
            phishing
        );
        std::process::exit(1);
    }
    Ok(())
}

/// Load layered config and apply the CLI threshold override
fn build_checker(threshold: Option<u32>, explicit: Option<&Path>) -> Result<Checker> {
    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    let config = CheckerConfig::load(&cwd, explicit).context("Failed to load configuration")?;
    let checker = Checker::new(&config);
    Ok(match threshold {
        Some(t) => checker.with_threshold(t),
        None => checker,
    })
}

/// Read URLs from a file, one per line, skipping blank lines
fn read_url_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read URL file {}", path.display()))?;
    let urls: Vec<String> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect();
    debug!("Read {} URL(s) from {}", urls.len(), path.display());
    Ok(urls)
}

/// Render all outcomes as one output document.
///
/// Text reports are separated by a blank line. JSON is a single object for
/// one URL and an array in input order for several.
fn render_batch(
    urls: &[String],
    results: &[CheckResult<Evaluation>],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(results
            .iter()
            .map(|result| match result {
                Ok(evaluation) => report_with_format(evaluation, format),
                Err(e) => Ok(render_failure(e)),
            })
            .collect::<Result<Vec<_>>>()?
            .join("\n\n")),
        OutputFormat::Json => {
            let mut values = urls
                .iter()
                .zip(results)
                .map(|(url, result)| json_outcome(url, result))
                .collect::<Result<Vec<_>>>()?;
            let document = if values.len() == 1 {
                values.remove(0)
            } else {
                serde_json::Value::Array(values)
            };
            Ok(serde_json::to_string_pretty(&document)?)
        }
    }
}

fn json_outcome(url: &str, result: &CheckResult<Evaluation>) -> Result<serde_json::Value> {
    Ok(match result {
        Ok(evaluation) => serde_json::to_value(evaluation)?,
        Err(e) => serde_json::json!({ "url": url, "error": render_failure(e) }),
    })
}
