use super::args::Cli;
use crate::aggregate::aggregate_sharded;
use crate::config::Config;
use crate::error::HotTopicError;
use crate::exit::HotTopicExit;
use crate::reporting;
use crate::source;
use crate::types::HotTopicReport;
use anyhow::{Context, Result};
use colored::Colorize;
use tracing::{debug, info};

/// Resolves configuration: explicit `--config`, else `./hottopic.toml`, then CLI overrides.
///
/// # Errors
/// Returns error if a config file cannot be read, parsed, or validated.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load().context("loading hottopic.toml")?,
    };
    cli.apply_to(&mut config);
    config.validate()?;
    Ok(config)
}

/// Loads records and aggregates them according to `config`.
///
/// # Errors
/// Returns the source or aggregation error unchanged so callers can classify it.
pub fn compute(config: &Config) -> std::result::Result<HotTopicReport, HotTopicError> {
    let videos = source::from_path(&config.input)?;
    debug!(videos = videos.len(), shards = config.shards, "aggregating");
    aggregate_sharded(&videos, config.shards)
}

/// Runs one aggregation end to end and prints the report.
///
/// # Errors
/// Returns error for configuration or I/O failures. Bad input data and empty
/// results are reported through the exit code.
pub fn handle_run(config: &Config) -> Result<HotTopicExit> {
    let report = match compute(config) {
        Ok(report) => report,
        Err(e) if e.is_input_error() => {
            eprintln!("{} {e}", "invalid input:".red().bold());
            return Ok(HotTopicExit::InvalidInput);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("reading {}", config.input.display()))
        }
    };

    reporting::print_report(&report, &config.output)?;

    match &report.best {
        Some(best) => {
            info!(topic = %best.id, views = best.views_count, "hot topic found");
            Ok(HotTopicExit::Success)
        }
        None => Ok(HotTopicExit::NoTopic),
    }
}
