// src/cli/mod.rs
pub mod args;
pub mod handlers;

pub use args::Cli;
pub use handlers::{compute, handle_run, resolve_config};

use crate::exit::HotTopicExit;
use anyhow::Result;

/// Executes the parsed command line.
///
/// # Errors
/// Returns error if configuration or input loading fails.
pub fn execute(cli: &Cli) -> Result<HotTopicExit> {
    crate::logging::init(cli.verbose);
    let config = resolve_config(cli)?;
    handle_run(&config)
}
