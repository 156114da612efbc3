//! Result presentation: colored console text or JSON.

pub mod console;
pub mod json;

use crate::config::{OutputConfig, OutputFormat};
use crate::error::Result;
use crate::types::HotTopicReport;

/// Prints the report in the configured format.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn print_report(report: &HotTopicReport, output: &OutputConfig) -> Result<()> {
    match output.format {
        OutputFormat::Text => {
            console::print_report(report, output);
            Ok(())
        }
        OutputFormat::Json => json::print_report(report),
    }
}
