use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, OutputFormat};

#[derive(Parser, Debug, Default)]
#[command(
    name = "hottopic",
    version,
    about = "Find the most viewed topic in a JSON file of videos"
)]
pub struct Cli {
    /// JSON file with an array of video records [default: videos.json]
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,
    /// Read settings from this file instead of ./hottopic.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
    /// Split the input across this many parallel shards
    #[arg(long, value_name = "N")]
    pub shards: Option<usize>,
    /// Only print the summary block
    #[arg(long)]
    pub no_detail: bool,
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
    /// Enable debug logging on stderr
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Applies command-line overrides on top of file configuration.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(shards) = self.shards {
            config.shards = shards;
        }
        if self.json {
            config.output.format = OutputFormat::Json;
        }
        if self.no_detail {
            config.output.detail = false;
        }
        if self.no_color {
            config.output.color = false;
        }
    }
}
