use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub color: bool,
    #[serde(default = "default_true")]
    pub detail: bool,
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            detail: true,
            format: OutputFormat::Text,
        }
    }
}

/// Contents of `hottopic.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_input")]
    pub input: PathBuf,
    #[serde(default = "default_shards")]
    pub shards: usize,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            shards: default_shards(),
            output: OutputConfig::default(),
        }
    }
}

const fn default_true() -> bool { true }
const fn default_shards() -> usize { 1 }
fn default_input() -> PathBuf { PathBuf::from(crate::source::DEFAULT_INPUT) }
