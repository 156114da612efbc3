// src/config/mod.rs
pub mod types;

pub use self::types::{Config, OutputConfig, OutputFormat};

use crate::error::{HotTopicError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "hottopic.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `hottopic.toml` from the working directory, or defaults if absent.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::new())
        }
    }

    /// Loads configuration from an explicit path.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, or validated.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| HotTopicError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        let config = Self::parse_toml(&content)?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Parses and validates TOML content.
    ///
    /// # Errors
    /// Returns `Config` if the TOML is malformed or fails validation.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| HotTopicError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns `Config` if `shards` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.shards == 0 {
            return Err(HotTopicError::Config("shards must be at least 1".into()));
        }
        Ok(())
    }
}
