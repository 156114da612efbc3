// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HotTopicError {
    #[error("invalid record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("no topic found: input contains no (video, topic) pairs")]
    EmptyResult,

    #[error("counter overflow on topic '{topic}' ({field})")]
    CounterOverflow { topic: String, field: &'static str },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, HotTopicError>;

impl HotTopicError {
    pub(crate) fn invalid(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            index,
            reason: reason.into(),
        }
    }

    /// Returns true for errors caused by bad input data rather than the environment.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRecord { .. } | Self::Json(_) | Self::CounterOverflow { .. }
        )
    }
}

// Allow `?` on std::io::Error by converting to HotTopicError::Io with unknown path.
impl From<std::io::Error> for HotTopicError {
    fn from(source: std::io::Error) -> Self {
        HotTopicError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
