// src/source.rs
//! Decodes video records from their JSON representation.
//!
//! The document must be an array of objects. Elements are decoded one at a
//! time so a bad record is reported with its index.

use crate::error::{HotTopicError, Result};
use crate::types::VideoRecord;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Default input file, relative to the working directory.
pub const DEFAULT_INPUT: &str = "videos.json";

/// Parses records from a JSON string.
///
/// # Errors
/// Returns `Json` for malformed JSON and `InvalidRecord` for a document that
/// is not an array or an element that does not match the record shape.
pub fn from_str(content: &str) -> Result<Vec<VideoRecord>> {
    let doc: Value = serde_json::from_str(content)?;
    decode(doc)
}

/// Parses records from any reader.
///
/// # Errors
/// Same as [`from_str`], plus `Io` if the reader fails.
pub fn from_reader<R: Read>(reader: R) -> Result<Vec<VideoRecord>> {
    let doc: Value = serde_json::from_reader(reader)?;
    decode(doc)
}

/// Reads and parses records from a file.
///
/// # Errors
/// Returns `Io` (with the path) if the file cannot be read, otherwise see [`from_str`].
pub fn from_path(path: &Path) -> Result<Vec<VideoRecord>> {
    let content = fs::read_to_string(path).map_err(|source| HotTopicError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    let records = from_str(&content)?;
    debug!(path = %path.display(), records = records.len(), "records loaded");
    Ok(records)
}

fn decode(doc: Value) -> Result<Vec<VideoRecord>> {
    let items = match doc {
        Value::Array(items) => items,
        other => {
            return Err(HotTopicError::invalid(
                0,
                format!("expected a JSON array of videos, found {}", kind(&other)),
            ))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<VideoRecord>(item)
                .map_err(|e| HotTopicError::invalid(index, e.to_string()))
        })
        .collect()
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
