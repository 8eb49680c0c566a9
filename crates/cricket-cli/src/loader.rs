//! Match record loading from disk.
//!
//! Records are published as YAML; JSON conversions of the same shape are
//! accepted as well, chosen by file extension.

use std::fs;
use std::path::Path;

use cricket_core::MatchRecord;
use thiserror::Error;

/// Errors that can occur when loading a match record file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read the file from disk.
    #[error("failed to read match record: {0}")]
    Read(#[from] std::io::Error),
    /// The file is not valid YAML of the match record shape.
    #[error("failed to parse match record: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// The file is not valid JSON of the match record shape.
    #[error("failed to parse match record: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads and deserializes a match record.
///
/// Files ending in `.json` are parsed as JSON; everything else is treated
/// as YAML (YAML being a superset of JSON, this also covers extensionless
/// JSON files).
pub fn load_record(path: &Path) -> Result<MatchRecord, LoadError> {
    let text = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let record = if is_json {
        serde_json::from_str(&text)?
    } else {
        serde_yaml::from_str(&text)?
    };
    Ok(record)
}
