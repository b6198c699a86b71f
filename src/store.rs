//! Loading and persisting the configuration document

use serde_yaml::{Mapping, Value};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Fixed name of the configuration file inside the conf directory.
pub const CONFIG_FILE_NAME: &str = "storm.yaml";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("existing config {path} is not valid YAML: {source}")]
    Parse { path: String, source: serde_yaml::Error },

    #[error("existing config {path} is not a mapping")]
    NotAMapping { path: String },

    #[error("failed to serialize config: {0}")]
    Serialize(serde_yaml::Error),

    #[error("failed to write {path}: {source}")]
    Write { path: String, source: io::Error },
}

/// Load the document at `path`.
///
/// A missing or empty file yields a fresh empty mapping. A file that parses
/// but is not a mapping at the top level is a fatal load error; overrides are
/// never applied on top of a scalar or list document.
pub fn load_document(path: &Path) -> Result<Mapping, StoreError> {
    if !path.exists() {
        return Ok(Mapping::new());
    }

    let content = fs::read_to_string(path)
        .map_err(|source| StoreError::Read { path: path.display().to_string(), source })?;

    let loaded: Value = serde_yaml::from_str(&content)
        .map_err(|source| StoreError::Parse { path: path.display().to_string(), source })?;

    match loaded {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(map) => Ok(map),
        _ => Err(StoreError::NotAMapping { path: path.display().to_string() }),
    }
}

/// Render the document in block style, keys in recorded insertion order.
pub fn serialize_document(doc: &Mapping) -> Result<String, StoreError> {
    serde_yaml::to_string(doc).map_err(StoreError::Serialize)
}

/// Write the merged document back in one whole-file pass.
pub fn save_document(path: &Path, doc: &Mapping) -> Result<(), StoreError> {
    let rendered = serialize_document(doc)?;
    fs::write(path, rendered)
        .map_err(|source| StoreError::Write { path: path.display().to_string(), source })
}
