//! Error types for documentation extraction.
//!
//! Grammar mismatches are not errors: they drive the scan and never surface.
//! Only reading input, loading configuration and writing output can fail.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BsvDocError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("failed to serialize document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),

    #[error("unknown output format '{0}' (expected markdown or json)")]
    UnknownFormat(String),
}
