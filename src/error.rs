//! Error handling for LAS processing operations.
//!
//! The parser itself never fails on malformed content; these errors cover the
//! surrounding work of reading files, loading configuration and exporting
//! parsed documents.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LasError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("No LAS files found for input: {input}")]
    NoInputFiles { input: String },

    #[error("Invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Export failed for file: {path} - {reason}")]
    ExportFailed { path: PathBuf, reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("All {failed} input files failed to process")]
    BatchFailed { failed: usize },

    #[error("Processing interrupted: {reason}")]
    Interrupted { reason: String },
}

impl LasError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an export error for a specific output path
    pub fn export_failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ExportFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LasError>;
