//! LAS Processor Library
//!
//! A Rust library for reading Log ASCII Standard (LAS) well-log files into a
//! structured document: a depth vector, named curves aligned to it, the well
//! information header and the null sentinel used for missing samples.
//!
//! This library provides tools for:
//! - Parsing LAS text in a single permissive pass ([`parser`])
//! - Loading LAS files from disk with lossy text decoding ([`loader`])
//! - Tagging documents with a caller identifier for persistence ([`models::WellLogRecord`])
//! - Exporting documents as JSON, CSV or Parquet ([`processor::writer`])
//! - Batch processing many files concurrently ([`processor`])

pub mod config;
pub mod constants;
pub mod error;
pub mod loader;
pub mod models;
pub mod parser;
pub mod processor;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::{NullMatch, ParserConfig, ProcessingConfig, UnknownSectionPolicy};
pub use error::{LasError, Result};
pub use loader::{load_las_file, parse_las_bytes};
pub use models::{Curve, WellInfoEntry, WellLogDocument, WellLogRecord};
pub use parser::{LasParser, parse_las};
