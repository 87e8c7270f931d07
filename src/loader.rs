//! LAS file loading.
//!
//! Reads a file into memory, decodes it as text and hands it to the parser.
//! LAS files are plain text; invalid UTF-8 sequences (common in files written
//! by older Windows tools) are replaced rather than rejected.

use crate::config::ParserConfig;
use crate::error::{LasError, Result};
use crate::models::WellLogDocument;
use crate::parser::LasParser;
use std::path::Path;
use tracing::{debug, warn};

/// Parse raw file bytes
pub fn parse_las_bytes(bytes: &[u8], config: &ParserConfig) -> WellLogDocument {
    let text = String::from_utf8_lossy(bytes);
    LasParser::new(*config).parse(&text)
}

/// Read and parse a LAS file from disk
pub fn load_las_file(path: &Path, config: &ParserConfig) -> Result<WellLogDocument> {
    if !path.exists() {
        return Err(LasError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path)?;
    let document = parse_las_bytes(&bytes, config);

    if document.is_empty() {
        warn!("No data rows found in {}", path.display());
    }
    debug!(
        "Parsed {}: {} rows, {} curves, {} well-info entries",
        path.display(),
        document.row_count(),
        document.curves.len(),
        document.well_info.len()
    );

    Ok(document)
}
