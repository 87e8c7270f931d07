//! File discovery module for LAS inputs
//!
//! Expands the inputs given on the command line (files, directories and glob
//! patterns) into a sorted, de-duplicated list of LAS files.

use crate::constants::LAS_EXTENSION;
use crate::error::{LasError, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// File discovery component for LAS inputs
#[derive(Debug, Clone)]
pub struct FileDiscovery {
    inputs: Vec<String>,
}

impl FileDiscovery {
    /// Create a new file discovery instance
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
        }
    }

    /// Resolve every input into LAS files
    ///
    /// - an existing file is used as-is, whatever its extension
    /// - a directory is searched recursively for `*.las` files
    /// - anything else is treated as a glob pattern
    pub fn discover_las_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = BTreeSet::new();

        for input in &self.inputs {
            let path = Path::new(input);
            let found = if path.is_file() {
                vec![path.to_path_buf()]
            } else if path.is_dir() {
                discover_directory(path)?
            } else if is_glob_pattern(input) {
                discover_pattern(input)?
            } else {
                return Err(LasError::FileNotFound {
                    path: path.to_path_buf(),
                });
            };

            if found.is_empty() {
                return Err(LasError::NoInputFiles {
                    input: input.clone(),
                });
            }

            debug!("Input '{}' resolved to {} files", input, found.len());
            files.extend(found);
        }

        Ok(files.into_iter().collect())
    }
}

/// Recursively collect LAS files under a directory
fn discover_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry.map_err(|e| LasError::Io(e.into()))?;
        if entry.file_type().is_file() && is_las_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Collect files matching a glob pattern
fn discover_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    let paths = glob::glob(pattern).map_err(|e| LasError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })?;

    let mut files = Vec::new();
    for path in paths {
        let path = path.map_err(|e| LasError::Io(e.into_error()))?;
        if path.is_file() {
            files.push(path);
        }
    }

    Ok(files)
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

/// Check if a path has a `.las` extension, ignoring case
pub fn is_las_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(LAS_EXTENSION))
}
