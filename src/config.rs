//! Configuration management and validation.
//!
//! Provides the parser options (how unknown sections and null sentinels are
//! treated) and the batch processing settings used by the CLI.

use crate::constants::DEFAULT_MAX_CONCURRENT_FILES;
use crate::error::{LasError, Result};
use crate::models::OutputFormat;
use polars::prelude::ParquetCompression;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// What the parser does with lines following an unrecognized `~` header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownSectionPolicy {
    /// Ignore every line until the next recognized section header
    #[default]
    Skip,
    /// Keep interpreting lines as the previously active section
    RetainPrevious,
}

/// How data samples are compared against the null sentinel
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullMatch {
    /// Bit-for-bit value equality
    #[default]
    Exact,
    /// Absolute difference no larger than the given epsilon
    Tolerance(f64),
}

impl NullMatch {
    /// Check whether `value` should be treated as the sentinel `null`
    pub fn matches(&self, value: f64, null: f64) -> bool {
        match self {
            NullMatch::Exact => value == null,
            NullMatch::Tolerance(eps) => (value - null).abs() <= *eps,
        }
    }
}

/// Options controlling a single parse
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub unknown_sections: UnknownSectionPolicy,
    pub null_match: NullMatch,
}

impl ParserConfig {
    /// Keep the previous section active across unrecognized headers
    pub fn with_retained_sections(mut self) -> Self {
        self.unknown_sections = UnknownSectionPolicy::RetainPrevious;
        self
    }

    /// Match null sentinels within `eps` instead of exactly
    pub fn with_null_tolerance(mut self, eps: f64) -> Self {
        self.null_match = NullMatch::Tolerance(eps);
        self
    }

    /// Reject tolerances that are negative or not finite
    pub fn validate(&self) -> Result<()> {
        if let NullMatch::Tolerance(eps) = self.null_match {
            if !eps.is_finite() || eps < 0.0 {
                return Err(LasError::configuration(format!(
                    "null tolerance must be a finite non-negative number, got {}",
                    eps
                )));
            }
        }
        Ok(())
    }
}

/// Supported compression algorithms for parquet files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionAlgorithm {
    /// Snappy compression - good balance of speed and compression
    #[default]
    Snappy,
    /// ZSTD compression - better compression ratio, slower
    Zstd,
    /// LZ4 compression - fastest, lower compression ratio
    Lz4,
    /// No compression
    Uncompressed,
}

impl CompressionAlgorithm {
    /// Convert to polars ParquetCompression type
    pub fn to_polars_compression(&self) -> ParquetCompression {
        match self {
            CompressionAlgorithm::Snappy => ParquetCompression::Snappy,
            CompressionAlgorithm::Zstd => ParquetCompression::Zstd(None),
            CompressionAlgorithm::Lz4 => ParquetCompression::Lz4Raw,
            CompressionAlgorithm::Uncompressed => ParquetCompression::Uncompressed,
        }
    }

    /// Parse a CLI compression name
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "snappy" => Ok(CompressionAlgorithm::Snappy),
            "zstd" => Ok(CompressionAlgorithm::Zstd),
            "lz4" => Ok(CompressionAlgorithm::Lz4),
            "none" | "uncompressed" => Ok(CompressionAlgorithm::Uncompressed),
            other => Err(LasError::configuration(format!(
                "unknown compression '{}' (expected snappy, zstd, lz4 or none)",
                other
            ))),
        }
    }
}

/// Settings for batch parsing and export
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Parser options applied to every file
    pub parser: ParserConfig,

    /// Maximum number of files parsed concurrently
    pub max_concurrent_files: usize,

    /// Format of the exported documents
    pub output_format: OutputFormat,

    /// Parquet compression (ignored for other formats)
    pub compression: CompressionAlgorithm,

    /// Pretty-print JSON output
    pub pretty_json: bool,

    /// Replace existing output files
    pub overwrite: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            max_concurrent_files: num_cpus::get().clamp(1, DEFAULT_MAX_CONCURRENT_FILES),
            output_format: OutputFormat::Json,
            compression: CompressionAlgorithm::Snappy,
            pretty_json: false,
            overwrite: false,
        }
    }
}

impl ProcessingConfig {
    /// Load a configuration from a JSON file; missing fields take defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LasError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path)?;
        let config: ProcessingConfig = serde_json::from_str(&text)?;
        debug!("Loaded configuration from {}: {:?}", path.display(), config);
        config.validate()?;
        Ok(config)
    }

    /// Set parser options
    pub fn with_parser(mut self, parser: ParserConfig) -> Self {
        self.parser = parser;
        self
    }

    /// Set maximum concurrent files
    pub fn with_max_concurrent_files(mut self, max_files: usize) -> Self {
        self.max_concurrent_files = max_files;
        self
    }

    /// Set output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set parquet compression
    pub fn with_compression(mut self, compression: CompressionAlgorithm) -> Self {
        self.compression = compression;
        self
    }

    /// Enable pretty-printed JSON
    pub fn with_pretty_json(mut self) -> Self {
        self.pretty_json = true;
        self
    }

    /// Allow existing outputs to be replaced
    pub fn with_overwrite(mut self) -> Self {
        self.overwrite = true;
        self
    }

    /// Check settings for consistency
    pub fn validate(&self) -> Result<()> {
        if self.max_concurrent_files == 0 {
            return Err(LasError::configuration(
                "max_concurrent_files must be at least 1",
            ));
        }
        self.parser.validate()
    }
}
