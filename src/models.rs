//! Core data structures for parsed well logs.
//!
//! Defines the parsed document, its curves and header entries, the tagged
//! record handed to persistence collaborators, and batch processing
//! statistics.

use crate::constants::WELL_CACHE_KEY_PREFIX;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One header metadata line from the well information section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellInfoEntry {
    pub mnemonic: String,
    pub unit: String,
    pub value: String,
    pub description: String,
}

/// A named, depth-indexed data channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub name: String,
    /// Always empty: curve headers do not carry units into the data channel
    pub unit: String,
    pub data: Vec<Option<f64>>,
}

/// Summary statistics over the present samples of a curve
#[derive(Debug, Clone, PartialEq)]
pub struct CurveStats {
    pub present: usize,
    pub missing: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
}

impl Curve {
    /// Compute sample statistics, ignoring missing values
    pub fn stats(&self) -> CurveStats {
        let mut present = 0usize;
        let mut sum = 0.0;
        let mut min: Option<f64> = None;
        let mut max: Option<f64> = None;

        for value in self.data.iter().flatten() {
            present += 1;
            sum += value;
            min = Some(min.map_or(*value, |m| m.min(*value)));
            max = Some(max.map_or(*value, |m| m.max(*value)));
        }

        CurveStats {
            present,
            missing: self.data.len() - present,
            min,
            max,
            mean: (present > 0).then(|| sum / present as f64),
        }
    }
}

/// The result of parsing one LAS file
///
/// Invariants upheld by the parser:
/// - every curve's `data` has the same length as `depth`
/// - samples equal to `null_value` are stored as `None`
/// - `well_info` is in file order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellLogDocument {
    pub depth: Vec<Option<f64>>,
    pub curves: Vec<Curve>,
    pub null_value: Option<f64>,
    pub well_info: Vec<WellInfoEntry>,
}

impl WellLogDocument {
    /// Number of accepted data rows
    pub fn row_count(&self) -> usize {
        self.depth.len()
    }

    /// True when no data rows were found
    pub fn is_empty(&self) -> bool {
        self.depth.is_empty()
    }

    /// Find a curve by name, ignoring ASCII case
    pub fn curve(&self, name: &str) -> Option<&Curve> {
        self.curves
            .iter()
            .find(|curve| curve.name.eq_ignore_ascii_case(name))
    }

    /// Value of the first well-info entry with the given mnemonic
    pub fn well_info_value(&self, mnemonic: &str) -> Option<&str> {
        self.well_info
            .iter()
            .find(|entry| entry.mnemonic.eq_ignore_ascii_case(mnemonic))
            .map(|entry| entry.value.as_str())
    }

    /// Smallest and largest present depth sample
    pub fn depth_range(&self) -> Option<(f64, f64)> {
        self.depth.iter().flatten().fold(None, |range, &d| match range {
            None => Some((d, d)),
            Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
        })
    }

    /// Restrict the document to depth samples between `top` and `base`
    ///
    /// The bounds are inclusive and may be given in either order. Rows with a
    /// missing depth are dropped. Curve alignment with `depth` is preserved.
    pub fn window(&self, top: f64, base: f64) -> WellLogDocument {
        let (lo, hi) = if top <= base { (top, base) } else { (base, top) };

        let keep: Vec<usize> = self
            .depth
            .iter()
            .enumerate()
            .filter_map(|(k, d)| d.filter(|d| *d >= lo && *d <= hi).map(|_| k))
            .collect();

        let depth = keep.iter().map(|&k| self.depth[k]).collect();
        let curves = self
            .curves
            .iter()
            .map(|curve| Curve {
                name: curve.name.clone(),
                unit: curve.unit.clone(),
                data: keep
                    .iter()
                    .map(|&k| curve.data.get(k).copied().flatten())
                    .collect(),
            })
            .collect();

        WellLogDocument {
            depth,
            curves,
            null_value: self.null_value,
            well_info: self.well_info.clone(),
        }
    }
}

/// A parsed document tagged with the caller's well identifier
///
/// This is the shape handed to persistence and caching collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellLogRecord {
    pub well_id: String,
    pub well_name: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub document: WellLogDocument,
}

impl WellLogRecord {
    /// Tag a document with a caller-supplied identifier
    pub fn new(
        well_id: impl Into<String>,
        well_name: impl Into<String>,
        document: WellLogDocument,
    ) -> Self {
        Self {
            well_id: well_id.into(),
            well_name: well_name.into(),
            created_at: Utc::now(),
            document,
        }
    }

    /// Key under which the record is cached
    pub fn cache_key(&self) -> String {
        format!("{}:{}", WELL_CACHE_KEY_PREFIX, self.well_id)
    }
}

/// Output formats for exported documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
    Parquet,
}

impl OutputFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Parquet => "parquet",
        }
    }
}

/// Batch processing statistics
#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub files_processed: usize,
    pub files_failed: usize,
    pub total_rows: usize,
    pub total_curves: usize,
    pub outputs: Vec<PathBuf>,
    pub processing_time_ms: u128,
}
