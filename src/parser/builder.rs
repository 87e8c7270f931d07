//! Per-parse accumulators and final reconciliation into a document

use super::ascii_data::DataRow;
use super::well_info::{MetadataLine, extract_null_sentinel};
use crate::config::ParserConfig;
use crate::models::{Curve, WellInfoEntry, WellLogDocument};
use tracing::debug;

/// Accumulates the pieces of one document during a single pass
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    config: ParserConfig,
    well_info: Vec<WellInfoEntry>,
    curve_names: Vec<String>,
    rows: Vec<DataRow>,
    null_value: Option<f64>,
    rejected_rows: usize,
}

impl DocumentBuilder {
    pub fn new(config: ParserConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Record a well information line, capturing the null sentinel if declared
    pub fn push_metadata(&mut self, line: MetadataLine<'_>) {
        if line.is_null_declaration() && !line.value.is_empty() {
            if let Some(null) = extract_null_sentinel(line.value) {
                self.null_value = Some(null);
            }
        }
        self.well_info.push(line.to_entry());
    }

    pub fn push_curve_name(&mut self, name: &str) {
        self.curve_names.push(name.to_string());
    }

    pub fn push_row(&mut self, row: DataRow) {
        self.rows.push(row);
    }

    /// Count a data line that could not be read as a row
    pub fn reject_row(&mut self) {
        self.rejected_rows += 1;
    }

    /// Reconcile rows with curve names into the final document
    pub fn finish(self) -> WellLogDocument {
        let DocumentBuilder {
            config,
            well_info,
            curve_names,
            rows,
            null_value,
            rejected_rows,
        } = self;

        debug!(
            "Parsed {} well-info entries, {} curve names, {} rows ({} rejected)",
            well_info.len(),
            curve_names.len(),
            rows.len(),
            rejected_rows
        );

        if rows.is_empty() {
            return WellLogDocument {
                depth: Vec::new(),
                curves: Vec::new(),
                null_value,
                well_info,
            };
        }

        let mask = |sample: Option<f64>| {
            sample.filter(|v| !null_value.is_some_and(|null| config.null_match.matches(*v, null)))
        };

        let depth = rows.iter().map(|row| mask(row[0])).collect();

        let curves = curve_names
            .into_iter()
            .enumerate()
            .skip(1)
            .map(|(column, name)| Curve {
                name,
                unit: String::new(),
                data: rows
                    .iter()
                    .map(|row| mask(row.get(column).copied().flatten()))
                    .collect(),
            })
            .collect();

        WellLogDocument {
            depth,
            curves,
            null_value,
            well_info,
        }
    }
}
