//! Document export module
//!
//! Writes parsed well logs as JSON records (the client-facing shape), or as
//! CSV/Parquet tables with a depth column followed by one column per curve.

use crate::config::ProcessingConfig;
use crate::constants::DEPTH_COLUMN;
use crate::error::{LasError, Result};
use crate::models::{OutputFormat, WellLogDocument, WellLogRecord};

use polars::prelude::{Column, CsvWriter, DataFrame, ParquetWriter, SerWriter};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writer for parsed documents
#[derive(Debug, Clone)]
pub struct DocumentWriter {
    output_dir: PathBuf,
    config: ProcessingConfig,
}

impl DocumentWriter {
    /// Create a new writer targeting `output_dir`
    pub fn new(output_dir: PathBuf, config: ProcessingConfig) -> Self {
        Self { output_dir, config }
    }

    /// Output path for an input file: `<output_dir>/<stem>.<ext>`
    pub fn output_path(&self, input: &Path) -> PathBuf {
        self.output_dir.join(format!(
            "{}.{}",
            file_stem(input),
            self.config.output_format.extension()
        ))
    }

    /// Assign one output path per input, in input order
    ///
    /// Inputs sharing a file stem (the same file name in different
    /// directories) get a numeric suffix: `well.json`, `well_2.json`, ...
    /// Stems are compared ignoring ASCII case so outputs stay distinct on
    /// case-insensitive filesystems.
    pub fn plan_outputs(&self, inputs: &[PathBuf]) -> Vec<PathBuf> {
        let extension = self.config.output_format.extension();
        let mut seen = HashSet::new();

        inputs
            .iter()
            .map(|input| {
                let stem = file_stem(input);
                let mut name = stem.clone();
                let mut suffix = 2;
                while !seen.insert(name.to_ascii_lowercase()) {
                    name = format!("{}_{}", stem, suffix);
                    suffix += 1;
                }
                self.output_dir.join(format!("{}.{}", name, extension))
            })
            .collect()
    }

    /// Write the document parsed from `input`, returning the output path
    pub fn write(&self, input: &Path, document: &WellLogDocument) -> Result<PathBuf> {
        let output = self.output_path(input);
        self.write_to(&output, document)?;
        Ok(output)
    }

    /// Write a document to an explicit output path
    ///
    /// JSON records take their well identifier from the output file name so
    /// that identifiers stay unique across a batch.
    pub fn write_to(&self, output: &Path, document: &WellLogDocument) -> Result<()> {
        if output.exists() && !self.config.overwrite {
            return Err(LasError::export_failed(
                output,
                "output already exists (use --overwrite to replace)",
            ));
        }

        match self.config.output_format {
            OutputFormat::Json => {
                let record = record_for(output, document.clone());
                self.write_json(output, &record)?
            }
            OutputFormat::Csv => {
                let mut df = document_to_dataframe(document)?;
                let mut file = File::create(output)?;
                CsvWriter::new(&mut file)
                    .include_header(true)
                    .finish(&mut df)
                    .map_err(|e| LasError::export_failed(output, e.to_string()))?;
            }
            OutputFormat::Parquet => {
                let mut df = document_to_dataframe(document)?;
                let file = File::create(output)?;
                ParquetWriter::new(file)
                    .with_compression(self.config.compression.to_polars_compression())
                    .finish(&mut df)
                    .map_err(|e| LasError::export_failed(output, e.to_string()))?;
            }
        }

        debug!("Wrote {}", output.display());
        Ok(())
    }

    fn write_json(&self, output: &Path, record: &WellLogRecord) -> Result<()> {
        let writer = BufWriter::new(File::create(output)?);
        if self.config.pretty_json {
            serde_json::to_writer_pretty(writer, record)?;
        } else {
            serde_json::to_writer(writer, record)?;
        }
        Ok(())
    }
}

/// Tag a document with an identifier derived from its file name
///
/// The well name comes from the `WELL` header entry when present.
pub fn record_for(input: &Path, document: WellLogDocument) -> WellLogRecord {
    let well_id = file_stem(input);
    let well_name = document
        .well_info_value("WELL")
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| well_id.clone());

    WellLogRecord::new(well_id, well_name, document)
}

/// Build a table with a depth column and one column per curve
///
/// Repeated curve names get a numeric suffix (`GR`, `GR_2`, ...) so every
/// column name is unique.
pub fn document_to_dataframe(document: &WellLogDocument) -> Result<DataFrame> {
    let mut seen = HashSet::new();
    seen.insert(DEPTH_COLUMN.to_string());

    let mut columns = Vec::with_capacity(document.curves.len() + 1);
    columns.push(Column::new(DEPTH_COLUMN.into(), document.depth.clone()));

    for curve in &document.curves {
        let name = unique_column_name(&curve.name, &mut seen);
        columns.push(Column::new(name.into(), curve.data.clone()));
    }

    Ok(DataFrame::new(columns)?)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

/// First of `name`, `name_2`, `name_3`, ... not yet in `seen`
fn unique_column_name(name: &str, seen: &mut HashSet<String>) -> String {
    let mut candidate = name.to_string();
    let mut suffix = 2;
    while !seen.insert(candidate.clone()) {
        candidate = format!("{}_{}", name, suffix);
        suffix += 1;
    }
    candidate
}
