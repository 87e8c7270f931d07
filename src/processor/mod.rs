//! Batch processing engine.
//!
//! Discovers LAS files, parses them concurrently on blocking worker tasks and
//! exports each document. A file that fails to load or export is counted and
//! logged without stopping the rest of the batch.

pub mod discovery;
pub mod writer;

#[cfg(test)]
pub mod tests;

use self::{discovery::FileDiscovery, writer::DocumentWriter};

use crate::config::ProcessingConfig;
use crate::constants::PROGRESS_TEMPLATE;
use crate::error::{LasError, Result};
use crate::loader::load_las_file;
use crate::models::ProcessingStats;

use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::fs;
use tokio::task;
use tracing::{debug, info, warn};

/// Result of processing one file
#[derive(Debug)]
struct FileOutcome {
    output: PathBuf,
    rows: usize,
    curves: usize,
}

/// Main processor for batch LAS conversion
#[derive(Debug)]
pub struct BatchProcessor {
    output_dir: PathBuf,
    config: ProcessingConfig,
    writer: Arc<DocumentWriter>,
    show_progress: bool,
}

impl BatchProcessor {
    /// Create a new batch processor writing into `output_dir`
    pub fn new(output_dir: PathBuf, config: ProcessingConfig) -> Result<Self> {
        config.validate()?;
        let writer = Arc::new(DocumentWriter::new(output_dir.clone(), config.clone()));

        Ok(Self {
            output_dir,
            config,
            writer,
            show_progress: false,
        })
    }

    /// Show a progress bar while processing
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Discover files from inputs and process them
    pub async fn process_inputs(&self, inputs: &[String]) -> Result<ProcessingStats> {
        let files = FileDiscovery::new(inputs.iter().cloned()).discover_las_files()?;
        info!("Found {} LAS files", files.len());
        self.process_files(files).await
    }

    /// Parse and export every file, at most `max_concurrent_files` at a time
    ///
    /// Output paths are assigned up front, so no two workers write the same
    /// file.
    pub async fn process_files(&self, files: Vec<PathBuf>) -> Result<ProcessingStats> {
        let start_time = Instant::now();
        fs::create_dir_all(&self.output_dir).await?;

        let progress = self.create_progress_bar(files.len() as u64);
        let parser_config = self.config.parser;
        let outputs = self.writer.plan_outputs(&files);
        let jobs = files.into_iter().zip(outputs);

        let outcomes: Vec<(PathBuf, Result<FileOutcome>)> = stream::iter(jobs)
            .map(|(path, output)| {
                let writer = Arc::clone(&self.writer);
                let progress = progress.clone();
                async move {
                    let input = path.clone();
                    let outcome = task::spawn_blocking(move || {
                        process_file(&input, output, &parser_config, &writer)
                    })
                    .await
                    .unwrap_or_else(|e| {
                        Err(LasError::Interrupted {
                            reason: format!("worker task failed: {}", e),
                        })
                    });
                    progress.inc(1);
                    (path, outcome)
                }
            })
            .buffer_unordered(self.config.max_concurrent_files)
            .collect()
            .await;

        progress.finish_and_clear();

        let mut stats = ProcessingStats::default();
        for (path, outcome) in outcomes {
            match outcome {
                Ok(outcome) => {
                    stats.files_processed += 1;
                    stats.total_rows += outcome.rows;
                    stats.total_curves += outcome.curves;
                    stats.outputs.push(outcome.output);
                }
                Err(e) => {
                    warn!("Failed to process {}: {}", path.display(), e);
                    stats.files_failed += 1;
                }
            }
        }
        stats.outputs.sort();
        stats.processing_time_ms = start_time.elapsed().as_millis();

        debug!(
            "Batch finished: {} processed, {} failed in {}ms",
            stats.files_processed, stats.files_failed, stats.processing_time_ms
        );

        Ok(stats)
    }

    fn create_progress_bar(&self, total: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::with_template(PROGRESS_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb.set_message("Parsing LAS files");
        pb
    }
}

/// Load, parse and export a single file
fn process_file(
    input: &Path,
    output: PathBuf,
    parser_config: &crate::config::ParserConfig,
    writer: &DocumentWriter,
) -> Result<FileOutcome> {
    let document = load_las_file(input, parser_config)?;
    writer.write_to(&output, &document)?;

    Ok(FileOutcome {
        output,
        rows: document.row_count(),
        curves: document.curves.len(),
    })
}
