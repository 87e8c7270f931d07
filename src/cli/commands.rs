//! Command implementations for the LAS processor CLI
//!
//! This module contains the command execution logic, logging setup and the
//! human-readable reports printed after each command.

use crate::cli::args::{Args, Commands, InspectArgs, ParseArgs};
use crate::loader::load_las_file;
use crate::models::{ProcessingStats, WellLogDocument};
use crate::processor::BatchProcessor;
use crate::{LasError, Result};
use colored::*;
use tracing::{debug, info};

/// Main command runner for the LAS processor
pub async fn run(args: Args) -> Result<()> {
    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    match &args.command {
        Some(Commands::Parse(parse_args)) => {
            let stats = run_parse(parse_args, args.show_progress()).await?;
            if !args.quiet {
                print_parse_report(&stats);
            }
            if stats.files_processed == 0 && stats.files_failed > 0 {
                return Err(LasError::BatchFailed {
                    failed: stats.files_failed,
                });
            }
            Ok(())
        }
        Some(Commands::Inspect(inspect_args)) => run_inspect(inspect_args).await,
        None => Err(LasError::configuration(
            "no command given (use `parse` or `inspect`)",
        )),
    }
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("las_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| LasError::configuration(format!("failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Parse every input and export the documents
async fn run_parse(args: &ParseArgs, show_progress: bool) -> Result<ProcessingStats> {
    let config = args.to_config()?;
    info!(
        "Exporting {:?} to {} ({} concurrent files)",
        config.output_format,
        args.output_dir.display(),
        config.max_concurrent_files
    );

    let processor =
        BatchProcessor::new(args.output_dir.clone(), config)?.with_progress(show_progress);
    processor.process_inputs(&args.inputs).await
}

/// Load one file and print its summary
async fn run_inspect(args: &InspectArgs) -> Result<()> {
    let parser_config = args.parser.apply(Default::default())?;
    let path = args.file.clone();

    let document = tokio::task::spawn_blocking(move || load_las_file(&path, &parser_config))
        .await
        .map_err(|e| LasError::Interrupted {
            reason: format!("worker task failed: {}", e),
        })??;

    let document = match args.window() {
        Some((top, base)) => document.window(top, base),
        None => document,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        print_document_summary(&args.file.display().to_string(), &document);
    }
    Ok(())
}

/// Print the well-info table and curve statistics
fn print_document_summary(name: &str, document: &WellLogDocument) {
    println!("{} {}", "Well log:".bright_green().bold(), name.bright_white());

    match document.null_value {
        Some(null) => println!("  {} {}", "Null value:".bright_cyan(), null),
        None => println!("  {} {}", "Null value:".bright_cyan(), "none".bright_black()),
    }
    match document.depth_range() {
        Some((top, base)) => println!(
            "  {} {} to {} ({} rows)",
            "Depth:".bright_cyan(),
            top,
            base,
            document.row_count()
        ),
        None => println!("  {} {}", "Depth:".bright_cyan(), "no data rows".bright_black()),
    }

    if !document.well_info.is_empty() {
        println!("\n{}", "Well information".bright_yellow());
        for entry in &document.well_info {
            println!(
                "  {:<8} {:<8} {:<30} {}",
                entry.mnemonic.bright_white(),
                entry.unit,
                entry.value,
                entry.description.bright_black()
            );
        }
    }

    if !document.curves.is_empty() {
        println!("\n{}", "Curves".bright_yellow());
        println!(
            "  {:<10} {:>8} {:>8} {:>12} {:>12} {:>12}",
            "name", "present", "missing", "min", "max", "mean"
        );
        for curve in &document.curves {
            let stats = curve.stats();
            println!(
                "  {:<10} {:>8} {:>8} {:>12} {:>12} {:>12}",
                curve.name.bright_white(),
                stats.present,
                stats.missing,
                format_sample(stats.min),
                format_sample(stats.max),
                format_sample(stats.mean)
            );
        }
    }
}

/// Print the batch summary
fn print_parse_report(stats: &ProcessingStats) {
    println!("\n{}", "Processing complete".bright_green().bold());
    println!(
        "  {} {}",
        "Files processed:".bright_cyan(),
        stats.files_processed.to_string().bright_white().bold()
    );
    if stats.files_failed > 0 {
        println!(
            "  {} {}",
            "Files failed:".bright_red(),
            stats.files_failed.to_string().bright_white().bold()
        );
    }
    println!("  {} {}", "Data rows:".bright_cyan(), stats.total_rows);
    println!("  {} {}", "Curves:".bright_cyan(), stats.total_curves);
    println!(
        "  {} {:.2}s",
        "Elapsed:".bright_cyan(),
        stats.processing_time_ms as f64 / 1000.0
    );
}

fn format_sample(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.4}", v))
}
