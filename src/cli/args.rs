//! Command-line argument definitions for the LAS processor
//!
//! Defines the CLI interface using the clap derive API and converts the
//! parsed flags into library configuration.

use crate::config::{CompressionAlgorithm, ParserConfig, ProcessingConfig};
use crate::models::OutputFormat;
use crate::{LasError, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the LAS well-log processor
#[derive(Debug, Clone, Parser)]
#[command(
    name = "las_processor",
    version,
    about = "Parse LAS well-log files into JSON, CSV or Parquet",
    long_about = "Reads Log ASCII Standard (LAS) well-log files, extracts the well information \
                  header, curve names and ASCII data block, replaces null sentinel samples with \
                  missing values and writes one structured document per input file."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only report errors; hides progress bars
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse LAS files and export one document per file
    Parse(ParseArgs),
    /// Print the header and curve summary of a single LAS file
    Inspect(InspectArgs),
}

/// Output format accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// JSON record per well (depth, curves, nullValue, wellInfo)
    Json,
    /// CSV table with a depth column and one column per curve
    Csv,
    /// Parquet table with a depth column and one column per curve
    Parquet,
}

impl From<ExportFormat> for OutputFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Json => OutputFormat::Json,
            ExportFormat::Csv => OutputFormat::Csv,
            ExportFormat::Parquet => OutputFormat::Parquet,
        }
    }
}

/// Parser behaviour flags shared by all subcommands
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ParserFlags {
    /// Keep reading lines as the previous section after an unrecognized `~` header
    ///
    /// By default every line after an unrecognized header (for example
    /// `~Parameter`) is ignored until the next `~W`, `~Curve` or `~ASCII`.
    #[arg(long = "retain-previous-section")]
    pub retain_previous_section: bool,

    /// Treat samples within EPS of the null value as missing
    #[arg(long = "null-tolerance", value_name = "EPS")]
    pub null_tolerance: Option<f64>,
}

impl ParserFlags {
    /// Apply the flags on top of an existing parser configuration
    pub fn apply(&self, mut config: ParserConfig) -> Result<ParserConfig> {
        if self.retain_previous_section {
            config = config.with_retained_sections();
        }
        if let Some(eps) = self.null_tolerance {
            config = config.with_null_tolerance(eps);
        }
        config.validate()?;
        Ok(config)
    }
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// LAS files, directories (searched recursively) or glob patterns
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<String>,

    /// Directory for the exported documents
    #[arg(short, long = "output", value_name = "DIR", default_value = "output")]
    pub output_dir: PathBuf,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Parquet compression algorithm (snappy, zstd, lz4, none)
    #[arg(long)]
    pub compression: Option<String>,

    /// Maximum number of files parsed at the same time
    #[arg(short = 'j', long = "concurrency", value_name = "N")]
    pub concurrency: Option<usize>,

    /// JSON configuration file; command-line flags take precedence
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Replace existing output files
    #[arg(long)]
    pub overwrite: bool,

    #[command(flatten)]
    pub parser: ParserFlags,
}

impl ParseArgs {
    /// Build the processing configuration from the config file and flags
    pub fn to_config(&self) -> Result<ProcessingConfig> {
        let mut config = match &self.config {
            Some(path) => ProcessingConfig::from_file(path)?,
            None => ProcessingConfig::default(),
        };

        if let Some(format) = self.format {
            config = config.with_output_format(format.into());
        }
        if let Some(name) = &self.compression {
            config = config.with_compression(CompressionAlgorithm::from_name(name)?);
        }
        if let Some(concurrency) = self.concurrency {
            config = config.with_max_concurrent_files(concurrency);
        }
        if self.pretty {
            config = config.with_pretty_json();
        }
        if self.overwrite {
            config = config.with_overwrite();
        }

        let parser = self.parser.apply(config.parser)?;
        let config = config.with_parser(parser);
        config.validate()?;
        Ok(config)
    }
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// LAS file to inspect
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Top of the depth window to summarize
    #[arg(long, requires = "base")]
    pub top: Option<f64>,

    /// Base of the depth window to summarize
    #[arg(long, requires = "top")]
    pub base: Option<f64>,

    /// Print the parsed document as JSON instead of a summary
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub parser: ParserFlags,
}

impl InspectArgs {
    /// Depth window, when both bounds were given
    pub fn window(&self) -> Option<(f64, f64)> {
        self.top.zip(self.base)
    }
}

impl Args {
    /// Get the log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    /// Reject flag combinations the parser cannot honour
    pub fn validate(&self) -> Result<()> {
        if let Some(Commands::Parse(parse)) = &self.command {
            if parse.concurrency == Some(0) {
                return Err(LasError::configuration("--concurrency must be at least 1"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NullMatch, UnknownSectionPolicy};

    #[test]
    fn test_parse_command_flags() {
        let args = Args::try_parse_from([
            "las_processor",
            "-vv",
            "parse",
            "wells/",
            "extra.las",
            "--format",
            "parquet",
            "--compression",
            "zstd",
            "-j",
            "3",
            "--retain-previous-section",
            "--null-tolerance",
            "0.001",
        ])
        .unwrap();

        assert_eq!(args.get_log_level(), "debug");
        let Some(Commands::Parse(parse)) = &args.command else {
            panic!("expected parse command");
        };
        assert_eq!(parse.inputs, vec!["wells/", "extra.las"]);

        let config = parse.to_config().unwrap();
        assert_eq!(config.output_format, OutputFormat::Parquet);
        assert_eq!(config.compression, CompressionAlgorithm::Zstd);
        assert_eq!(config.max_concurrent_files, 3);
        assert_eq!(
            config.parser.unknown_sections,
            UnknownSectionPolicy::RetainPrevious
        );
        assert_eq!(config.parser.null_match, NullMatch::Tolerance(0.001));
    }

    #[test]
    fn test_parse_defaults() {
        let args = Args::try_parse_from(["las_processor", "parse", "a.las"]).unwrap();
        let Some(Commands::Parse(parse)) = &args.command else {
            panic!("expected parse command");
        };

        let config = parse.to_config().unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.parser, ParserConfig::default());
        assert_eq!(parse.output_dir, PathBuf::from("output"));
        assert!(args.show_progress());
    }

    #[test]
    fn test_invalid_flags_rejected() {
        let args =
            Args::try_parse_from(["las_processor", "parse", "a.las", "-j", "0"]).unwrap();
        assert!(args.validate().is_err());

        let args = Args::try_parse_from([
            "las_processor",
            "parse",
            "a.las",
            "--null-tolerance=-1",
        ])
        .unwrap();
        let Some(Commands::Parse(parse)) = &args.command else {
            panic!("expected parse command");
        };
        assert!(parse.to_config().is_err());
    }

    #[test]
    fn test_inspect_window_requires_both_bounds() {
        assert!(
            Args::try_parse_from(["las_processor", "inspect", "a.las", "--top", "100"]).is_err()
        );

        let args = Args::try_parse_from([
            "las_processor",
            "-q",
            "inspect",
            "a.las",
            "--top",
            "100",
            "--base",
            "200",
        ])
        .unwrap();
        let Some(Commands::Inspect(inspect)) = &args.command else {
            panic!("expected inspect command");
        };
        assert_eq!(inspect.window(), Some((100.0, 200.0)));
        assert_eq!(args.get_log_level(), "error");
    }
}
