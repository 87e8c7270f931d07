//! LAS document parser
//!
//! Converts the text of a Log ASCII Standard well-log file into a
//! [`WellLogDocument`] in one forward pass over its lines. The pass tracks the
//! current [`Section`] and feeds a call-local [`DocumentBuilder`]; nothing is
//! shared between calls, so a [`LasParser`] can be used from many threads at
//! once.
//!
//! ## Architecture
//!
//! - [`section`] - section header recognition and parser state
//! - [`well_info`] - well information tokenizer and null sentinel extraction
//! - [`curve_info`] - curve name extraction
//! - [`ascii_data`] - data row tokenization
//! - [`builder`] - accumulators and row/curve reconciliation
//!
//! The parser is permissive: lines it cannot interpret are skipped and never
//! reported as errors. A file with no recognizable data yields an empty
//! document rather than a failure.
//!
//! ## Usage
//!
//! ```rust
//! use las_processor::parser::parse_las;
//!
//! let text = "~Curve\nDEPT.M : depth\nGR.GAPI : gamma\n~ASCII\n100.0 45.2\n100.5 47.9\n";
//! let doc = parse_las(text);
//!
//! assert_eq!(doc.depth, vec![Some(100.0), Some(100.5)]);
//! assert_eq!(doc.curves[0].name, "GR");
//! ```

pub mod ascii_data;
pub mod builder;
pub mod curve_info;
pub mod section;
pub mod well_info;

#[cfg(test)]
pub mod tests;

pub use builder::DocumentBuilder;
pub use section::Section;
pub use well_info::{MetadataLine, extract_null_sentinel, tokenize_metadata_line};

use crate::config::{ParserConfig, UnknownSectionPolicy};
use crate::constants::{BYTE_ORDER_MARK, COMMENT_PREFIX};
use crate::models::WellLogDocument;
use tracing::trace;

/// Parser for LAS well-log text
#[derive(Debug, Clone, Copy, Default)]
pub struct LasParser {
    config: ParserConfig,
}

impl LasParser {
    /// Create a parser with the given options
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Options used by this parser
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse the full text of a LAS file
    pub fn parse(&self, text: &str) -> WellLogDocument {
        let mut section = Section::None;
        let mut builder = DocumentBuilder::new(self.config);
        let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);

        // `trim` also drops the `\r` of CRLF line endings
        for (line_num, raw_line) in text.split('\n').enumerate() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(next) = Section::from_header(line) {
                section = self.transition(section, next);
                trace!("Line {}: '{}' -> {:?}", line_num + 1, line, section);
                continue;
            }

            match section {
                Section::WellInfo => {
                    if !line.starts_with(COMMENT_PREFIX) {
                        if let Some(metadata) = tokenize_metadata_line(line) {
                            builder.push_metadata(metadata);
                        }
                    }
                }
                Section::CurveInfo => {
                    if !line.starts_with(COMMENT_PREFIX) {
                        if let Some(name) = curve_info::parse_curve_name(line) {
                            builder.push_curve_name(name);
                        }
                    }
                }
                Section::AsciiData => match ascii_data::parse_data_row(line) {
                    Some(row) => builder.push_row(row),
                    None => builder.reject_row(),
                },
                Section::None | Section::Unknown => {}
            }
        }

        builder.finish()
    }

    /// Next state after reading a section header
    fn transition(&self, current: Section, header: Section) -> Section {
        match (header, self.config.unknown_sections) {
            (Section::Unknown, UnknownSectionPolicy::RetainPrevious) => current,
            (header, _) => header,
        }
    }
}

/// Parse LAS text with default options
pub fn parse_las(text: &str) -> WellLogDocument {
    LasParser::default().parse(text)
}
