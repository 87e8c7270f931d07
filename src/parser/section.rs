//! Section state tracking for the line-oriented parse

use crate::constants::{
    ASCII_SECTION_MARKER, CURVE_SECTION_MARKER, SECTION_PREFIX, WELL_SECTION_MARKER,
};

/// The section the parser is currently reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Before the first section header
    #[default]
    None,
    /// `~W...` well information block
    WellInfo,
    /// `~Curve...` curve information block
    CurveInfo,
    /// `~ASCII...` data block
    AsciiData,
    /// Any other `~` block (version, parameters, other)
    Unknown,
}

impl Section {
    /// Classify a trimmed line as a section header
    ///
    /// Returns `None` when the line is not a header at all. Markers are
    /// matched case-insensitively as prefixes, so `~Curve`, `~CURVE` and
    /// `~curve Information` all select [`Section::CurveInfo`].
    pub fn from_header(line: &str) -> Option<Section> {
        if !line.starts_with(SECTION_PREFIX) {
            return None;
        }

        let lower = line.to_ascii_lowercase();
        let section = if lower.starts_with(WELL_SECTION_MARKER) {
            Section::WellInfo
        } else if lower.starts_with(CURVE_SECTION_MARKER) {
            Section::CurveInfo
        } else if lower.starts_with(ASCII_SECTION_MARKER) {
            Section::AsciiData
        } else {
            Section::Unknown
        };

        Some(section)
    }
}
