//! Well information line tokenizer and null sentinel extraction
//!
//! Header lines have the shape `MNEM.UNIT  VALUE : DESCRIPTION`, with
//! producers disagreeing on the whitespace around the dot:
//!
//! ```text
//! STRT.F          8665.00:  START DEPTH
//! NULL    .         -999.2500         :Absent Value
//! NULL.         -999.2500             :Absent Value
//! ```

use crate::models::WellInfoEntry;
use regex::Regex;
use std::sync::LazyLock;

/// First signed decimal numeral in a value
static NUMERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[+-]?[0-9]+(?:\.[0-9]+)?").expect("numeral pattern is valid")
});

/// A tokenized well information line, borrowing from the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataLine<'a> {
    pub mnemonic: &'a str,
    pub unit: &'a str,
    pub value: &'a str,
    pub description: &'a str,
}

impl MetadataLine<'_> {
    /// True when this line declares the null sentinel
    pub fn is_null_declaration(&self) -> bool {
        self.mnemonic
            .eq_ignore_ascii_case(crate::constants::NULL_MNEMONIC)
    }

    /// Copy into an owned entry
    pub fn to_entry(&self) -> WellInfoEntry {
        WellInfoEntry {
            mnemonic: self.mnemonic.to_string(),
            unit: self.unit.to_string(),
            value: self.value.to_string(),
            description: self.description.to_string(),
        }
    }
}

fn is_mnemonic_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_unit_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '%' || c == '/'
}

/// Split a leading run of characters accepted by `pred`
fn take_while(text: &str, pred: impl Fn(char) -> bool) -> (&str, &str) {
    let end = text.find(|c: char| !pred(c)).unwrap_or(text.len());
    text.split_at(end)
}

/// Tokenize a well information line
///
/// Returns `None` for lines that are not metadata: no `.` before the first
/// colon, no leading mnemonic, or something other than whitespace between
/// the mnemonic and the dot.
pub fn tokenize_metadata_line(line: &str) -> Option<MetadataLine<'_>> {
    let (left, description) = match line.split_once(':') {
        Some((left, right)) => (left, right.trim()),
        None => (line, ""),
    };

    if !left.contains('.') {
        return None;
    }

    let (mnemonic, rest) = take_while(left.trim(), is_mnemonic_char);
    if mnemonic.is_empty() {
        return None;
    }

    let rest = rest.trim_start().strip_prefix('.')?.trim_start();
    let (unit, rest) = take_while(rest, is_unit_char);

    Some(MetadataLine {
        mnemonic,
        unit,
        value: rest.trim(),
        description,
    })
}

/// Pull the null sentinel out of a `NULL` line's value
///
/// The first signed decimal numeral anywhere in the text is used, so values
/// such as `-999.25 (absent)` still yield `-999.25`.
pub fn extract_null_sentinel(value: &str) -> Option<f64> {
    NUMERAL
        .find(value)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}
