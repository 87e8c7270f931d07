//! Curve information line parsing

/// Extract the curve name from a curve information line
///
/// Only the text before the first `.` is kept; units and descriptions on
/// curve lines are not carried into the document.
pub fn parse_curve_name(line: &str) -> Option<&str> {
    let (name, _) = line.split_once('.')?;
    let name = name.trim();
    (!name.is_empty()).then_some(name)
}
