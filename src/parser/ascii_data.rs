//! ASCII data row parsing

/// One accepted data row; `None` marks a token that is not a number
pub type DataRow = Vec<Option<f64>>;

/// Parse a single whitespace-separated sample
///
/// Non-finite values (`NaN`, `inf`, `infinity`) are treated the same as an
/// unparseable token.
pub fn parse_sample(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a data line into a row
///
/// A row is accepted only when it has more than one token and its first
/// token (the depth) is a number. Any other line is rejected as a whole.
pub fn parse_data_row(line: &str) -> Option<DataRow> {
    let row: DataRow = line.split_whitespace().map(parse_sample).collect();

    if row.len() > 1 && row[0].is_some() {
        Some(row)
    } else {
        None
    }
}
