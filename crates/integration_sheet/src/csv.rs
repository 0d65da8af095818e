//! Quote-aware CSV decoding
//!
//! The sheet exports are plain comma-separated text with double quotes
//! around cells that contain commas. Decoding is line-oriented: split on
//! line breaks, decode each line independently, index rows and columns
//! zero-based. Out-of-range access yields an empty string, never an error:
//! the extraction layer addresses fixed coordinates and must survive a
//! shorter-than-expected sheet.

/// Decode one line of comma-separated text.
///
/// A double quote toggles the "inside quoted field" state, during which a
/// comma is literal text. The trailing field is pushed even without a
/// closing delimiter.
#[must_use]
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(ch),
        }
    }
    fields.push(field);
    fields
}

/// A decoded multi-line payload with total, trimmed cell access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvGrid {
    rows: Vec<Vec<String>>,
}

impl CsvGrid {
    /// Decode a full payload: one [`parse_line`] call per line.
    #[must_use]
    pub fn parse(payload: &str) -> Self {
        Self {
            rows: payload.lines().map(parse_line).collect(),
        }
    }

    /// Cell at (row, col), zero-based. Missing cells come back empty; the
    /// gviz export wraps cells in stray quotes, so surrounding quote
    /// characters and whitespace are stripped.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> String {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(|cell| {
                cell.trim_matches(|c: char| c == '"' || c == '\'' || c.is_whitespace())
                    .to_string()
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
