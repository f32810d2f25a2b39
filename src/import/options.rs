use regex::Regex;
use thiserror::Error;

/// Errors related to Excel-style range parsing.
#[derive(Error, Debug)]
pub enum RangeError {
    #[error("Invalid range format '{0}'")]
    FormatError(String),
}

/// Per-call options for the tabular reader.
#[derive(Clone, Debug, Default)]
pub struct ImportOptions {
    /// Restricts which cells take part in header discovery, so decorative
    /// blocks above or left of the table are skipped. Unset scans everything.
    pub range: Option<Range>,

    /// Maximum number of records to read.
    pub limit: Option<usize>,
}

/// Represents an Excel-style cell range with optional boundaries.
#[derive(Copy, Clone, Debug)]
pub struct Range {
    /// Lower row bound (0-based index), None for unbounded
    pub row_lower_bound: Option<usize>,
    /// Upper row bound (0-based index), None for unbounded
    pub row_upper_bound: Option<usize>,
    /// Lower column bound (0-based index), None for unbounded
    pub col_lower_bound: Option<usize>,
    /// Upper column bound (0-based index), None for unbounded
    pub col_upper_bound: Option<usize>,
}

impl Range {
    /// Checks if a cell at (row, col) falls inside the range.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.row_lower_bound.map(|bound| bound <= row).unwrap_or(true)
            && self.row_upper_bound.map(|bound| row <= bound).unwrap_or(true)
            && self.col_lower_bound.map(|bound| bound <= col).unwrap_or(true)
            && self.col_upper_bound.map(|bound| col <= bound).unwrap_or(true)
    }
}

impl TryFrom<&str> for Range {
    type Error = RangeError;

    /// Parses an Excel-style range string (e.g., "A1", "B2:C5", "A", "1:10").
    /// Supports single cells, ranges, and partial ranges (columns or rows only).
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let pattern = Regex::new(r"^([A-Z]*)(\d*)(:([A-Z]*)(\d*))?$").expect("Hardcode regex pattern");
        let value = value.to_ascii_uppercase();
        let captures = pattern
            .captures(value.as_str())
            .ok_or(RangeError::FormatError(value.to_owned()))?;
        Ok(Range {
            col_lower_bound: captures
                .get(1)
                .map(|matcher| matcher.as_str())
                .and_then(col_to_index),
            row_lower_bound: captures
                .get(2)
                .map(|matcher| matcher.as_str())
                .and_then(row_to_index),
            col_upper_bound: captures
                .get(4)
                .map(|matcher| matcher.as_str())
                .and_then(col_to_index),
            row_upper_bound: captures
                .get(5)
                .map(|matcher| matcher.as_str())
                .and_then(row_to_index),
        })
    }
}

impl Default for Range {
    /// Creates an unbounded range (selects the entire grid).
    fn default() -> Self {
        Range {
            row_lower_bound: None,
            row_upper_bound: None,
            col_lower_bound: None,
            col_upper_bound: None,
        }
    }
}

/// Converts an Excel-style column name ("A", "AB") to a 0-based index.
fn col_to_index(text: &str) -> Option<usize> {
    if text.is_empty() {
        return None;
    }
    let mut index = 0usize;
    for character in text.chars() {
        index = index * 26 + (character as usize - 'A' as usize + 1);
    }
    Some(index - 1)
}

/// Converts a 1-based row number string to a 0-based index.
fn row_to_index(text: &str) -> Option<usize> {
    text.parse::<usize>().ok().filter(|row| *row > 0).map(|row| row - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_cell() {
        let range = Range::try_from("B2").unwrap();
        assert_eq!(range.col_lower_bound, Some(1));
        assert_eq!(range.row_lower_bound, Some(1));
        assert_eq!(range.col_upper_bound, None);
        assert_eq!(range.row_upper_bound, None);
    }

    #[test]
    fn parses_full_range() {
        let range = Range::try_from("b2:d9").unwrap();
        assert_eq!(range.col_lower_bound, Some(1));
        assert_eq!(range.row_lower_bound, Some(1));
        assert_eq!(range.col_upper_bound, Some(3));
        assert_eq!(range.row_upper_bound, Some(8));
    }

    #[test]
    fn parses_row_and_column_only_ranges() {
        let rows = Range::try_from("2:10").unwrap();
        assert_eq!(rows.row_lower_bound, Some(1));
        assert_eq!(rows.row_upper_bound, Some(9));
        assert_eq!(rows.col_lower_bound, None);

        let columns = Range::try_from("B:AA").unwrap();
        assert_eq!(columns.col_lower_bound, Some(1));
        assert_eq!(columns.col_upper_bound, Some(26));
        assert_eq!(columns.row_lower_bound, None);
    }

    #[test]
    fn rejects_malformed_ranges() {
        assert!(Range::try_from("2B").is_err());
        assert!(Range::try_from("B2:").is_ok());
        assert!(Range::try_from("B-2").is_err());
    }

    #[test]
    fn containment() {
        let range = Range::try_from("B2:D4").unwrap();
        assert!(range.contains(1, 1));
        assert!(range.contains(3, 3));
        assert!(!range.contains(0, 1));
        assert!(!range.contains(1, 4));
        assert!(Range::default().contains(99, 99));
    }
}
