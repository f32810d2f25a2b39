use crate::grid::cell_position;
use chrono::{NaiveDate, NaiveDateTime};

/// A provider-typed cell value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Empty,
    /// Boolean values (true/false)
    Bool(bool),
    /// Integer numbers
    Integer(i64),
    /// Floating point numbers
    Decimal(f64),
    /// String values
    Text(String),
    /// Date and time values
    DateTime(NaiveDateTime),
    /// Error values such as `#DIV/0!`
    Error(String),
}

impl CellValue {
    /// Returns true if the cell holds no value.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// The raw text form of the value, if it has one.
    ///
    /// All regular values stringify; empty and error cells do not. Date and
    /// time values render in ISO form so downstream parsing stays uniform.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            CellValue::Bool(value) => Some(value.to_string()),
            CellValue::Integer(value) => Some(value.to_string()),
            CellValue::Decimal(value) => Some(value.to_string()),
            CellValue::Text(value) => Some(value.to_owned()),
            CellValue::DateTime(value) => Some(value.format("%Y-%m-%d %H:%M:%S").to_string()),
            CellValue::Error(_) => None,
        }
    }

    /// Returns true if the value's text form is non-empty.
    pub fn has_text(&self) -> bool {
        self.as_text().map(|text| !text.is_empty()).unwrap_or(false)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Decimal(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(value: NaiveDateTime) -> Self {
        CellValue::DateTime(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        CellValue::DateTime(value.and_hms_opt(0, 0, 0).expect("Midnight literal"))
    }
}

/// A single non-empty cell with its position and value.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    /// Row index (0-based)
    pub row: usize,
    /// Column index (0-based)
    pub column: usize,
    /// Cell value
    pub value: CellValue,
}

impl Cell {
    /// Returns the Excel-style cell reference (e.g., "A1", "B2").
    pub fn position(&self) -> String {
        cell_position(self.row, self.column)
    }
}
