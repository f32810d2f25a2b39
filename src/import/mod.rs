//! # Tabular Model Reader
//!
//! Reads a list of typed model instances out of a grid whose column layout is
//! unknown up front. The header row is discovered by scanning for the first
//! text cell, columns are bound to model fields through their display labels,
//! and data rows are walked using the run-number column immediately left of
//! the headers: a strictly increasing 1, 2, 3, ... sequence whose end (a
//! blank, zero or unparsable cell) terminates the scan.
//!
//! Cell-level problems degrade softly: a value that cannot be coerced into
//! its field's type leaves the field at its default and the row is still
//! emitted. Structural problems (no header, duplicate labels, a broken
//! run-number sequence, a provider fault) abort the whole import with a
//! single failure carrying the original message.
mod binding;
mod layout;
mod options;

pub use options::{ImportOptions, Range, RangeError};

use crate::error::{Error, ResultMessage};
use crate::grid::{cell_position, CellValue, Grid, GridError};
use crate::import::binding::bind_fields;
use crate::import::layout::SheetLayout;
use crate::model::{FieldType, Model, Value};
use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error as ThisError;
use tracing::debug;

/// Errors raised while reading models from a grid.
#[derive(ThisError, Debug)]
pub enum ImportError {
    /// No cell with a non-empty text form exists
    #[error("Missing header row")]
    MissingHeaderRow,

    /// The header starts in the leftmost column, leaving no run-number column
    #[error("Missing run-number column left of '{position}'")]
    MissingRunColumn { position: String },

    /// Two model fields declare the same display label
    #[error("Duplicate display label '{label}'")]
    DuplicateLabel { label: String },

    /// The run-number column is not a contiguous 1, 2, 3, ... sequence
    #[error("Run number at '{position}' out of sequence: expected {expected}, found {found}")]
    RunNumberOutOfSequence {
        position: String,
        expected: i64,
        found: i64,
    },

    /// A grid provider fault
    #[error("{0}")]
    Grid(#[from] GridError),
}

/// Reads all records of the grid into model instances.
///
/// The grid is consumed and released when the call returns, on success and
/// on failure alike. Any structural fault surfaces as one generic import
/// failure carrying the original message; no partial list is returned.
pub fn read_models<M: Model, G: Grid>(grid: G) -> Result<Vec<M>, Error> {
    read_models_with(grid, &ImportOptions::default())
}

/// Reads records with explicit options (header search range, record limit).
pub fn read_models_with<M: Model, G: Grid>(grid: G, options: &ImportOptions) -> Result<Vec<M>, Error> {
    scan(&grid, options)
        .map_err(Error::from)
        .with_prefix("model import failed")
}

fn scan<M: Model>(grid: &impl Grid, options: &ImportOptions) -> Result<Vec<M>, ImportError> {
    let layout = SheetLayout::discover(grid, options)?;
    let bindings = bind_fields::<M>(&layout)?;

    let mut records: Vec<M> = Vec::new();
    // The physical probe cursor; data rows are addressed by run number. The
    // contiguity check below keeps the two in lockstep.
    let mut cursor = layout.header_row;
    loop {
        if options.limit.map(|limit| records.len() >= limit).unwrap_or(false) {
            break;
        }
        let probe_row = cursor + 1;
        let line_no = read_run_number(grid, probe_row, layout.run_column)?;
        if line_no == 0 {
            break;
        }
        let expected = records.len() as i64 + 1;
        if line_no != expected {
            return Err(ImportError::RunNumberOutOfSequence {
                position: cell_position(probe_row, layout.run_column),
                expected,
                found: line_no,
            });
        }

        let mut record = M::default();
        let data_row = layout.header_row + line_no as usize;
        for binding in &bindings {
            let value = grid.value_at(data_row, layout.origin + binding.column)?;
            if let Some(value) = coerce(&value, binding.field.kind) {
                record.set(binding.field.name, value);
            }
        }
        records.push(record);
        cursor += 1;
    }

    debug!(records = records.len(), "row scan complete");
    Ok(records)
}

/// Reads a run-number cell as an integer; a blank or unparsable cell reads 0.
fn read_run_number(grid: &impl Grid, row: usize, column: usize) -> Result<i64, ImportError> {
    let value = grid.value_at(row, column)?;
    Ok(value
        .as_text()
        .and_then(|text| text.trim().parse::<i64>().ok())
        .unwrap_or(0))
}

/// Coerces a cell's raw text form into a field value.
///
/// Returns `None` when the cell is empty or the text does not parse as the
/// field's type; the caller then leaves the field at its default.
fn coerce(value: &CellValue, kind: FieldType) -> Option<Value> {
    let text = value.as_text()?;
    match kind {
        FieldType::Text => Some(Value::Text(text)),
        FieldType::Integer => parse_integer(&text).map(Value::Integer),
        FieldType::Decimal => parse_decimal(&text).map(Value::Decimal),
        FieldType::Date => parse_date(&text).map(Value::Date),
    }
}

fn parse_integer(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok()
}

/// Parses a decimal number, tolerating a comma decimal separator and space or
/// no-break-space digit grouping.
fn parse_decimal(text: &str) -> Option<f64> {
    let text: String = text
        .trim()
        .chars()
        .filter(|character| *character != ' ' && *character != '\u{a0}')
        .collect();
    if let Ok(value) = text.parse::<f64>() {
        return Some(value);
    }
    if text.contains(',') && !text.contains('.') {
        return text.replace(',', ".").parse::<f64>().ok();
    }
    None
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d.%m.%Y"];

/// Parses a calendar date, discarding any time-of-day component.
fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, format) {
            return Some(datetime.date());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }
    None
}
