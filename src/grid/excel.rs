use crate::grid::cell::{Cell, CellValue};
use crate::grid::memory::MemoryGrid;
use crate::grid::{Grid, GridError};
use calamine::{open_workbook_auto, Data, Range, Reader};
use chrono::{NaiveDate, NaiveDateTime};
use std::path::Path;

/// Spreadsheet-file grid provider backed by calamine.
///
/// Reads the first worksheet of an Excel (`.xlsx`, `.xlsm`, `.xlsb`, `.xls`)
/// or OpenDocument (`.ods`) workbook, with the format detected from the file.
/// All cell data is materialized at open time, so reads never touch the file
/// afterwards.
pub struct ExcelGrid {
    store: MemoryGrid,
}

impl ExcelGrid {
    /// Opens a workbook and loads its first sheet.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, GridError> {
        let mut workbook = open_workbook_auto(path)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(GridError::SheetNotFound)??;
        Ok(Self::from_range(&range))
    }

    fn from_range(range: &Range<Data>) -> Self {
        let start = range
            .start()
            .map(|(row, column)| (row as usize, column as usize))
            .unwrap_or((0, 0));
        let cells = range
            .used_cells()
            .map(|(row, column, data)| Cell {
                row: start.0 + row,
                column: start.1 + column,
                value: convert(data),
            })
            .collect();
        Self {
            store: MemoryGrid::from_cells(cells),
        }
    }
}

impl Grid for ExcelGrid {
    fn cells(&self) -> &[Cell] {
        self.store.cells()
    }

    fn value_at(&self, row: usize, column: usize) -> Result<CellValue, GridError> {
        self.store.value_at(row, column)
    }
}

/// Adapts a calamine cell value to the grid's value model.
///
/// Excel serial datetimes become [`CellValue::DateTime`]; ISO datetime strings
/// are parsed when possible and fall back to text otherwise.
fn convert(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::Bool(value) => CellValue::Bool(*value),
        Data::Int(value) => CellValue::Integer(*value),
        Data::Float(value) => CellValue::Decimal(*value),
        Data::String(value) => CellValue::Text(value.to_owned()),
        Data::DateTime(value) => value
            .as_datetime()
            .map(CellValue::DateTime)
            .unwrap_or(CellValue::Empty),
        Data::DateTimeIso(value) => parse_iso_datetime(value)
            .map(CellValue::DateTime)
            .unwrap_or_else(|| CellValue::Text(value.to_owned())),
        Data::DurationIso(value) => CellValue::Text(value.to_owned()),
        Data::Error(value) => CellValue::Error(value.to_string()),
    }
}

fn parse_iso_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::CellErrorType;

    #[test]
    fn converts_scalar_values() {
        assert_eq!(convert(&Data::Empty), CellValue::Empty);
        assert_eq!(convert(&Data::Bool(true)), CellValue::Bool(true));
        assert_eq!(convert(&Data::Int(7)), CellValue::Integer(7));
        assert_eq!(convert(&Data::Float(2.5)), CellValue::Decimal(2.5));
        assert_eq!(
            convert(&Data::String("abc".to_owned())),
            CellValue::Text("abc".to_owned())
        );
    }

    #[test]
    fn converts_iso_datetime_to_datetime() {
        let value = convert(&Data::DateTimeIso("2024-03-15T14:30:00".to_owned()));
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        assert_eq!(value, CellValue::DateTime(expected));
    }

    #[test]
    fn unparseable_iso_datetime_falls_back_to_text() {
        let value = convert(&Data::DateTimeIso("monday morning".to_owned()));
        assert_eq!(value, CellValue::Text("monday morning".to_owned()));
    }

    #[test]
    fn converts_error_values() {
        let value = convert(&Data::Error(CellErrorType::Div0));
        assert_eq!(value, CellValue::Error("#DIV/0!".to_owned()));
    }

    #[test]
    fn from_range_keeps_absolute_coordinates() {
        let mut range: Range<Data> = Range::new((2, 1), (3, 2));
        range.set_value((2, 1), Data::String("Name".to_owned()));
        range.set_value((3, 2), Data::Int(41));

        let grid = ExcelGrid::from_range(&range);
        assert_eq!(grid.cells().len(), 2);
        assert_eq!(grid.value_at(2, 1).unwrap(), CellValue::Text("Name".to_owned()));
        assert_eq!(grid.value_at(3, 2).unwrap(), CellValue::Integer(41));
        assert_eq!(grid.value_at(0, 0).unwrap(), CellValue::Empty);
    }
}
