use crate::grid::{cell_position, Grid};
use crate::import::options::ImportOptions;
use crate::import::ImportError;
use tracing::debug;

/// The discovered shape of the tabular region: where the header row sits,
/// where the labels start, and which column carries the run numbers.
#[derive(Debug)]
pub(crate) struct SheetLayout {
    /// Row holding the column headers
    pub(crate) header_row: usize,
    /// Column of the first header (label column origin)
    pub(crate) origin: usize,
    /// Run-number column, one left of the origin
    pub(crate) run_column: usize,
    /// Header texts, indexed by offset from the origin
    pub(crate) headings: Vec<String>,
}

impl SheetLayout {
    /// Locates the header row and the column headers.
    ///
    /// The first cell with a non-empty text form, scanning row-major, fixes
    /// both the header row and the label column origin. The header texts are
    /// then read positionally: heading `i` is the text at `origin + i`, with
    /// as many headings as the header row has non-empty cells.
    pub(crate) fn discover(grid: &impl Grid, options: &ImportOptions) -> Result<Self, ImportError> {
        let in_range = |row: usize, column: usize| {
            options
                .range
                .map(|range| range.contains(row, column))
                .unwrap_or(true)
        };

        let first = grid
            .cells()
            .iter()
            .filter(|cell| in_range(cell.row, cell.column))
            .find(|cell| cell.value.has_text())
            .ok_or(ImportError::MissingHeaderRow)?;
        let header_row = first.row;
        let origin = first.column;

        let run_column = origin.checked_sub(1).ok_or(ImportError::MissingRunColumn {
            position: cell_position(header_row, origin),
        })?;

        let heading_count = grid
            .cells()
            .iter()
            .filter(|cell| cell.row == header_row && in_range(cell.row, cell.column))
            .filter(|cell| cell.value.has_text())
            .count();
        let mut headings = Vec::with_capacity(heading_count);
        for index in 0..heading_count {
            let text = grid
                .value_at(header_row, origin + index)?
                .as_text()
                .unwrap_or_default();
            headings.push(text);
        }

        debug!(header_row, origin, headings = headings.len(), "located header row");
        Ok(SheetLayout {
            header_row,
            origin,
            run_column,
            headings,
        })
    }
}
