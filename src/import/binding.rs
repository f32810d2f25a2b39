use crate::import::layout::SheetLayout;
use crate::import::ImportError;
use crate::model::{FieldDescriptor, Model};
use std::collections::HashSet;
use tracing::{debug, warn};

/// A model field bound to a discovered column.
#[derive(Debug)]
pub(crate) struct ColumnBinding {
    /// The bound field's descriptor
    pub(crate) field: FieldDescriptor,
    /// Header index, as an offset from the label column origin
    pub(crate) column: usize,
}

/// Matches display labels against the discovered headers.
///
/// Each labeled field binds to the column whose header text equals its label
/// exactly. Labeled fields without a matching header stay unbound and are
/// never populated. Two fields declaring the same label fail the whole import
/// at bind time.
pub(crate) fn bind_fields<M: Model>(layout: &SheetLayout) -> Result<Vec<ColumnBinding>, ImportError> {
    let mut seen = HashSet::new();
    for field in M::fields() {
        if let Some(label) = field.label {
            if !seen.insert(label) {
                return Err(ImportError::DuplicateLabel {
                    label: label.to_owned(),
                });
            }
        }
    }

    let mut bindings = Vec::new();
    for field in M::fields() {
        let Some(label) = field.label else {
            continue;
        };
        match layout.headings.iter().position(|heading| heading == label) {
            Some(column) => bindings.push(ColumnBinding { field: *field, column }),
            None => warn!(field = field.name, label, "display label not found among headers"),
        }
    }
    debug!(bound = bindings.len(), "bound labeled fields to columns");
    Ok(bindings)
}
