//! # sheetmap
//!
//! Descriptor-driven utilities for adapting heterogeneous data sources into
//! strongly-typed application models without hand-written per-type code.
//!
//! ## Features
//!
//! - **Field-descriptor tables**: every participating type registers its
//!   fields (name, type, optional display label) once through the [`Model`]
//!   trait or the [`model!`] macro; all matching is a table lookup, no
//!   runtime introspection
//! - **Capability queries**: "has field", "has field of type", "has method"
//!   as pure, infallible checks
//! - **Object projection**: copy every name-and-type matching field from one
//!   typed object onto a new instance of another type, eagerly or lazily over
//!   whole collections
//! - **Tabular import**: read typed model instances out of a spreadsheet or
//!   any other grid source, discovering the header row, binding columns by
//!   display label and walking data rows by their run numbers
//! - **Pluggable grid providers**: in-memory grids for tests and programmatic
//!   data, calamine-backed Excel and OpenDocument workbooks for files
//!
//! ## Reading models from a spreadsheet
//!
//! ```no_run
//! use sheetmap::{read_models, ExcelGrid};
//!
//! sheetmap::model! {
//!     #[derive(Debug, Clone)]
//!     pub struct Employee {
//!         #[label = "Name"]
//!         pub name: Text,
//!         #[label = "Age"]
//!         pub age: Integer,
//!     }
//! }
//!
//! fn main() -> Result<(), sheetmap::Error> {
//!     let grid = ExcelGrid::open("employees.xlsx")?;
//!     let employees: Vec<Employee> = read_models(grid)?;
//!     println!("{} employees", employees.len());
//!     Ok(())
//! }
//! ```
mod error;
mod model;

pub mod grid;
pub mod import;
pub mod inspect;
pub mod project;
pub mod query;

pub use error::Error;
pub use grid::{cell_position, Cell, CellValue, ExcelGrid, Grid, GridError, MemoryGrid};
pub use import::{read_models, read_models_with, ImportError, ImportOptions, Range, RangeError};
pub use inspect::{has_field, has_field_of_type, has_method};
pub use model::{FieldDescriptor, FieldType, Model, Value};
pub use project::{project, project_iter, project_many};
pub use query::{filter_ordered, filter_ordered_desc, find_by_id};

#[doc(hidden)]
pub mod __macro_support {
    pub use chrono::NaiveDate;
}
