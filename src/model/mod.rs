//! # Model Descriptor Module
//!
//! Every type that takes part in projection or tabular import registers a
//! field-descriptor table: the list of its named, typed fields, the display
//! labels used for column binding, and dynamic `get`/`set` accessors. The
//! table is built once at compile time, either by implementing [`Model`] by
//! hand or through the [`model!`](crate::model!) macro, so capability checks
//! are plain slice lookups with no runtime introspection.
mod field;
mod macros;
mod value;

pub use field::{FieldDescriptor, FieldType};
pub use value::Value;

/// A type with a registered field-descriptor table.
///
/// `Default` supplies the blank instance that projection and import populate;
/// fields that are never set keep their default value.
pub trait Model: Default {
    /// The descriptor table: one entry per declared field, in declaration order.
    fn fields() -> &'static [FieldDescriptor];

    /// Names of the methods the type declares, for capability queries.
    fn methods() -> &'static [&'static str] {
        &[]
    }

    /// Reads the current value of the named field.
    ///
    /// Returns `None` when the field does not exist, or when an optional field
    /// (a date) holds no value.
    fn get(&self, field: &str) -> Option<Value>;

    /// Writes a value into the named field.
    ///
    /// Total: an unknown field name or a value of the wrong kind is ignored.
    fn set(&mut self, field: &str, value: Value);
}
