use std::fmt::Display;

/// Declared data types a model field can take.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FieldType {
    /// Variable-length strings
    Text,
    /// 64-bit signed integers
    Integer,
    /// Double-precision decimal numbers
    Decimal,
    /// Calendar dates without a time component
    Date,
}

impl FieldType {
    /// Returns the string representation of the field type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Integer => "integer",
            FieldType::Decimal => "decimal",
            FieldType::Date => "date",
        }
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Metadata for one named, typed field of a model type.
///
/// A descriptor optionally carries a display label: the column header text the
/// tabular reader matches against when binding spreadsheet columns to fields.
/// Fields without a label are invisible to the import path but still take part
/// in projection.
#[derive(Copy, Clone, Debug)]
pub struct FieldDescriptor {
    /// Field name as declared on the model type
    pub name: &'static str,
    /// Declared field type
    pub kind: FieldType,
    /// Display label for column header matching, if any
    pub label: Option<&'static str>,
}

impl FieldDescriptor {
    /// Creates a descriptor without a display label.
    pub const fn new(name: &'static str, kind: FieldType) -> Self {
        Self { name, kind, label: None }
    }

    /// Creates a descriptor carrying a display label.
    pub const fn labeled(name: &'static str, kind: FieldType, label: &'static str) -> Self {
        Self { name, kind, label: Some(label) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_type_names() {
        assert_eq!(FieldType::Text.as_str(), "text");
        assert_eq!(FieldType::Integer.as_str(), "integer");
        assert_eq!(FieldType::Decimal.as_str(), "decimal");
        assert_eq!(FieldType::Date.to_string(), "date");
    }

    #[test]
    fn descriptor_label() {
        let plain = FieldDescriptor::new("age", FieldType::Integer);
        assert_eq!(plain.label, None);

        let labeled = FieldDescriptor::labeled("name", FieldType::Text, "Name");
        assert_eq!(labeled.label, Some("Name"));
        assert_eq!(labeled.kind, FieldType::Text);
    }
}
