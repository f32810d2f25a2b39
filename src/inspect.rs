//! Capability queries over a model type's descriptor table.
//!
//! All queries are pure table lookups: absence is reported as `false`, never
//! as an error.
use crate::model::{FieldType, Model};

/// Returns true if the type declares a field with the exact name.
///
/// Matching is case-sensitive.
pub fn has_field<M: Model>(name: &str) -> bool {
    M::fields().iter().any(|field| field.name == name)
}

/// Returns true if the type declares a field with the exact name and the
/// exact declared type.
///
/// No coercion or widening: an `Integer` field never matches `Decimal`.
pub fn has_field_of_type<M: Model>(name: &str, kind: FieldType) -> bool {
    M::fields()
        .iter()
        .any(|field| field.name == name && field.kind == kind)
}

/// Returns true if the type registers at least one method with the name,
/// regardless of arity or overload count.
pub fn has_method<M: Model>(name: &str) -> bool {
    M::methods().iter().any(|method| *method == name)
}
