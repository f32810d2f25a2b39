//! Field-by-field projection between two model types.
//!
//! Projection copies every target field whose name and declared type exactly
//! match a field on the source; everything else keeps the target's default.
//! It is total: there is no failure mode, only skipped fields.
use crate::inspect::has_field_of_type;
use crate::model::Model;

/// Projects one source object onto a freshly constructed target instance.
///
/// The source is not mutated. Re-projecting a projected value onto the same
/// type yields an equal value.
pub fn project<S: Model, T: Model>(source: &S) -> T {
    let mut target = T::default();
    for field in T::fields() {
        if has_field_of_type::<S>(field.name, field.kind) {
            if let Some(value) = source.get(field.name) {
                target.set(field.name, value);
            }
        }
    }
    target
}

/// Projects a slice of sources eagerly, preserving order and length.
pub fn project_many<S: Model, T: Model>(sources: &[S]) -> Vec<T> {
    sources.iter().map(|source| project(source)).collect()
}

/// Projects a streamed sequence lazily, element by element.
///
/// Each output element depends only on the corresponding input element, so the
/// iterator is safe to consume partially and stays as finite as its input.
pub fn project_iter<S, T, I>(sources: I) -> impl Iterator<Item = T>
where
    S: Model,
    T: Model,
    I: IntoIterator<Item = S>,
{
    sources.into_iter().map(|source| project(&source))
}
