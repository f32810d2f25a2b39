//! Collection helpers over model types: filtered ordering and id lookup.
use crate::inspect::has_field_of_type;
use crate::model::{Model, Value};

/// Filters a collection and sorts the survivors ascending by key.
///
/// The sort is stable, so equal keys keep their input order.
pub fn filter_ordered<T, K, I>(
    items: I,
    predicate: impl Fn(&T) -> bool,
    key: impl Fn(&T) -> K,
) -> Vec<T>
where
    K: Ord,
    I: IntoIterator<Item = T>,
{
    let mut selected: Vec<T> = items.into_iter().filter(|item| predicate(item)).collect();
    selected.sort_by_key(|item| key(item));
    selected
}

/// Filters a collection and sorts the survivors descending by key.
pub fn filter_ordered_desc<T, K, I>(
    items: I,
    predicate: impl Fn(&T) -> bool,
    key: impl Fn(&T) -> K,
) -> Vec<T>
where
    K: Ord,
    I: IntoIterator<Item = T>,
{
    let mut selected = filter_ordered(items, predicate, key);
    selected.reverse();
    selected
}

/// Finds the first item whose id field equals the given value.
///
/// The id field defaults to `"id"`; pass `id_field` when the type names it
/// differently. Returns `None` when the type declares no field of that name
/// with the value's kind, so the lookup never fails on a mismatched type.
pub fn find_by_id<'a, M, I>(items: I, id: &Value, id_field: Option<&str>) -> Option<&'a M>
where
    M: Model,
    I: IntoIterator<Item = &'a M>,
{
    let field = id_field.unwrap_or("id");
    if !has_field_of_type::<M>(field, id.kind()) {
        return None;
    }
    items
        .into_iter()
        .find(|item| item.get(field).as_ref() == Some(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::model! {
        #[derive(Debug, Clone, PartialEq)]
        struct Car {
            id: Integer,
            #[label = "Plate"]
            plate: Text,
            mileage: Integer,
        }
    }

    fn car(id: i64, plate: &str, mileage: i64) -> Car {
        Car { id, plate: plate.to_owned(), mileage }
    }

    #[test]
    fn filter_and_order() {
        let cars = vec![car(1, "AA", 90), car(2, "BB", 30), car(3, "CC", 60)];
        let ordered = filter_ordered(cars, |c| c.mileage > 20, |c| c.mileage);
        let plates: Vec<&str> = ordered.iter().map(|c| c.plate.as_str()).collect();
        assert_eq!(plates, vec!["BB", "CC", "AA"]);
    }

    #[test]
    fn filter_and_order_desc() {
        let cars = vec![car(1, "AA", 90), car(2, "BB", 30), car(3, "CC", 60)];
        let ordered = filter_ordered_desc(cars, |_| true, |c| c.mileage);
        let plates: Vec<&str> = ordered.iter().map(|c| c.plate.as_str()).collect();
        assert_eq!(plates, vec!["AA", "CC", "BB"]);
    }

    #[test]
    fn lookup_by_default_id_field() {
        let cars = vec![car(1, "AA", 90), car(2, "BB", 30)];
        let found = find_by_id(&cars, &Value::Integer(2), None);
        assert_eq!(found.map(|c| c.plate.as_str()), Some("BB"));
    }

    #[test]
    fn lookup_by_configured_id_field() {
        let cars = vec![car(1, "AA", 90), car(2, "BB", 30)];
        let found = find_by_id(&cars, &Value::from("AA"), Some("plate"));
        assert_eq!(found.map(|c| c.id), Some(1));
    }

    #[test]
    fn lookup_with_wrong_kind_returns_none() {
        let cars = vec![car(1, "AA", 90)];
        assert_eq!(find_by_id(&cars, &Value::from("1"), None), None);
        assert_eq!(find_by_id(&cars, &Value::Integer(1), Some("missing")), None);
    }
}
