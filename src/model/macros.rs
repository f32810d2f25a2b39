/// Declares a struct together with its [`Model`](crate::Model) implementation.
///
/// Field types are written as descriptor kinds (`Text`, `Integer`, `Decimal`,
/// `Date`) and expand to `String`, `i64`, `f64` and `Option<chrono::NaiveDate>`
/// respectively. A `#[label = "..."]` attribute on a field declares the display
/// label the tabular reader matches against column headers; fields without one
/// are skipped by the import path. An optional `methods { ... }` block
/// registers method names for capability queries.
///
/// `Default` is derived automatically; do not list it again.
///
/// ```
/// sheetmap::model! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub struct Employee {
///         #[label = "Name"]
///         pub name: Text,
///         #[label = "Age"]
///         pub age: Integer,
///         pub salary: Decimal,
///         #[label = "Hired"]
///         pub hired: Date,
///     }
///     methods { promote }
/// }
/// ```
#[macro_export]
macro_rules! model {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[label = $label:literal])?
                $fvis:vis $fname:ident : $kind:ident
            ),* $(,)?
        }
        $(methods { $($method:ident),* $(,)? })?
    ) => {
        $(#[$meta])*
        #[derive(Default)]
        $vis struct $name {
            $( $fvis $fname : $crate::__model_ty!($kind), )*
        }

        impl $crate::Model for $name {
            fn fields() -> &'static [$crate::FieldDescriptor] {
                const FIELDS: &[$crate::FieldDescriptor] = &[
                    $(
                        $crate::FieldDescriptor {
                            name: stringify!($fname),
                            kind: $crate::FieldType::$kind,
                            label: $crate::__model_label!($($label)?),
                        },
                    )*
                ];
                FIELDS
            }

            fn methods() -> &'static [&'static str] {
                const METHODS: &[&str] = &[ $($( stringify!($method), )*)? ];
                METHODS
            }

            fn get(&self, field: &str) -> Option<$crate::Value> {
                match field {
                    $( name if name == stringify!($fname) => $crate::__model_get!(self, $fname, $kind), )*
                    _ => None,
                }
            }

            fn set(&mut self, field: &str, value: $crate::Value) {
                match field {
                    $( name if name == stringify!($fname) => $crate::__model_set!(self, $fname, $kind, value), )*
                    _ => {}
                }
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __model_ty {
    (Text) => { ::std::string::String };
    (Integer) => { i64 };
    (Decimal) => { f64 };
    (Date) => { ::std::option::Option<$crate::__macro_support::NaiveDate> };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __model_label {
    () => { None };
    ($label:literal) => { Some($label) };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __model_get {
    ($model:expr, $field:ident, Text) => { Some($crate::Value::Text($model.$field.clone())) };
    ($model:expr, $field:ident, Integer) => { Some($crate::Value::Integer($model.$field)) };
    ($model:expr, $field:ident, Decimal) => { Some($crate::Value::Decimal($model.$field)) };
    ($model:expr, $field:ident, Date) => { $model.$field.map($crate::Value::Date) };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __model_set {
    ($model:expr, $field:ident, Text, $value:expr) => {
        if let $crate::Value::Text(value) = $value {
            $model.$field = value;
        }
    };
    ($model:expr, $field:ident, Integer, $value:expr) => {
        if let $crate::Value::Integer(value) = $value {
            $model.$field = value;
        }
    };
    ($model:expr, $field:ident, Decimal, $value:expr) => {
        if let $crate::Value::Decimal(value) = $value {
            $model.$field = value;
        }
    };
    ($model:expr, $field:ident, Date, $value:expr) => {
        if let $crate::Value::Date(value) = $value {
            $model.$field = Some(value);
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::model::{FieldType, Model, Value};
    use chrono::NaiveDate;

    crate::model! {
        #[derive(Debug, Clone, PartialEq)]
        pub struct Employee {
            #[label = "Name"]
            pub name: Text,
            #[label = "Age"]
            pub age: Integer,
            pub salary: Decimal,
            #[label = "Hired"]
            pub hired: Date,
        }
        methods { promote, transfer }
    }

    #[test]
    fn descriptor_table() {
        let fields = Employee::fields();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[0].name, "name");
        assert_eq!(fields[0].kind, FieldType::Text);
        assert_eq!(fields[0].label, Some("Name"));
        assert_eq!(fields[2].name, "salary");
        assert_eq!(fields[2].label, None);
        assert_eq!(fields[3].kind, FieldType::Date);
    }

    #[test]
    fn method_table() {
        assert_eq!(Employee::methods(), &["promote", "transfer"]);
    }

    #[test]
    fn get_and_set() {
        let mut employee = Employee::default();
        employee.set("name", Value::from("Ada"));
        employee.set("age", Value::from(36i64));
        assert_eq!(employee.name, "Ada");
        assert_eq!(employee.age, 36);
        assert_eq!(employee.get("name"), Some(Value::from("Ada")));
        assert_eq!(employee.get("missing"), None);
    }

    #[test]
    fn unset_date_reads_none() {
        let mut employee = Employee::default();
        assert_eq!(employee.get("hired"), None);

        let date = NaiveDate::from_ymd_opt(2021, 6, 1).unwrap();
        employee.set("hired", Value::Date(date));
        assert_eq!(employee.hired, Some(date));
        assert_eq!(employee.get("hired"), Some(Value::Date(date)));
    }

    #[test]
    fn mismatched_set_is_ignored() {
        let mut employee = Employee::default();
        employee.set("age", Value::from("not a number"));
        assert_eq!(employee.age, 0);
    }
}
