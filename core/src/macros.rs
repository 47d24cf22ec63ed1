/// Builds a `Vec<Value>` from a comma-separated list of convertible
/// expressions.
///
/// ```
/// use sqlbind_core::{Value, values};
///
/// let params = values![5, "name", 2.5, None::<i32>];
/// assert_eq!(params[3], Value::Null);
/// ```
#[macro_export]
macro_rules! values {
    ($($value:expr),* $(,)?) => {
        ::std::vec![$($crate::Value::from($value)),*]
    };
}

/// Builds a keyed [`Value::Map`](crate::Value::Map) preserving insertion
/// order, for `?a` bulk-assignment expansion.
///
/// ```
/// use sqlbind_core::fields;
///
/// let row = fields! { "id" => 1, "name" => "x" };
/// assert_eq!(row.kind(), "map");
/// ```
#[macro_export]
macro_rules! fields {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut map = $crate::indexmap::IndexMap::new();
        $(
            map.insert(
                ::std::borrow::Cow::from($key),
                $crate::Value::from($value),
            );
        )*
        $crate::Value::Map(map)
    }};
}
