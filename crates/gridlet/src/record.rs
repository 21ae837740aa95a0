//! Input records and scalar stringification.

use serde::Serialize;
use serde_json::Value;

use crate::error::TableError;

/// One row's source data: an insertion-ordered key → value mapping.
///
/// `serde_json` is built with `preserve_order`, so iterating a record
/// yields keys in insertion order. Column derivation relies on that to
/// keep column order deterministic.
pub type Record = serde_json::Map<String, Value>;

/// Canonical string form of a cell value.
///
/// Strings pass through unquoted, numbers and bools via their `Display`
/// form, and `Null` renders empty, the same as an absent key. Non-scalar
/// values fall back to compact JSON; they are measured and rendered like
/// any other string.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Converts typed rows into records via serde.
///
/// Each row must serialize to a JSON object; anything else is a
/// [`TableError::NotAnObject`].
///
/// ```rust
/// use serde::Serialize;
/// use gridlet::records_from;
///
/// #[derive(Serialize)]
/// struct Person { name: String, age: u32 }
///
/// let rows = vec![Person { name: "Foo".into(), age: 12 }];
/// let records = records_from(&rows).unwrap();
/// assert_eq!(records[0]["name"], "Foo");
/// ```
pub fn records_from<T: Serialize>(rows: &[T]) -> Result<Vec<Record>, TableError> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| match serde_json::to_value(row)? {
            Value::Object(map) => Ok(map),
            _ => Err(TableError::NotAnObject { index }),
        })
        .collect()
}
