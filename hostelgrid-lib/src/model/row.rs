//! The Row trait

use std::collections::BTreeMap;
use std::collections::HashMap;

use super::Value;

/// A record that can be queried and displayed by field key.
///
/// This is the only way the query pipeline and the table read a row. A key
/// that the row does not know, and a field that is explicitly null, are both
/// "absent": sorting places them last in ascending order and rendering shows
/// a blank cell.
///
/// # Example
///
/// ```
/// use hostelgrid_lib::model::{Row, Value};
///
/// struct Room {
///     number: String,
///     capacity: u32,
/// }
///
/// impl Row for Room {
///     fn field(&self, key: &str) -> Option<Value> {
///         match key {
///             "number" => Some(Value::from(&self.number)),
///             "capacity" => Some(Value::from(self.capacity)),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Row {
    /// Returns the value stored under `key`, or `None` if the row has no
    /// such field.
    fn field(&self, key: &str) -> Option<Value>;

    /// Returns the value under `key` unless it is absent or null.
    fn defined_field(&self, key: &str) -> Option<Value> {
        self.field(key).filter(|v| !v.is_null())
    }
}

impl Row for HashMap<String, Value> {
    fn field(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }
}

impl Row for BTreeMap<String, Value> {
    fn field(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }
}
