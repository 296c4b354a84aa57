//! Filter choices derived from the data.

use std::sync::Arc;

use crate::model::Row;
use crate::model::Value;

/// Returns the distinct defined values of `field`, in order of first
/// appearance.
///
/// Used to populate a categorical filter's choices from the rows currently
/// held by a screen. It is recomputed from the rows on every call, so the
/// choices can never go stale when the collection changes.
pub fn distinct_values<T: Row>(rows: &[Arc<T>], field: &str) -> Vec<Value> {
    let mut values: Vec<Value> = Vec::new();
    for row in rows {
        let Some(value) = row.defined_field(field) else {
            continue;
        };
        if !values.iter().any(|seen| seen.matches_exact(&value)) {
            values.push(value);
        }
    }
    values
}
