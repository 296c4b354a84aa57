//! Categorical (exact-match) filters.

use serde::Deserialize;
use serde::Serialize;

use crate::model::Row;
use crate::model::Value;

/// An exact-match predicate on one field, as picked from a dropdown.
///
/// A filter whose value is unset (`None`, null or the empty string) places no
/// constraint on the rows, which is how a "Block" or "Fee Status" dropdown
/// behaves while its placeholder option is selected.
///
/// # Example
///
/// ```
/// use hostelgrid_lib::model::Record;
/// use hostelgrid_lib::query::CategoricalFilter;
///
/// let filter = CategoricalFilter::eq("feeStatus", "paid");
/// assert!(filter.matches(&Record::new().set("feeStatus", "paid")));
/// assert!(!filter.matches(&Record::new().set("feeStatus", "unpaid")));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalFilter {
    /// Field key compared by this filter.
    pub field: String,
    /// Required value, or `None` for no constraint.
    #[serde(default)]
    pub value: Option<Value>,
}

impl CategoricalFilter {
    /// Creates an equality filter: `row[field] == value`.
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: Some(value.into()),
        }
    }

    /// Creates a filter with no value selected.
    pub fn unset(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: None,
        }
    }

    /// Returns `true` if this filter constrains the rows at all.
    pub fn is_active(&self) -> bool {
        self.value.as_ref().is_some_and(|v| !v.is_blank())
    }

    /// Returns `true` if the row passes this filter.
    ///
    /// Inactive filters pass every row. Active filters reject rows whose
    /// field is absent.
    pub fn matches<T: Row + ?Sized>(&self, row: &T) -> bool {
        let Some(expected) = self.value.as_ref().filter(|v| !v.is_blank()) else {
            return true;
        };
        row.field(&self.field)
            .is_some_and(|actual| actual.matches_exact(expected))
    }
}
