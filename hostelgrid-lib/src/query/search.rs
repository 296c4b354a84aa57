//! Free-text search.

use crate::model::Row;

/// Case-insensitive substring search across several fields.
///
/// Built once per query from the raw search box text. A blank or
/// whitespace-only query matches every row; any other query is used as
/// typed, without trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    needle: Option<String>,
}

impl SearchFilter {
    /// Prepares a search for the given text.
    pub fn new(text: &str) -> Self {
        let needle = if text.trim().is_empty() {
            None
        } else {
            Some(text.to_lowercase())
        };
        Self { needle }
    }

    /// Returns `true` if this search filters anything.
    pub fn is_active(&self) -> bool {
        self.needle.is_some()
    }

    /// Returns `true` if any of `fields` contains the search text.
    pub fn matches<T, S>(&self, row: &T, fields: &[S]) -> bool
    where
        T: Row + ?Sized,
        S: AsRef<str>,
    {
        let Some(needle) = &self.needle else {
            return true;
        };
        fields.iter().any(|field| {
            row.field(field.as_ref())
                .and_then(|v| v.search_text())
                .is_some_and(|text| text.to_lowercase().contains(needle.as_str()))
        })
    }
}
