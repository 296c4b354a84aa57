//! Caller-owned query state.

use serde::Deserialize;
use serde::Serialize;

use super::CategoricalFilter;
use super::SortDirective;
use crate::model::Value;

/// What the user has typed and picked on a screen.
///
/// The table never owns this: the hosting screen updates it from input and
/// sort-change events, then re-runs [`RowQuery::run`](super::RowQuery::run).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryState {
    /// Raw search box text.
    pub search: String,
    /// Categorical filters (combined with AND).
    pub filters: Vec<CategoricalFilter>,
    /// Active sort directive.
    pub sort: Option<SortDirective>,
}

impl QueryState {
    /// Creates an empty state: no search, no filters, input order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search text (builder pattern).
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    /// Sets a filter value (builder pattern).
    pub fn with_filter(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_filter(field, value);
        self
    }

    /// Sets the sort directive (builder pattern).
    pub fn with_sort(mut self, sort: SortDirective) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Selects a value for `field`, replacing any previous choice for it.
    pub fn set_filter(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        let filter = CategoricalFilter::eq(field, value);
        match self.filters.iter_mut().find(|f| f.field == filter.field) {
            Some(existing) => *existing = filter,
            None => self.filters.push(filter),
        }
    }

    /// Removes the filter on `field`.
    pub fn clear_filter(&mut self, field: &str) {
        self.filters.retain(|f| f.field != field);
    }

    /// Returns the value currently selected for `field`.
    pub fn filter_value(&self, field: &str) -> Option<&Value> {
        self.filters
            .iter()
            .find(|f| f.field == field)
            .and_then(|f| f.value.as_ref())
    }
}
