//! The query pipeline itself.

use std::collections::HashSet;
use std::sync::Arc;

use log::trace;

use super::CategoricalFilter;
use super::QueryState;
use super::SearchFilter;
use super::SortDirective;
use crate::model::Row;

/// Derives the visible, ordered subset of `rows`.
///
/// Rows are kept if they match the search text on at least one of the
/// `searchable` fields and pass every categorical filter. The survivors are
/// then stably sorted by `sort`, if given. Filtering always happens before
/// sorting, and the result only ever contains handles from `rows`.
///
/// The directive is applied to whatever column it names. Use
/// [`RowQuery::sortable_fields`] to restrict sorting to sortable columns.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use hostelgrid_lib::model::Record;
/// use hostelgrid_lib::query::{query, CategoricalFilter, SortDirective};
///
/// let rows = vec![
///     Arc::new(Record::new().set("name", "Raj").set("block", "A")),
///     Arc::new(Record::new().set("name", "Arun").set("block", "A")),
///     Arc::new(Record::new().set("name", "Priya").set("block", "B")),
/// ];
///
/// let visible = query(
///     &rows,
///     &["name"],
///     "",
///     &[CategoricalFilter::eq("block", "A")],
///     Some(&SortDirective::asc("name")),
/// );
/// assert!(Arc::ptr_eq(&visible[0], &rows[1]));
/// assert!(Arc::ptr_eq(&visible[1], &rows[0]));
/// ```
pub fn query<T, S>(
    rows: &[Arc<T>],
    searchable: &[S],
    search_text: &str,
    filters: &[CategoricalFilter],
    sort: Option<&SortDirective>,
) -> Vec<Arc<T>>
where
    T: Row,
    S: AsRef<str>,
{
    let search = SearchFilter::new(search_text);
    let active: Vec<&CategoricalFilter> = filters.iter().filter(|f| f.is_active()).collect();

    let mut visible: Vec<Arc<T>> = rows
        .iter()
        .filter(|row| search.matches::<T, S>(row, searchable))
        .filter(|row| active.iter().all(|f| f.matches::<T>(row)))
        .cloned()
        .collect();

    if let Some(sort) = sort {
        // slice::sort_by is stable: equal keys keep their filtered order.
        visible.sort_by(|a, b| sort.compare::<T>(a, b));
    }

    trace!(
        "query: {} of {} rows visible (search: {}, filters: {}, sort: {:?})",
        visible.len(),
        rows.len(),
        search.is_active(),
        active.len(),
        sort.map(|s| (&s.column, s.direction))
    );

    visible
}

/// Per-screen query configuration.
///
/// Names the fields the search box looks at and the fields a sort directive
/// may target. A directive for any other column is ignored and the filtered
/// rows are returned in input order.
///
/// A screen that displays a table should pass the table's sortable column
/// keys to [`sortable_fields`](Self::sortable_fields), so that only columns
/// marked sortable are ever sorted. Without that call every field is
/// sortable, as with the free [`query`] function.
///
/// # Example
///
/// ```
/// use hostelgrid_lib::query::{QueryState, RowQuery, SortDirective};
///
/// let students = RowQuery::new()
///     .search_fields(["name", "studentId", "roomNo"])
///     .sortable_fields(["name", "studentId", "admissionDate"]);
///
/// assert!(students.is_sortable("name"));
/// assert!(!students.is_sortable("roomNo"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowQuery {
    searchable: Vec<String>,
    sortable: Option<HashSet<String>>,
}

impl RowQuery {
    /// Creates a query with no searchable fields and unrestricted sorting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fields searched by free text.
    pub fn search_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.searchable = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Restricts sorting to the given fields.
    pub fn sortable_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sortable = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Returns the searchable fields.
    pub fn searchable(&self) -> &[String] {
        &self.searchable
    }

    /// Returns `true` if a directive on `column` would be applied.
    pub fn is_sortable(&self, column: &str) -> bool {
        self.sortable
            .as_ref()
            .is_none_or(|fields| fields.contains(column))
    }

    /// Runs the pipeline with explicit inputs.
    pub fn query<T: Row>(
        &self,
        rows: &[Arc<T>],
        search_text: &str,
        filters: &[CategoricalFilter],
        sort: Option<&SortDirective>,
    ) -> Vec<Arc<T>> {
        let sort = sort.filter(|s| {
            let applies = self.is_sortable(&s.column);
            if !applies {
                trace!("query: ignoring sort on non-sortable column '{}'", s.column);
            }
            applies
        });
        query(rows, &self.searchable, search_text, filters, sort)
    }

    /// Runs the pipeline with the caller's current [`QueryState`].
    pub fn run<T: Row>(&self, rows: &[Arc<T>], state: &QueryState) -> Vec<Arc<T>> {
        self.query(rows, &state.search, &state.filters, state.sort.as_ref())
    }
}
