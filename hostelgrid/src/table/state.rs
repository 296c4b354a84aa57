//! Table state.

use std::sync::Arc;

use hostelgrid_lib::model::Row;
use hostelgrid_lib::query::SortDirective;
use log::debug;

use super::CheckState;
use super::Column;
use super::SelectionPolicy;
use super::TableConfig;
use super::TableEvent;
use super::selection::Selection;

/// Interactive table over rows of type `T`.
///
/// The table holds the rows it is told to display, in the order given. It
/// owns the selection and the active sort column, but never reorders or
/// filters rows: header clicks only report a [`TableEvent::SortChanged`]
/// for the host to act on.
pub struct Table<T> {
    pub(super) columns: Vec<Column<T>>,
    pub(super) rows: Vec<Arc<T>>,
    pub(super) config: TableConfig,
    pub(super) loading: bool,
    pub(super) selection: Selection<T>,
    pub(super) sort: Option<SortDirective>,
}

impl<T: Row> Table<T> {
    /// Create a table with the given columns and no rows.
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            config: TableConfig::default(),
            loading: false,
            selection: Selection::new(),
            sort: None,
        }
    }

    /// Set the display options (builder pattern).
    pub fn with_config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the initial rows (builder pattern).
    pub fn with_rows(mut self, rows: Vec<Arc<T>>) -> Self {
        self.rows = rows;
        self
    }

    /// Display options.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    // =========================================================================
    // Columns and rows
    // =========================================================================

    /// Columns in display order.
    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// Replace the column schema.
    pub fn set_columns(&mut self, columns: Vec<Column<T>>) {
        self.columns = columns;
    }

    /// Look up a column by key.
    pub fn column(&self, key: &str) -> Option<&Column<T>> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Keys of the sortable columns.
    pub fn sortable_keys(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.sortable)
            .map(|c| c.key.as_str())
            .collect()
    }

    /// Rows currently displayed.
    pub fn rows(&self) -> &[Arc<T>] {
        &self.rows
    }

    /// Replace the displayed rows, usually with a fresh query result.
    ///
    /// With [`SelectionPolicy::PruneHidden`], selected rows missing from
    /// `rows` are deselected and a `SelectionChanged` event is returned.
    pub fn set_rows(&mut self, rows: Vec<Arc<T>>) -> Option<TableEvent<T>> {
        self.rows = rows;
        if self.config.selection_policy == SelectionPolicy::PruneHidden
            && self.selection.retain_visible(&self.rows)
        {
            debug!(
                "table: pruned selection to {} visible rows",
                self.selection.len()
            );
            return Some(TableEvent::SelectionChanged(self.selection.to_vec()));
        }
        None
    }

    /// Returns `true` if `row` is one of the displayed rows.
    pub fn is_visible(&self, row: &Arc<T>) -> bool {
        self.rows.iter().any(|r| Arc::ptr_eq(r, row))
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Show or hide the loading placeholder.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Returns `true` while the loading placeholder is shown.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// The current selection.
    pub fn selection(&self) -> &Selection<T> {
        &self.selection
    }

    /// Number of selected rows.
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Returns `true` if `row` is selected.
    pub fn is_selected(&self, row: &Arc<T>) -> bool {
        self.selection.contains(row)
    }

    /// Returns `true` if there are rows and exactly as many are selected.
    pub fn all_selected(&self) -> bool {
        !self.rows.is_empty() && self.selection.len() == self.rows.len()
    }

    /// Returns `true` if some, but fewer than all, rows are selected.
    pub fn indeterminate(&self) -> bool {
        let selected = self.selection.len();
        selected > 0 && selected < self.rows.len()
    }

    /// State of the select-all checkbox in the header.
    pub fn header_checkbox(&self) -> CheckState {
        if self.all_selected() {
            CheckState::Checked
        } else if self.indeterminate() {
            CheckState::Indeterminate
        } else {
            CheckState::Unchecked
        }
    }

    // =========================================================================
    // Sort
    // =========================================================================

    /// The active sort directive, if a header has been clicked.
    pub fn sort(&self) -> Option<&SortDirective> {
        self.sort.as_ref()
    }

    /// Set the active sort directive without emitting an event.
    ///
    /// Used to restore a saved sort, so the header shows the right indicator
    /// and the next click toggles from it.
    pub fn set_sort(&mut self, sort: Option<SortDirective>) {
        self.sort = sort;
    }
}
