//! Table events and the calls that raise them.

use std::fmt;
use std::sync::Arc;

use hostelgrid_lib::model::Row;
use hostelgrid_lib::query::Direction;
use hostelgrid_lib::query::SortDirective;
use log::debug;

use super::state::Table;

/// Intent reported by the table to its host.
///
/// Every mutating call returns `Option<TableEvent>`. `None` means the call
/// was ignored (not selectable, unknown row, non-sortable column) and
/// nothing changed.
pub enum TableEvent<T> {
    /// The selection changed. Carries the complete new selection in the
    /// order rows were selected.
    SelectionChanged(Vec<Arc<T>>),
    /// A sortable header was clicked. The host should re-run its query with
    /// this column and direction.
    SortChanged { column: String, direction: Direction },
}

impl<T> TableEvent<T> {
    /// The selection carried by a `SelectionChanged` event.
    pub fn selection(&self) -> Option<&[Arc<T>]> {
        match self {
            TableEvent::SelectionChanged(rows) => Some(rows),
            TableEvent::SortChanged { .. } => None,
        }
    }

    /// The directive described by a `SortChanged` event.
    pub fn sort_directive(&self) -> Option<SortDirective> {
        match self {
            TableEvent::SortChanged { column, direction } => {
                Some(SortDirective::new(column.clone(), *direction))
            }
            TableEvent::SelectionChanged(_) => None,
        }
    }
}

impl<T> Clone for TableEvent<T> {
    fn clone(&self) -> Self {
        match self {
            TableEvent::SelectionChanged(rows) => TableEvent::SelectionChanged(rows.clone()),
            TableEvent::SortChanged { column, direction } => TableEvent::SortChanged {
                column: column.clone(),
                direction: *direction,
            },
        }
    }
}

impl<T> fmt::Debug for TableEvent<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableEvent::SelectionChanged(rows) => f
                .debug_tuple("SelectionChanged")
                .field(&format_args!("{} rows", rows.len()))
                .finish(),
            TableEvent::SortChanged { column, direction } => f
                .debug_struct("SortChanged")
                .field("column", column)
                .field("direction", direction)
                .finish(),
        }
    }
}

impl<T: Row> Table<T> {
    /// Handle a click on the header of column `key`.
    ///
    /// Clicking the active column while it is ascending switches to
    /// descending; any other click sorts the clicked column ascending.
    /// Unknown and non-sortable columns are ignored.
    pub fn click_header(&mut self, key: &str) -> Option<TableEvent<T>> {
        let sortable = self.column(key).is_some_and(|c| c.sortable);
        if !sortable {
            debug!("table: ignoring header click on '{}'", key);
            return None;
        }

        let direction = match &self.sort {
            Some(active) if active.column == key && active.direction == Direction::Asc => {
                Direction::Desc
            }
            _ => Direction::Asc,
        };
        self.sort = Some(SortDirective::new(key, direction));

        debug!("table: sort changed to {} {}", key, direction.as_str());
        Some(TableEvent::SortChanged {
            column: key.to_string(),
            direction,
        })
    }

    /// Flip the selection of one displayed row.
    pub fn toggle_row(&mut self, row: &Arc<T>) -> Option<TableEvent<T>> {
        if !self.accepts_row_selection(row) {
            return None;
        }
        self.selection.toggle(row);
        Some(self.selection_changed())
    }

    /// Check or uncheck one displayed row. Returns `None` if the row already
    /// had that state.
    pub fn set_row_selected(&mut self, row: &Arc<T>, selected: bool) -> Option<TableEvent<T>> {
        if !self.accepts_row_selection(row) || !self.selection.set(row, selected) {
            return None;
        }
        Some(self.selection_changed())
    }

    /// Handle the header checkbox: select every displayed row, or none.
    ///
    /// Checking replaces the selection with exactly the displayed rows, so
    /// sticky selections of hidden rows are dropped.
    pub fn toggle_select_all(&mut self, checked: bool) -> Option<TableEvent<T>> {
        if !self.config.selectable {
            return None;
        }
        if checked {
            self.selection.select_all(&self.rows);
        } else {
            self.selection.clear();
        }
        Some(self.selection_changed())
    }

    /// Handle the footer's clear control.
    pub fn clear_selection(&mut self) -> Option<TableEvent<T>> {
        self.toggle_select_all(false)
    }

    fn accepts_row_selection(&self, row: &Arc<T>) -> bool {
        self.config.selectable && self.is_visible(row)
    }

    fn selection_changed(&self) -> TableEvent<T> {
        debug!(
            "table: selection changed ({} of {} rows)",
            self.selection.len(),
            self.rows.len()
        );
        TableEvent::SelectionChanged(self.selection.to_vec())
    }
}
