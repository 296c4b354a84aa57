//! Identity-based row selection.

use std::fmt;
use std::sync::Arc;

/// Rows the user has selected, held by identity.
///
/// Two handles are the same row only if they point at the same allocation
/// (`Arc::ptr_eq`); equal field values do not make rows equal. Rows are kept
/// in the order they were selected and never appear twice.
pub struct Selection<T> {
    items: Vec<Arc<T>>,
}

impl<T> Selection<T> {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of selected rows.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if `row` is selected.
    pub fn contains(&self, row: &Arc<T>) -> bool {
        self.items.iter().any(|item| Arc::ptr_eq(item, row))
    }

    /// Selected rows in selection order.
    pub fn items(&self) -> &[Arc<T>] {
        &self.items
    }

    /// Flip the membership of `row`. Returns the new membership.
    pub fn toggle(&mut self, row: &Arc<T>) -> bool {
        let selected = !self.contains(row);
        self.set(row, selected);
        selected
    }

    /// Add or remove `row`. Returns `true` if the selection changed.
    pub fn set(&mut self, row: &Arc<T>, selected: bool) -> bool {
        match (selected, self.contains(row)) {
            (true, false) => {
                self.items.push(Arc::clone(row));
                true
            }
            (false, true) => {
                self.items.retain(|item| !Arc::ptr_eq(item, row));
                true
            }
            _ => false,
        }
    }

    /// Replace the selection with exactly `rows`.
    pub fn select_all(&mut self, rows: &[Arc<T>]) {
        self.items.clear();
        for row in rows {
            if !self.contains(row) {
                self.items.push(Arc::clone(row));
            }
        }
    }

    /// Empty the selection.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Drop selected rows that are not in `visible`.
    /// Returns `true` if anything was removed.
    pub fn retain_visible(&mut self, visible: &[Arc<T>]) -> bool {
        let before = self.items.len();
        self.items
            .retain(|item| visible.iter().any(|row| Arc::ptr_eq(item, row)));
        self.items.len() != before
    }

    /// Clone the selected handles.
    pub fn to_vec(&self) -> Vec<Arc<T>> {
        self.items.clone()
    }
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Selection<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<T> fmt::Debug for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("len", &self.items.len())
            .finish()
    }
}
