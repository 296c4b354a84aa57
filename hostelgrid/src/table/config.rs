//! Table configuration types.

use serde::Deserialize;
use serde::Serialize;

/// Default message shown when a table has no rows.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available";

/// Default number of placeholder rows shown while loading.
pub const DEFAULT_SKELETON_ROWS: usize = 5;

/// What happens to selected rows that disappear from the displayed set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Keep them selected. A row hidden by a search stays selected and comes
    /// back checked once it is visible again.
    #[default]
    Sticky,
    /// Drop them from the selection whenever new rows are set.
    PruneHidden,
}

/// Display options for a [`Table`](super::Table).
///
/// Deserializes from a partial table (missing keys take their defaults), so
/// a settings file only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Show row checkboxes, the header checkbox and the selection footer.
    pub selectable: bool,

    /// Highlight rows under the pointer.
    pub hoverable: bool,

    /// Text of the placeholder row when there are no rows.
    pub empty_message: String,

    /// Placeholder rows shown while loading.
    pub skeleton_rows: usize,

    pub selection_policy: SelectionPolicy,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            selectable: false,
            hoverable: true,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            skeleton_rows: DEFAULT_SKELETON_ROWS,
            selection_policy: SelectionPolicy::default(),
        }
    }
}

impl TableConfig {
    /// Create a config with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable row selection.
    pub fn with_selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Enable or disable hover highlighting.
    pub fn with_hoverable(mut self, hoverable: bool) -> Self {
        self.hoverable = hoverable;
        self
    }

    /// Set the empty-state message.
    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Set the number of loading placeholder rows.
    pub fn with_skeleton_rows(mut self, rows: usize) -> Self {
        self.skeleton_rows = rows;
        self
    }

    /// Set the selection policy.
    pub fn with_selection_policy(mut self, policy: SelectionPolicy) -> Self {
        self.selection_policy = policy;
        self
    }
}
