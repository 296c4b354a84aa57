//! Table component - columns, row selection, and sort intent.
//!
//! The Table component provides:
//! - An ordered column schema with optional per-column cell renderers
//! - Row selection by identity, with select-all and an indeterminate state
//! - Sortable column headers (caller-controlled: clicks only emit intent)
//! - Distinct loading, empty and populated body states
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use hostelgrid::prelude::*;
//!
//! let columns = vec![
//!     Column::<Record>::new("name", "Student").sortable(),
//!     Column::new("feeStatus", "Fee Status")
//!         .render(|value, _row, _index| match value.and_then(Value::as_str) {
//!             Some("paid") => Cell::badge("Paid", Tone::Success),
//!             Some(other) => Cell::badge(other, Tone::Warning),
//!             None => Cell::Blank,
//!         }),
//! ];
//!
//! let mut table = Table::new(columns).with_config(TableConfig::default().with_selectable(true));
//! table.set_rows(vec![Arc::new(Record::new().set("name", "Arun Kumar"))]);
//!
//! if let Some(TableEvent::SortChanged { column, direction }) = table.click_header("name") {
//!     // re-run the query pipeline with SortDirective::new(column, direction)
//! #   assert_eq!(direction, Direction::Asc);
//! #   assert_eq!(column, "name");
//! }
//! ```

mod column;
mod config;
mod events;
mod render;
mod selection;
mod state;

pub use column::{Alignment, Cell, CellRenderer, Column, Tone};
pub use config::{SelectionPolicy, TableConfig};
pub use events::TableEvent;
pub use render::{Body, BodyCell, BodyRow, CheckState, Footer, HeaderCell, HeaderRow, TableView};
pub use selection::Selection;
pub use state::Table;
