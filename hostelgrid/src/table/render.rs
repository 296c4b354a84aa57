//! Render model for the Table component.
//!
//! [`Table::render`] turns the current state into a [`TableView`]: plain
//! data describing what to draw, independent of any output device. The
//! [`text`](crate::text) module draws it for a terminal.

use hostelgrid_lib::model::Row;
use hostelgrid_lib::query::Direction;

use super::Alignment;
use super::Cell;
use super::state::Table;

/// State of a tri-state checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Unchecked,
    Checked,
    /// Some but not all rows are selected.
    Indeterminate,
}

/// Everything needed to draw the table once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub header: HeaderRow,
    pub body: Body,
    /// Selection summary, present when rows are selected.
    pub footer: Option<Footer>,
}

/// The header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRow {
    /// Select-all checkbox, present when the table is selectable.
    pub checkbox: Option<CheckState>,
    pub cells: Vec<HeaderCell>,
}

/// One column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: String,
    pub label: String,
    pub align: Alignment,
    pub width: Option<u16>,
    /// Whether the header responds to clicks.
    pub sortable: bool,
    /// Direction indicator if this is the active sort column.
    pub sorted: Option<Direction>,
}

/// The table body. Exactly one of the three states is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Placeholder rows while data is loading.
    Loading {
        rows: usize,
        columns: usize,
        with_checkbox: bool,
    },
    /// A single placeholder row spanning `colspan` columns.
    Empty { message: String, colspan: usize },
    /// The displayed rows, in order.
    Rows(Vec<BodyRow>),
}

impl Body {
    /// Number of body lines that will be drawn.
    pub fn line_count(&self) -> usize {
        match self {
            Body::Loading { rows, .. } => *rows,
            Body::Empty { .. } => 1,
            Body::Rows(rows) => rows.len(),
        }
    }
}

/// One displayed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyRow {
    /// Position within the displayed rows.
    pub index: usize,
    /// Row checkbox, present when the table is selectable.
    pub checkbox: Option<bool>,
    pub selected: bool,
    pub hoverable: bool,
    pub cells: Vec<BodyCell>,
}

/// One body cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyCell {
    pub cell: Cell,
    pub align: Alignment,
}

/// Selection summary below the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footer {
    pub selected: usize,
    pub visible: usize,
}

impl Footer {
    /// Summary text, e.g. `"2 of 5 items selected"`.
    pub fn label(&self) -> String {
        format!("{} of {} items selected", self.selected, self.visible)
    }

    /// Label of the control that empties the selection.
    pub fn clear_label(&self) -> &'static str {
        "Clear selection"
    }
}

impl<T: Row> Table<T> {
    /// Build the render model for the current state.
    pub fn render(&self) -> TableView {
        let selectable = self.config.selectable;

        let header = HeaderRow {
            checkbox: selectable.then(|| self.header_checkbox()),
            cells: self
                .columns
                .iter()
                .map(|column| HeaderCell {
                    key: column.key.clone(),
                    label: column.header.clone(),
                    align: column.align,
                    width: column.width,
                    sortable: column.sortable,
                    sorted: self
                        .sort
                        .as_ref()
                        .filter(|s| column.sortable && s.column == column.key)
                        .map(|s| s.direction),
                })
                .collect(),
        };

        let body = if self.loading {
            Body::Loading {
                rows: self.config.skeleton_rows,
                columns: self.columns.len(),
                with_checkbox: selectable,
            }
        } else if self.rows.is_empty() {
            Body::Empty {
                message: self.config.empty_message.clone(),
                colspan: self.columns.len() + usize::from(selectable),
            }
        } else {
            Body::Rows(
                self.rows
                    .iter()
                    .enumerate()
                    .map(|(index, row)| {
                        let selected = self.selection.contains(row);
                        BodyRow {
                            index,
                            checkbox: selectable.then_some(selected),
                            selected,
                            hoverable: self.config.hoverable,
                            cells: self
                                .columns
                                .iter()
                                .map(|column| BodyCell {
                                    cell: column.cell(row, index),
                                    align: column.align,
                                })
                                .collect(),
                        }
                    })
                    .collect(),
            )
        };

        let footer = (selectable && !self.selection.is_empty()).then(|| Footer {
            selected: self.selection.len(),
            visible: self.rows.len(),
        });

        TableView {
            header,
            body,
            footer,
        }
    }
}
