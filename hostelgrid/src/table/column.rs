//! Column schema and cell content.

use std::fmt;
use std::sync::Arc;

use hostelgrid_lib::model::Row;
use hostelgrid_lib::model::Value;
use serde::Deserialize;
use serde::Serialize;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Colour family of a badge cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Neutral,
    Success,
    Warning,
    Danger,
    Info,
}

/// Displayable content of one table cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cell {
    /// Nothing to show (absent field, synthetic column without renderer).
    #[default]
    Blank,
    /// A single run of text.
    Text(String),
    /// Stacked lines, e.g. a name above an email address.
    Lines(Vec<String>),
    /// A short status label.
    Badge { label: String, tone: Tone },
}

impl Cell {
    /// Creates a text cell.
    pub fn text(text: impl Into<String>) -> Self {
        Cell::Text(text.into())
    }

    /// Creates a multi-line cell.
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Cell::Lines(lines.into_iter().map(Into::into).collect())
    }

    /// Creates a badge cell.
    pub fn badge(label: impl Into<String>, tone: Tone) -> Self {
        Cell::Badge {
            label: label.into(),
            tone,
        }
    }

    /// Displays a raw field value as-is. Absent and null values are blank.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Cell::Blank,
            Some(value) => Cell::Text(value.to_string()),
        }
    }

    /// Returns `true` for a blank cell.
    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Blank)
    }
}

/// Custom cell renderer: `(value, row, index) -> Cell`.
///
/// `index` is the row's position within the rows currently rendered.
pub type CellRenderer<T> = Arc<dyn Fn(Option<&Value>, &T, usize) -> Cell + Send + Sync>;

/// Column configuration.
///
/// A column reads one field of the row by `key` and displays it under
/// `header`. The key may also be synthetic (say `"actions"`) when a renderer
/// builds the cell from the whole row.
///
/// # Examples
///
/// ```
/// use hostelgrid::{Alignment, Cell, Column};
/// use hostelgrid_lib::model::Record;
///
/// let columns: Vec<Column<Record>> = vec![
///     Column::new("studentId", "Student ID").sortable(),
///     Column::new("roomNo", "Room No").width(8),
///     Column::new("actions", "Actions")
///         .align(Alignment::Center)
///         .render(|_, _, index| Cell::text(format!("#{}", index + 1))),
/// ];
/// ```
pub struct Column<T> {
    /// Field key this column reads.
    pub key: String,
    /// Column header text.
    pub header: String,
    /// Whether clicking the header raises a sort-change event.
    pub sortable: bool,
    /// Horizontal alignment (layout only).
    pub align: Alignment,
    /// Preferred width in terminal columns, if any (layout only).
    pub width: Option<u16>,
    render: Option<CellRenderer<T>>,
}

impl<T> Column<T> {
    /// Create a new column reading `key`, labelled `header`.
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            sortable: false,
            align: Alignment::Left,
            width: None,
            render: None,
        }
    }

    /// Make the column sortable.
    ///
    /// Sortable columns show sort indicators in the header and respond to
    /// clicks with a sort-change event.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set a preferred width.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Override how the cell is displayed.
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(Option<&Value>, &T, usize) -> Cell + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    /// Returns `true` if this column has a custom renderer.
    pub fn has_renderer(&self) -> bool {
        self.render.is_some()
    }
}

impl<T: Row> Column<T> {
    /// Compute the cell for `row` at position `index`.
    ///
    /// Reads `row[key]` and passes it through the renderer, or shows the raw
    /// value when there is none. The row is only read.
    pub fn cell(&self, row: &T, index: usize) -> Cell {
        let value = row.field(&self.key);
        match &self.render {
            Some(render) => render(value.as_ref(), row, index),
            None => Cell::from_value(value.as_ref()),
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            header: self.header.clone(),
            sortable: self.sortable,
            align: self.align,
            width: self.width,
            render: self.render.clone(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("align", &self.align)
            .field("width", &self.width)
            .field("render", &self.render.is_some())
            .finish()
    }
}
