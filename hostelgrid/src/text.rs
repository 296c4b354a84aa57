//! Plain-text drawing of a [`TableView`].
//!
//! Widths are measured in terminal columns with `unicode-width`, so names
//! in Devanagari or CJK line up with ASCII ones.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::table::{Alignment, Body, BodyRow, Cell, CheckState, HeaderCell, TableView};
use hostelgrid_lib::query::Direction;

const ELLIPSIS: &str = "…";
const SKELETON: char = '░';
const RULE: char = '─';
const CHECKBOX_WIDTH: usize = 3;

/// Layout options for [`render_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    /// Cells wider than this are truncated with an ellipsis.
    pub max_column_width: usize,
    /// Spaces between columns.
    pub column_gap: usize,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            max_column_width: 32,
            column_gap: 2,
        }
    }
}

impl TextStyle {
    pub fn with_max_column_width(mut self, width: usize) -> Self {
        self.max_column_width = width;
        self
    }

    pub fn with_column_gap(mut self, gap: usize) -> Self {
        self.column_gap = gap;
        self
    }
}

/// Width of `s` in terminal columns.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Cut `s` to at most `max_width` columns, ending in `…` if anything was cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target = max_width - 1;
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > target {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push_str(ELLIPSIS);
    out
}

/// Truncate and pad `s` to exactly `width` columns.
pub fn pad(s: &str, width: usize, align: Alignment) -> String {
    let s = truncate_to_width(s, width);
    let fill = width.saturating_sub(display_width(&s));
    let (left, right) = match align {
        Alignment::Left => (0, fill),
        Alignment::Right => (fill, 0),
        Alignment::Center => (fill / 2, fill - fill / 2),
    };
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}

fn checkbox(state: CheckState) -> &'static str {
    match state {
        CheckState::Unchecked => "[ ]",
        CheckState::Checked => "[x]",
        CheckState::Indeterminate => "[-]",
    }
}

fn header_label(cell: &HeaderCell) -> String {
    if !cell.sortable {
        return cell.label.clone();
    }
    let indicator = match cell.sorted {
        Some(Direction::Asc) => "↑",
        Some(Direction::Desc) => "↓",
        None => "↕",
    };
    format!("{} {}", cell.label, indicator)
}

fn cell_lines(cell: &Cell) -> Vec<String> {
    match cell {
        Cell::Blank => vec![String::new()],
        Cell::Text(text) => vec![text.clone()],
        Cell::Lines(lines) if lines.is_empty() => vec![String::new()],
        Cell::Lines(lines) => lines.clone(),
        Cell::Badge { label, .. } => vec![format!("({})", label)],
    }
}

fn column_widths(view: &TableView, style: &TextStyle) -> Vec<usize> {
    let mut widths: Vec<usize> = view
        .header
        .cells
        .iter()
        .map(|cell| display_width(&header_label(cell)))
        .collect();

    if let Body::Rows(rows) = &view.body {
        for row in rows {
            for (i, cell) in row.cells.iter().enumerate() {
                let content = cell_lines(&cell.cell)
                    .iter()
                    .map(|line| display_width(line))
                    .max()
                    .unwrap_or(0);
                if let Some(width) = widths.get_mut(i) {
                    *width = (*width).max(content);
                }
            }
        }
    }

    widths
        .into_iter()
        .zip(&view.header.cells)
        .map(|(measured, cell)| match cell.width {
            Some(fixed) => usize::from(fixed),
            None => measured.min(style.max_column_width),
        })
        .collect()
}

fn join_line(parts: Vec<String>, gap: usize) -> String {
    parts.join(&" ".repeat(gap)).trim_end().to_string()
}

fn row_lines(row: &BodyRow, widths: &[usize], style: &TextStyle) -> Vec<String> {
    let cells: Vec<Vec<String>> = row.cells.iter().map(|c| cell_lines(&c.cell)).collect();
    let height = cells.iter().map(Vec::len).max().unwrap_or(1).max(1);

    (0..height)
        .map(|line| {
            let mut parts = Vec::with_capacity(cells.len() + 1);
            if let Some(checked) = row.checkbox {
                parts.push(if line > 0 {
                    " ".repeat(CHECKBOX_WIDTH)
                } else if checked {
                    checkbox(CheckState::Checked).to_string()
                } else {
                    checkbox(CheckState::Unchecked).to_string()
                });
            }
            for ((lines, cell), width) in cells.iter().zip(&row.cells).zip(widths) {
                let text = lines.get(line).map(String::as_str).unwrap_or("");
                parts.push(pad(text, *width, cell.align));
            }
            join_line(parts, style.column_gap)
        })
        .collect()
}

/// Draw `view` as plain text, one table line per output line.
pub fn render_text(view: &TableView, style: &TextStyle) -> String {
    let widths = column_widths(view, style);
    let with_checkbox = view.header.checkbox.is_some();

    let mut slots: Vec<usize> = widths.clone();
    if with_checkbox {
        slots.insert(0, CHECKBOX_WIDTH);
    }
    let total = slots.iter().sum::<usize>() + style.column_gap * slots.len().saturating_sub(1);

    let mut lines = Vec::new();

    let mut header = Vec::with_capacity(slots.len());
    if let Some(state) = view.header.checkbox {
        header.push(checkbox(state).to_string());
    }
    for (cell, width) in view.header.cells.iter().zip(&widths) {
        header.push(pad(&header_label(cell), *width, cell.align));
    }
    lines.push(join_line(header, style.column_gap));
    lines.push(RULE.to_string().repeat(total));

    match &view.body {
        Body::Loading { rows, .. } => {
            let placeholder = join_line(
                slots
                    .iter()
                    .map(|w| SKELETON.to_string().repeat(*w))
                    .collect(),
                style.column_gap,
            );
            lines.extend(std::iter::repeat_n(placeholder, *rows));
        }
        Body::Empty { message, .. } => {
            lines.push(pad(message, total.max(display_width(message)), Alignment::Center)
                .trim_end()
                .to_string());
        }
        Body::Rows(rows) => {
            for row in rows {
                lines.extend(row_lines(row, &widths, style));
            }
        }
    }

    if let Some(footer) = &view.footer {
        lines.push(RULE.to_string().repeat(total));
        lines.push(format!("{}  [{}]", footer.label(), footer.clear_label()));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
