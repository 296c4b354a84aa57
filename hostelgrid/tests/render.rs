//! Tests for the render model.

use std::sync::Arc;

use hostelgrid::prelude::*;
use hostelgrid::{Body, BodyRow, Footer};

fn student(name: &str, room: &str, fee: &str) -> Arc<Record> {
    Arc::new(
        Record::new()
            .set("name", name)
            .set("roomNo", room)
            .set("feeStatus", fee),
    )
}

fn columns() -> Vec<Column<Record>> {
    vec![
        Column::new("name", "Student").sortable(),
        Column::new("roomNo", "Room No").align(Alignment::Center),
        Column::new("feeStatus", "Fee Status").render(|value, _, _| {
            match value.and_then(Value::as_str) {
                Some("paid") => Cell::badge("Paid", Tone::Success),
                Some("overdue") => Cell::badge("Overdue", Tone::Danger),
                Some(other) => Cell::badge(other, Tone::Warning),
                None => Cell::Blank,
            }
        }),
    ]
}

fn body_rows(body: Body) -> Vec<BodyRow> {
    match body {
        Body::Rows(rows) => rows,
        other => panic!("expected rows, got {:?}", other),
    }
}

#[test]
fn test_empty_renders_one_spanning_row() {
    let table = Table::new(columns())
        .with_config(TableConfig::default().with_empty_message("No students found"));

    let view = table.render();
    assert_eq!(
        view.body,
        Body::Empty {
            message: "No students found".to_string(),
            colspan: 3
        }
    );
    assert_eq!(view.body.line_count(), 1);
}

#[test]
fn test_empty_colspan_counts_checkbox() {
    let table =
        Table::<Record>::new(columns()).with_config(TableConfig::default().with_selectable(true));
    match table.render().body {
        Body::Empty { message, colspan } => {
            assert_eq!(message, "No data available");
            assert_eq!(colspan, 4);
        }
        other => panic!("expected empty body, got {:?}", other),
    }
}

#[test]
fn test_loading_is_distinct_from_empty() {
    let mut table = Table::<Record>::new(columns());
    table.set_loading(true);

    let view = table.render();
    assert_eq!(
        view.body,
        Body::Loading {
            rows: 5,
            columns: 3,
            with_checkbox: false
        }
    );

    table.set_loading(false);
    assert!(matches!(table.render().body, Body::Empty { .. }));
}

#[test]
fn test_loading_hides_rows() {
    let mut table = Table::new(columns()).with_rows(vec![student("Arun Kumar", "A101", "paid")]);
    table.set_loading(true);
    assert!(matches!(table.render().body, Body::Loading { .. }));
}

#[test]
fn test_cells_follow_column_order() {
    let table = Table::new(columns()).with_rows(vec![student("Arun Kumar", "A101", "paid")]);
    let rows = body_rows(table.render().body);

    let cells: Vec<&Cell> = rows[0].cells.iter().map(|c| &c.cell).collect();
    assert_eq!(
        cells,
        vec![
            &Cell::text("Arun Kumar"),
            &Cell::text("A101"),
            &Cell::badge("Paid", Tone::Success),
        ]
    );
    assert_eq!(rows[0].cells[1].align, Alignment::Center);
}

#[test]
fn test_missing_field_renders_blank() {
    let row = Arc::new(Record::new().set("name", "Sneha Reddy").set("roomNo", Value::Null));
    let table = Table::new(columns()).with_rows(vec![row]);
    let rows = body_rows(table.render().body);

    assert!(rows[0].cells[1].cell.is_blank());
    assert!(rows[0].cells[2].cell.is_blank());
}

#[test]
fn test_render_receives_row_and_index() {
    let columns = vec![
        Column::<Record>::new("actions", "Actions").render(|value, row, index| {
            assert!(value.is_none());
            let name = row.get_string("name").ok().flatten().unwrap_or_default();
            Cell::lines([format!("{}", index), name.to_string()])
        }),
    ];
    let table = Table::new(columns).with_rows(vec![
        student("Arun Kumar", "A101", "paid"),
        student("Priya Sharma", "B205", "pending"),
    ]);
    let rows = body_rows(table.render().body);

    assert_eq!(rows[1].index, 1);
    assert_eq!(rows[1].cells[0].cell, Cell::lines(["1", "Priya Sharma"]));
}

#[test]
fn test_header_shows_sort_state() {
    let mut table = Table::<Record>::new(columns());
    table.click_header("name");
    table.click_header("name");

    let header = table.render().header;
    assert_eq!(header.checkbox, None);
    assert_eq!(header.cells[0].sorted, Some(Direction::Desc));
    assert!(header.cells[0].sortable);
    assert_eq!(header.cells[1].sorted, None);
    assert!(!header.cells[1].sortable);
}

#[test]
fn test_checkboxes_and_footer() {
    let data = vec![
        student("Arun Kumar", "A101", "paid"),
        student("Priya Sharma", "B205", "pending"),
    ];
    let mut table = Table::new(columns())
        .with_config(TableConfig::default().with_selectable(true))
        .with_rows(data.clone());

    let view = table.render();
    assert_eq!(view.header.checkbox, Some(CheckState::Unchecked));
    assert!(view.footer.is_none());

    table.toggle_row(&data[1]);
    let view = table.render();
    assert_eq!(view.header.checkbox, Some(CheckState::Indeterminate));
    assert_eq!(
        view.footer,
        Some(Footer {
            selected: 1,
            visible: 2
        })
    );
    assert_eq!(view.footer.map(|f| f.label()).as_deref(), Some("1 of 2 items selected"));

    let rows = body_rows(view.body);
    assert_eq!(rows[0].checkbox, Some(false));
    assert_eq!(rows[1].checkbox, Some(true));
    assert!(rows[1].selected);
}

#[test]
fn test_rows_are_not_mutated_by_render() {
    let row = student("Raj Patel", "A102", "overdue");
    let before = (*row).clone();
    let table = Table::new(columns()).with_rows(vec![row.clone()]);
    let _ = table.render();
    assert_eq!(*row, before);
}
