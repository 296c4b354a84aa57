//! Tests for row selection and the select-all checkbox.

use std::sync::Arc;

use hostelgrid::prelude::*;

fn rows(n: usize) -> Vec<Arc<Record>> {
    (0..n)
        .map(|i| Arc::new(Record::new().set("studentId", format!("ST2000{}", i + 1))))
        .collect()
}

fn selectable(rows: Vec<Arc<Record>>) -> Table<Record> {
    Table::new(vec![Column::new("studentId", "Student ID")])
        .with_config(TableConfig::default().with_selectable(true))
        .with_rows(rows)
}

fn selected(event: Option<TableEvent<Record>>) -> Vec<Arc<Record>> {
    match event {
        Some(TableEvent::SelectionChanged(rows)) => rows,
        other => panic!("expected SelectionChanged, got {:?}", other),
    }
}

#[test]
fn test_toggle_row_reports_full_selection() {
    let data = rows(3);
    let mut table = selectable(data.clone());

    let first = selected(table.toggle_row(&data[2]));
    assert_eq!(first.len(), 1);

    let second = selected(table.toggle_row(&data[0]));
    assert_eq!(second.len(), 2);
    assert!(Arc::ptr_eq(&second[0], &data[2]));
    assert!(Arc::ptr_eq(&second[1], &data[0]));

    let third = selected(table.toggle_row(&data[2]));
    assert_eq!(third.len(), 1);
    assert!(Arc::ptr_eq(&third[0], &data[0]));
}

#[test]
fn test_selection_is_by_identity() {
    let data = rows(1);
    let lookalike = Arc::new((*data[0]).clone());
    let mut table = selectable(data.clone());

    table.toggle_row(&data[0]);
    assert!(table.is_selected(&data[0]));
    assert!(!table.is_selected(&lookalike));
    assert!(table.toggle_row(&lookalike).is_none());
}

#[test]
fn test_not_selectable_ignores_selection() {
    let data = rows(2);
    let mut table = Table::new(vec![Column::new("studentId", "Student ID")]).with_rows(data.clone());

    assert!(table.toggle_row(&data[0]).is_none());
    assert!(table.toggle_select_all(true).is_none());
    assert_eq!(table.selected_count(), 0);
}

#[test]
fn test_all_selected_and_indeterminate() {
    let data = rows(3);
    let mut table = selectable(data.clone());

    assert!(!table.all_selected());
    assert!(!table.indeterminate());
    assert_eq!(table.header_checkbox(), CheckState::Unchecked);

    table.toggle_row(&data[1]);
    assert!(!table.all_selected());
    assert!(table.indeterminate());
    assert_eq!(table.header_checkbox(), CheckState::Indeterminate);

    table.toggle_row(&data[0]);
    table.toggle_row(&data[2]);
    assert!(table.all_selected());
    assert!(!table.indeterminate());
    assert_eq!(table.header_checkbox(), CheckState::Checked);
}

#[test]
fn test_never_all_selected_and_indeterminate() {
    let data = rows(4);
    let mut table = selectable(data.clone());
    for row in &data {
        table.toggle_row(row);
        assert!(!(table.all_selected() && table.indeterminate()));
    }
}

#[test]
fn test_empty_table_is_not_all_selected() {
    let mut table = selectable(Vec::new());
    table.toggle_select_all(true);
    assert!(!table.all_selected());
    assert!(!table.indeterminate());
}

#[test]
fn test_select_all_then_none() {
    let data = rows(5);
    let mut table = selectable(data.clone());

    let all = selected(table.toggle_select_all(true));
    assert_eq!(all.len(), 5);
    assert!(table.all_selected());

    let none = selected(table.toggle_select_all(false));
    assert!(none.is_empty());
    assert_eq!(table.selected_count(), 0);
}

#[test]
fn test_clear_selection() {
    let data = rows(3);
    let mut table = selectable(data.clone());
    table.toggle_row(&data[0]);

    assert!(selected(table.clear_selection()).is_empty());
    assert!(table.render().footer.is_none());
}

#[test]
fn test_set_row_selected_only_reports_changes() {
    let data = rows(2);
    let mut table = selectable(data.clone());

    assert_eq!(selected(table.set_row_selected(&data[0], true)).len(), 1);
    assert!(table.set_row_selected(&data[0], true).is_none());
    assert!(selected(table.set_row_selected(&data[0], false)).is_empty());
}

#[test]
fn test_sticky_selection_survives_filtering() {
    let data = rows(3);
    let mut table = selectable(data.clone());
    table.toggle_row(&data[0]);

    assert!(table.set_rows(vec![data[1].clone(), data[2].clone()]).is_none());
    assert_eq!(table.selected_count(), 1);

    table.set_rows(data.clone());
    assert!(table.is_selected(&data[0]));
}

#[test]
fn test_hidden_rows_cannot_be_toggled() {
    let data = rows(3);
    let mut table = selectable(data.clone());
    table.set_rows(vec![data[1].clone()]);
    assert!(table.toggle_row(&data[0]).is_none());
}

#[test]
fn test_prune_hidden_policy() {
    let data = rows(3);
    let mut table = Table::new(vec![Column::new("studentId", "Student ID")])
        .with_config(
            TableConfig::default()
                .with_selectable(true)
                .with_selection_policy(SelectionPolicy::PruneHidden),
        )
        .with_rows(data.clone());
    table.toggle_select_all(true);

    let remaining = selected(table.set_rows(vec![data[2].clone()]));
    assert_eq!(remaining.len(), 1);
    assert!(Arc::ptr_eq(&remaining[0], &data[2]));
    assert!(table.all_selected());

    assert!(table.set_rows(vec![data[2].clone()]).is_none());
}
