//! Interactive table for hostel record screens.
//!
//! A [`Table`] displays rows it is given under a column schema, tracks which
//! rows the user selected and which column header was clicked last, and
//! reports that intent as [`TableEvent`]s. It never filters or sorts rows:
//! the hosting screen re-runs [`hostelgrid_lib::query`] and hands the new
//! rows back with [`Table::set_rows`].

pub mod prelude;
pub mod table;
pub mod text;

pub use table::{
    Alignment, Body, BodyCell, BodyRow, Cell, CheckState, Column, Footer, HeaderCell, HeaderRow,
    Selection, SelectionPolicy, Table, TableConfig, TableEvent, TableView, Tone,
};
