//! Common imports for screens built on the table.
//!
//! ```ignore
//! use hostelgrid::prelude::*;
//! ```

pub use crate::table::{
    Alignment, Cell, CheckState, Column, SelectionPolicy, Table, TableConfig, TableEvent,
    TableView, Tone,
};
pub use hostelgrid_lib::model::{Record, Row, Value};
pub use hostelgrid_lib::query::{
    CategoricalFilter, Direction, QueryState, RowQuery, SortDirective, distinct_values,
};
