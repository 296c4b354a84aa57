//! Sort directive and row ordering.

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

use crate::model::Row;
use crate::model::Value;

/// Sort direction for ordering rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9, oldest first).
    Asc,
    /// Descending order (Z-A, 9-0, newest first).
    Desc,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }

    /// Short lowercase label (`"asc"` / `"desc"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// The single active ordering of a table: one column and a direction.
///
/// # Example
///
/// ```
/// use hostelgrid_lib::query::{Direction, SortDirective};
///
/// let sort = SortDirective::desc("admissionDate");
/// assert_eq!(sort.direction, Direction::Desc);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortDirective {
    /// Field key of the column being sorted.
    pub column: String,
    /// Sort direction.
    pub direction: Direction,
}

impl SortDirective {
    /// Creates a directive for a column and direction.
    pub fn new(column: impl Into<String>, direction: Direction) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }

    /// Creates an ascending directive.
    pub fn asc(column: impl Into<String>) -> Self {
        Self::new(column, Direction::Asc)
    }

    /// Creates a descending directive.
    pub fn desc(column: impl Into<String>) -> Self {
        Self::new(column, Direction::Desc)
    }

    /// Compares two rows by this directive's column.
    pub fn compare<T: Row + ?Sized>(&self, a: &T, b: &T) -> Ordering {
        compare_values(
            a.field(&self.column).as_ref(),
            b.field(&self.column).as_ref(),
            self.direction,
        )
    }
}

/// Orders two field values for the given direction.
///
/// Defined values use [`Value::total_cmp`], reversed for descending, so
/// values of different types never compare equal by accident. An absent
/// value (missing or null) is greater than any defined value when ascending
/// and less than any defined value when descending, so absent values always
/// land at the end of an ascending sort and at the start of a descending
/// one. Two absent values are equal and keep their input order under a
/// stable sort.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>, direction: Direction) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());

    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => match direction {
            Direction::Asc => Ordering::Greater,
            Direction::Desc => Ordering::Less,
        },
        (Some(_), None) => match direction {
            Direction::Asc => Ordering::Less,
            Direction::Desc => Ordering::Greater,
        },
        (Some(a), Some(b)) => {
            let ord = a.total_cmp(b);
            match direction {
                Direction::Asc => ord,
                Direction::Desc => ord.reverse(),
            }
        }
    }
}
