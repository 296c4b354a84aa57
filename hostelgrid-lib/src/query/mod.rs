//! Row query pipeline.
//!
//! Derives the rows a table should display from the canonical collection a
//! screen holds. The pipeline is pure: it never mutates or invents rows, and
//! the returned handles are clones of the input `Arc`s, so row identity is
//! preserved across runs.
//!
//! # Stages
//!
//! 1. [`SearchFilter`] - case-insensitive substring search over the
//!    caller-designated searchable fields
//! 2. [`CategoricalFilter`] - exact-match predicates, combined with AND
//! 3. [`SortDirective`] - stable single-column sort with absent values last
//!    in ascending order
//!
//! [`RowQuery`] bundles the per-screen configuration (searchable and sortable
//! fields); [`QueryState`] holds what the user has typed and picked.

mod filter;
mod options;
mod order;
mod pipeline;
mod search;
mod state;

pub use filter::CategoricalFilter;
pub use options::distinct_values;
pub use order::Direction;
pub use order::SortDirective;
pub use order::compare_values;
pub use pipeline::RowQuery;
pub use pipeline::query;
pub use search::SearchFilter;
pub use state::QueryState;
