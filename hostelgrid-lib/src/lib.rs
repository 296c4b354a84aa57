//! Row model and query pipeline for hostel record tables.
//!
//! Screens hold their rows as `Arc<T>` where `T` implements [`model::Row`].
//! The [`query`] module derives the visible, ordered subset from a search
//! string, categorical filters and an optional sort directive.

pub mod error;
pub mod model;
pub mod query;
