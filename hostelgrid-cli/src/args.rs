//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use hostelgrid_lib::model::Value;
use hostelgrid_lib::query::CategoricalFilter;

use crate::error::CliError;

/// Browse the hostel student roster.
#[derive(Parser, Debug)]
#[command(name = "hostelgrid", version, about)]
pub struct Args {
    /// Roster JSON file (defaults to the bundled sample roster)
    #[arg(long, value_name = "PATH")]
    pub roster: Option<PathBuf>,

    /// Free-text search over the searchable fields
    #[arg(long, short, value_name = "TEXT")]
    pub search: Option<String>,

    /// Exact-match filter; repeat for more (e.g. --filter "block=SOUTH BLOCK")
    #[arg(long = "filter", short, value_name = "FIELD=VALUE")]
    pub filters: Vec<String>,

    /// Click the header of this column
    #[arg(long, value_name = "FIELD")]
    pub sort: Option<String>,

    /// Click the header a second time to sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Toggle the selection of the row at this 1-based position
    #[arg(long = "select", value_name = "N")]
    pub select: Vec<usize>,

    /// Check the select-all box
    #[arg(long)]
    pub select_all: bool,

    /// Show the loading placeholder instead of rows
    #[arg(long)]
    pub loading: bool,

    /// Settings file (defaults to settings.toml in the config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the distinct values of a field and exit
    #[arg(long, value_name = "FIELD")]
    pub options: Option<String>,

    /// Log at debug level
    #[arg(long, short)]
    pub verbose: bool,
}

/// Parse a `FIELD=VALUE` filter.
///
/// The value is read as JSON when it parses as a scalar (`21`, `true`,
/// `"2023-01-15"`) and as plain text otherwise, so `block=SOUTH BLOCK` and
/// `admissionDate=2023-01-15` both compare against typed fields.
pub fn parse_filter(raw: &str) -> Result<CategoricalFilter, CliError> {
    let Some((field, value)) = raw.split_once('=') else {
        return Err(CliError::InvalidFilter(raw.to_string()));
    };
    let field = field.trim();
    if field.is_empty() {
        return Err(CliError::InvalidFilter(raw.to_string()));
    }

    let value = match serde_json::from_str::<serde_json::Value>(value) {
        Ok(json) if !json.is_array() && !json.is_object() => Value::from_json(json),
        _ => Value::from_json(serde_json::Value::String(value.to_string())),
    };
    Ok(CategoricalFilter::eq(field, value))
}
