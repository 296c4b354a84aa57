//! `settings.toml` loading.
//!
//! ```toml
//! [table]
//! selectable = true
//! empty_message = "No students found"
//! selection_policy = "prune_hidden"
//!
//! [students]
//! search_fields = ["name", "studentId", "roomNo", "email"]
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use hostelgrid::TableConfig;
use hostelgrid_lib::query::RowQuery;
use log::debug;
use serde::Deserialize;
use serde::Serialize;

use crate::error::CliError;
use crate::paths;

/// User settings. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub table: TableConfig,
    pub students: ScreenSettings,
}

/// Query options for one screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenSettings {
    /// Fields matched by `--search`.
    pub search_fields: Vec<String>,
    /// Fields `--sort` may target. Defaults to the sortable columns.
    pub sortable_fields: Option<Vec<String>>,
}

impl Default for ScreenSettings {
    fn default() -> Self {
        Self {
            search_fields: vec!["name".into(), "studentId".into(), "roomNo".into()],
            sortable_fields: None,
        }
    }
}

impl ScreenSettings {
    /// Build the screen's query, falling back to `sortable_columns`.
    pub fn row_query(&self, sortable_columns: &[&str]) -> RowQuery {
        let query = RowQuery::new().search_fields(self.search_fields.iter().cloned());
        match &self.sortable_fields {
            Some(fields) => query.sortable_fields(fields.iter().cloned()),
            None => query.sortable_fields(sortable_columns.iter().copied()),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, CliError> {
        toml::from_str(text).map_err(|source| CliError::Settings {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings from `path`, or from the default location.
    ///
    /// An explicit path must exist. A missing default file yields the
    /// default settings.
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        if let Some(path) = path {
            let text = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
            return Self::from_toml(&text, path);
        }

        let Some(path) = paths::settings_file() else {
            return Ok(Self::default());
        };
        match fs::read_to_string(&path) {
            Ok(text) => Self::from_toml(&text, &path),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("settings: {} not found, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(CliError::io(path, e)),
        }
    }
}
