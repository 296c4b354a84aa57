//! Error type for the terminal host.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid roster {path}: {source}")]
    Roster {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid settings {path}: {source}")]
    Settings {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid filter '{0}': expected FIELD=VALUE")]
    InvalidFilter(String),
    #[error("no visible row at position {position} ({visible} rows shown)")]
    NoSuchRow { position: usize, visible: usize },
    #[error("logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }
}
