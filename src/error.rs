//! Error types for the market status CLI

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MktError>;

#[derive(Error, Debug)]
pub enum MktError {
    #[error("{message}")]
    Usage { message: String },

    #[error("invalid db: {code} (choose from 4H, B9)")]
    UnknownDatabase { code: String },

    #[error("Database not found: {}", path.display())]
    DatabaseNotFound { path: PathBuf },

    #[error("Could not open database {}: {source}", path.display())]
    DatabaseUnavailable {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Query failed: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Invalid value for {kind}: {value} (expected an integer)")]
    InvalidFilterValue { kind: String, value: String },

    #[error("Could not determine the installation directory: {0}")]
    InstallDir(#[source] std::io::Error),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MktError {
    /// True for errors caused by bad user input rather than the environment.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            MktError::Usage { .. }
                | MktError::UnknownDatabase { .. }
                | MktError::InvalidFilterValue { .. }
        )
    }
}
