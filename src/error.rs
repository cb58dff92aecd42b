use std::path::PathBuf;

use thiserror::Error;

/// Conditions that end an interactive session with a non-zero exit status.
#[derive(Error, Debug)]
pub enum SeekError {
    #[error("Can't open database {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Failed to read the database catalog: {0}")]
    Catalog(#[source] rusqlite::Error),

    #[error("No tables found in the database.")]
    NoTables,

    #[error("Invalid table selection: {0:?}")]
    InvalidTableSelection(String),

    #[error("No columns found in the table {0:?}.")]
    NoColumns(String),

    #[error("No valid fields selected.")]
    NoFieldsSelected,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures of a single search. These are reported to the user and the
/// session carries on.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Invalid search input.")]
    InvalidInput,

    #[error("Failed to prepare search query: {0}")]
    Prepare(#[source] rusqlite::Error),

    #[error("Search failed: {0}")]
    Execute(#[source] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SeekError>;
