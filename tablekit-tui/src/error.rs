//! Startup and runtime errors for the terminal front end.

use std::io;
use std::path::PathBuf;

use tablekit_lib::{LoadError, TableError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to read {}: {source}", path.display())]
    ReadData {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("invalid table configuration: {0}")]
    Table(#[from] TableError),

    #[error("invalid settings file {}: {source}", path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
