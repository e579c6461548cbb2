//! Persistent user settings, layered under command line flags.
//!
//! Read from `settings.json` in the config directory. Every field is
//! optional; a missing file is the same as an empty one.

use std::fs;
use std::io;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};
use tablekit_lib::{Column, TableConfig};

use crate::cli::Cli;
use crate::error::AppError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Records file used when `--data` is not given.
    pub data: Option<PathBuf>,
    pub page_size: Option<NonZeroUsize>,
    pub debounce_ms: Option<u64>,
    pub columns: Option<Vec<Column>>,
}

impl Settings {
    /// Load settings from `path`. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(AppError::Io(e)),
        };

        serde_json::from_str(&text).map_err(|source| AppError::Settings {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Override with whatever was given on the command line.
    pub fn apply_cli(mut self, cli: &Cli) -> Self {
        if let Some(data) = &cli.data {
            self.data = Some(data.clone());
        }
        if let Some(page_size) = cli.page_size {
            self.page_size = Some(page_size);
        }
        if let Some(ms) = cli.debounce_ms {
            self.debounce_ms = Some(ms);
        }
        if let Some(columns) = &cli.columns {
            self.columns = Some(columns.clone());
        }
        self
    }

    /// Build the table configuration.
    ///
    /// The built-in sample gets labelled columns unless some were configured;
    /// a user data file derives its columns from the first record.
    pub fn table_config(&self) -> Result<TableConfig, AppError> {
        let mut config = TableConfig::new();
        if let Some(page_size) = self.page_size {
            config = config.page_size(page_size.get())?;
        }
        if let Some(ms) = self.debounce_ms {
            config = config.debounce(Duration::from_millis(ms));
        }
        match (&self.columns, &self.data) {
            (Some(columns), _) => config = config.columns(columns.clone()),
            (None, None) => config = config.columns(sample_columns()),
            (None, Some(_)) => {}
        }
        Ok(config)
    }
}

fn sample_columns() -> Vec<Column> {
    vec![
        Column::new("id", "ID"),
        Column::new("name", "Name"),
        Column::new("age", "Age"),
        Column::new("email", "Email"),
    ]
}
