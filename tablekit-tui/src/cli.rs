//! Command line arguments.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use tablekit_lib::Column;

/// Searchable, sortable, paginated table of JSON records.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// JSON file holding an array of objects. Defaults to a built-in sample.
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Rows per page
    #[arg(short = 'n', long)]
    pub page_size: Option<NonZeroUsize>,

    /// Milliseconds of typing pause before the search is applied
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    /// Columns to show, as `key:Label` pairs separated by commas
    #[arg(short, long, value_delimiter = ',', value_parser = parse_column)]
    pub columns: Option<Vec<Column>>,

    /// Settings file. Defaults to `settings.json` in the config directory.
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Log level written to the log file
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}

fn parse_column(arg: &str) -> Result<Column, String> {
    Column::parse(arg).ok_or_else(|| format!("expected `key` or `key:Label`, got `{}`", arg))
}
