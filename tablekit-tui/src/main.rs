mod app;
mod cli;
mod error;
mod hit;
mod input;
mod keys;
mod paths;
mod render;
mod screen;
mod settings;

use std::fs::{self, File};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, info};
use simplelog::{Config, WriteLogger};
use tablekit_lib::{Record, load_records};

use crate::app::App;
use crate::cli::Cli;
use crate::error::AppError;
use crate::screen::Terminal;
use crate::settings::Settings;

const SAMPLE_DATA: &str = include_str!("../data/users.json");

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let settings = match cli.settings.clone().or_else(paths::settings_file) {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    };
    let settings = settings.apply_cli(&cli);
    let config = settings.table_config()?;
    let records = read_records(settings.data.as_deref())?;

    // Everything that can fail on bad input happens before the terminal is taken
    let mut app = App::new(records, &config);
    let mut terminal = Terminal::new()?;
    app.run(&mut terminal).await
}

fn read_records(path: Option<&Path>) -> Result<Vec<Record>, AppError> {
    let Some(path) = path else {
        info!("Using built-in sample data");
        return Ok(load_records(SAMPLE_DATA)?);
    };

    info!("Loading records from {}", path.display());
    let json = fs::read_to_string(path).map_err(|source| AppError::ReadData {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(load_records(&json)?)
}

/// Log to `latest.log` in the cache directory. Runs without logs if that fails.
fn init_logging(level: LevelFilter) {
    if level == LevelFilter::Off {
        return;
    }
    let Some(log_path) = paths::log_file() else {
        return;
    };
    if let Some(dir) = log_path.parent()
        && fs::create_dir_all(dir).is_err()
    {
        return;
    }

    paths::rotate_logs();

    let Ok(file) = File::create(&log_path) else {
        return;
    };
    if WriteLogger::init(level, Config::default(), file).is_err() {
        return;
    }
    info!("tablekit {} starting", env!("CARGO_PKG_VERSION"));
}
