//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "tablekit";
const APPLICATION: &str = "tablekit";

const LATEST_LOG: &str = "latest.log";

/// Maximum number of archived log files to keep.
const MAX_OLD_LOGS: usize = 25;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Directory holding `settings.json`.
///
/// - Linux: `$XDG_CONFIG_HOME/tablekit` or `~/.config/tablekit`
/// - macOS: `~/Library/Application Support/dev.tablekit.tablekit`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Directory holding logs.
///
/// - Linux: `$XDG_CACHE_HOME/tablekit` or `~/.cache/tablekit`
/// - macOS: `~/Library/Caches/dev.tablekit.tablekit`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

pub fn settings_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("settings.json"))
}

pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archive `latest.log` under a timestamp and prune old archives.
///
/// Call at startup, before the new log file is created.
pub fn rotate_logs() {
    let Some(cache) = cache_dir() else { return };
    rotate_logs_in(&cache, &chrono::Local::now().format("%Y%m%d_%H%M%S").to_string());
}

fn rotate_logs_in(dir: &Path, stamp: &str) {
    let latest = dir.join(LATEST_LOG);
    if latest.exists() {
        let _ = fs::rename(&latest, dir.join(format!("{}.log", stamp)));
    }
    cleanup_old_logs(dir, MAX_OLD_LOGS);
}

/// Remove the oldest archived logs beyond `keep`.
fn cleanup_old_logs(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut logs: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();

    // Oldest first; timestamps in the name break mtime ties
    logs.sort_by_key(|e| (e.metadata().and_then(|m| m.modified()).ok(), e.file_name()));

    let excess = logs.len().saturating_sub(keep);
    for entry in logs.iter().take(excess) {
        let _ = fs::remove_file(entry.path());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_rotate_archives_latest() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(LATEST_LOG), "old run").unwrap();

        rotate_logs_in(dir.path(), "20260101_120000");

        assert_eq!(log_names(dir.path()), ["20260101_120000.log"]);
        let archived = fs::read_to_string(dir.path().join("20260101_120000.log")).unwrap();
        assert_eq!(archived, "old run");
    }

    #[test]
    fn test_rotate_without_latest_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        rotate_logs_in(dir.path(), "20260101_120000");
        assert!(log_names(dir.path()).is_empty());
    }

    #[test]
    fn test_cleanup_keeps_newest() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..5 {
            fs::write(dir.path().join(format!("2026010{}_000000.log", i)), "").unwrap();
        }
        fs::write(dir.path().join(LATEST_LOG), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        cleanup_old_logs(dir.path(), 2);

        assert_eq!(
            log_names(dir.path()),
            ["20260103_000000.log", "20260104_000000.log", LATEST_LOG, "notes.txt"]
        );
    }
}
