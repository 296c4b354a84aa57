//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "hostelgrid";
const APPLICATION: &str = "hostelgrid";

const LATEST_LOG: &str = "latest.log";
const ARCHIVE_PREFIX: &str = "hostelgrid-";

/// Maximum number of archived log files to keep.
const MAX_OLD_LOGS: usize = 25;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Cache directory, home of the log files.
///
/// - Linux: `$XDG_CACHE_HOME/hostelgrid` or `~/.cache/hostelgrid`
/// - macOS: `~/Library/Caches/org.hostelgrid.hostelgrid`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/hostelgrid` or `~/.config/hostelgrid`
/// - macOS: `~/Library/Application Support/org.hostelgrid.hostelgrid`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Default location of `settings.toml`.
pub fn settings_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("settings.toml"))
}

/// Path of the log file for the current run.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archive the previous run's log and drop archives beyond the limit.
///
/// Call at startup, before the new log file is created.
pub fn rotate_logs() {
    let Some(cache) = cache_dir() else { return };
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
    archive_latest(&cache, &stamp);
    prune_archives(&cache, MAX_OLD_LOGS);
}

/// Name of the archive for a run that ended at `stamp`.
fn archive_name(stamp: &str) -> String {
    format!("{}{}.log", ARCHIVE_PREFIX, stamp)
}

/// Move `latest.log` to `hostelgrid-<stamp>.log`.
///
/// Two runs within the same second get a numeric suffix instead of
/// overwriting each other.
fn archive_latest(dir: &Path, stamp: &str) {
    let latest = dir.join(LATEST_LOG);
    if !latest.is_file() {
        return;
    }
    let mut target = dir.join(archive_name(stamp));
    let mut n = 1;
    while target.exists() {
        target = dir.join(archive_name(&format!("{}_{}", stamp, n)));
        n += 1;
    }
    if let Err(e) = fs::rename(&latest, &target) {
        eprintln!("warning: cannot archive {}: {}", latest.display(), e);
    }
}

/// Remove all but the `keep` newest archives.
///
/// Archive names embed their timestamp, so name order is age order. Files
/// not written by [`archive_latest`] are left alone.
fn prune_archives(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut archives: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(ARCHIVE_PREFIX) && name.ends_with(".log"))
        })
        .collect();
    archives.sort();

    let excess = archives.len().saturating_sub(keep);
    for path in archives.iter().take(excess) {
        let _ = fs::remove_file(path);
    }
}
