//! Data directory resolution.
//!
//! The storage file and the log live in one directory, chosen in this order:
//! the configured `data_dir`, the `RECIPEBOX_DATA_DIR` environment variable,
//! the platform data directory from [`dirs::data_dir`] joined with
//! `recipebox`, then a relative `.recipebox` directory.

use std::path::{Path, PathBuf};

use crate::Config;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "RECIPEBOX_DATA_DIR";

/// Name of the storage file inside the data directory.
pub const STORAGE_FILE: &str = "storage.json";

/// Name of the log file inside the data directory.
pub const LOG_FILE: &str = "recipebox.log";

/// Returns the data directory for `config`.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use recipebox::infrastructure::get_data_dir;
/// use recipebox::Config;
///
/// let config = Config {
///     data_dir: Some(PathBuf::from("/srv/recipebox")),
///     ..Default::default()
/// };
/// assert_eq!(get_data_dir(&config), PathBuf::from("/srv/recipebox"));
/// ```
#[must_use]
pub fn get_data_dir(config: &Config) -> PathBuf {
    if let Some(dir) = &config.data_dir {
        return expand_tilde(dir, dirs::home_dir());
    }
    resolve_data_dir(
        std::env::var_os(DATA_DIR_ENV).map(PathBuf::from),
        dirs::data_dir(),
    )
}

fn resolve_data_dir(explicit: Option<PathBuf>, platform_data_dir: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = explicit.filter(|p| !p.as_os_str().is_empty()) {
        return dir;
    }
    platform_data_dir.map_or_else(|| PathBuf::from(".recipebox"), |dir| dir.join("recipebox"))
}

/// Expands a leading `~` to `home`, leaving the path as is without one.
fn expand_tilde(path: &Path, home: Option<PathBuf>) -> PathBuf {
    match (path.strip_prefix("~"), home) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

/// Path of the storage file for `config`.
#[must_use]
pub fn storage_path(config: &Config) -> PathBuf {
    get_data_dir(config).join(STORAGE_FILE)
}
