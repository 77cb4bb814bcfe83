//! Where edit-assist keeps its files on disk
//!
//! Two things live in the per-user directory:
//! - `config.yaml`: the [`AssistConfig`](crate::config::AssistConfig) read at
//!   startup and written by `save`
//! - `logs/edit-assist.log.<date>`: the daily-rolling debug log opened by
//!   [`tracing::init`](crate::tracing::init)
//!
//! Nothing is created until the logger or `save` asks for it.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

const APP_DIR: &str = "edit-assist";

/// Name of the YAML file holding indent unit, sentinel and toggles
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Prefix handed to the rolling appender; the date is appended per day
pub const LOG_FILE_PREFIX: &str = "edit-assist.log";

/// Per-user directory for the assist config and its logs.
///
/// `$XDG_CONFIG_HOME/edit-assist`, falling back to `~/.config/edit-assist`.
/// On Windows, `%APPDATA%\edit-assist`. `None` when no home can be found,
/// in which case the config falls back to defaults and file logging is off.
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    let base = env::var_os("APPDATA").map(PathBuf::from);

    #[cfg(not(target_os = "windows"))]
    let base = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")));

    base.map(|dir| dir.join(APP_DIR))
}

/// The assist config file, whether or not it exists yet
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// Directory the rolling debug log is written to
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(logs_dir_in)
}

fn logs_dir_in(config_dir: PathBuf) -> PathBuf {
    config_dir.join("logs")
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory {}", path.display()))
}

/// Create the log directory if needed so the appender can open its file
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let logs = logs_dir().context("No config directory available for logs")?;
    ensure_dir(&logs)?;
    Ok(logs)
}
