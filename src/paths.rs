//! Centralized path definitions for contactbook
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.contactbook/
//! └── config.toml               # User preferences
//! ```
//!
//! The config location can be overridden with the `CONTACTBOOK_CONFIG`
//! environment variable or the `--config` flag.

use std::path::PathBuf;

/// Global config directory name
const GLOBAL_DIR: &str = ".contactbook";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "CONTACTBOOK_CONFIG";

/// Get the global contactbook directory.
///
/// Returns `~/.contactbook/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `$CONTACTBOOK_CONFIG` when set and non-empty, otherwise
/// `~/.contactbook/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => global_config_dir().join(GLOBAL_CONFIG_FILE),
    }
}
