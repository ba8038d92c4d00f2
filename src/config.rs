//! Global configuration management
//!
//! Config is stored at `~/.contactbook/config.toml`:
//!
//! ```toml
//! [notifications]
//! channel = "console"   # or "log"
//! ```
//!
//! A missing file means defaults. Command-line flags take precedence over
//! anything read here.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::ports::NotifierKind;
use crate::paths;

/// Errors that can occur reading or writing the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Config path
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config {path}: {source}")]
    Parse {
        /// Config path
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// Config could not be serialized
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Config file could not be written
    #[error("failed to write config {path}: {source}")]
    Write {
        /// Config path
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },
}

/// Global contactbook configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Notification preferences
    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// Notification preferences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Transport used for add/delete notifications
    #[serde(default)]
    pub channel: NotifierKind,
}

impl GlobalConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from the default location, or defaults if unreadable
    #[must_use]
    pub fn load() -> Self {
        let path = Self::config_path();
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default config");
                Self::default()
            },
        }
    }

    /// Load config from a specific file
    ///
    /// A file that does not exist yields the default config.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(write_err)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(write_err)
    }

    /// Resolve the notifier, letting an explicit choice win over the file
    #[must_use]
    pub fn notifier(&self, flag: Option<NotifierKind>) -> NotifierKind {
        flag.unwrap_or(self.notifications.channel)
    }
}
