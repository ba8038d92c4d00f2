//! TOML seed files
//!
//! A seed file lists contacts to load into a fresh session:
//!
//! ```toml
//! [[contact]]
//! name = "Alice"
//! email = "alice@email.com"
//! phone = "123456"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::core::models::Contact;

/// Errors that can occur while loading a seed file
#[derive(Debug, Error)]
pub enum SeedFileError {
    /// File could not be read
    #[error("failed to read seed file {path}: {source}")]
    Read {
        /// Path that was read
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// File is not valid seed TOML
    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        /// Path that was parsed
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },
}

/// A seed file structure
#[derive(Debug, Default, Deserialize)]
pub struct SeedFile {
    /// Contacts in file order
    #[serde(default, rename = "contact")]
    pub contacts: Vec<ContactEntry>,
}

/// A contact entry in a seed file
#[derive(Debug, Clone, Deserialize)]
pub struct ContactEntry {
    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Phone number, optional in the file
    #[serde(default)]
    pub phone: String,
}

impl From<ContactEntry> for Contact {
    fn from(entry: ContactEntry) -> Self {
        Self::new(entry.name, entry.email, entry.phone)
    }
}

impl SeedFile {
    /// Parse seed TOML from a string
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Convert the entries into contacts, keeping file order
    #[must_use]
    pub fn into_contacts(self) -> Vec<Contact> {
        self.contacts.into_iter().map(Contact::from).collect()
    }
}

/// Load a seed file from disk
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_file(path: &Path) -> Result<SeedFile, SeedFileError> {
    let content = fs::read_to_string(path).map_err(|source| SeedFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    SeedFile::parse(&content).map_err(|source| SeedFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
