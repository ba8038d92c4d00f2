//! Contact model
//!
//! A contact is an immutable record of who someone is and how to reach them.
//! The email doubles as the lookup key, by convention only: nothing rejects
//! two contacts sharing an email.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A stored contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    name: String,
    email: String,
    phone: String,
}

impl Contact {
    /// Create a new contact
    ///
    /// No validation is performed: empty or malformed values are accepted.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email address, used as the contact's id
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Phone number
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// The id a repository looks this contact up by
    #[must_use]
    pub fn id(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {}", self.name, self.email, self.phone)
    }
}
