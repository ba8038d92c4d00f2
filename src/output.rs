//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::io::{self, Write};

use serde::Serialize;

use crate::core::models::Contact;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of listing contacts
#[derive(Debug, Serialize)]
pub struct ContactListResult {
    /// Contacts in insertion order
    pub contacts: Vec<Contact>,
    /// Number of contacts
    pub count: usize,
}

/// Result of a search by name
#[derive(Debug, Serialize)]
pub struct SearchResult {
    /// The name that was searched for
    pub query: String,
    /// Whether a contact matched
    pub found: bool,
    /// The matching contact, if any
    pub contact: Option<Contact>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation changed anything
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

/// Result of a scripted session: searches, deletions, final listing
#[derive(Debug, Serialize)]
pub struct SessionResult {
    /// Searches in the order they ran
    pub searches: Vec<SearchResult>,
    /// Deletions in the order they ran
    pub deletions: Vec<OperationResult>,
    /// Contacts left at the end
    pub remaining: ContactListResult,
}

impl ContactListResult {
    /// Wrap a listing
    #[must_use]
    pub fn new(contacts: Vec<Contact>) -> Self {
        let count = contacts.len();
        Self { contacts, count }
    }

    /// Render the result to stdout
    pub fn render(&self, mode: OutputMode) {
        self.write_to(&mut io::stdout().lock(), mode);
    }

    /// Render the result to a writer
    pub fn write_to(&self, out: &mut impl Write, mode: OutputMode) {
        let written = match mode {
            OutputMode::Human => self.write_human(out),
            OutputMode::Json => write_json(out, self),
        };
        report(written);
    }

    fn write_human(&self, out: &mut impl Write) -> io::Result<()> {
        if self.contacts.is_empty() {
            return writeln!(out, "No contacts.");
        }
        for contact in &self.contacts {
            writeln!(out, "{contact}")?;
        }
        Ok(())
    }
}

impl SearchResult {
    /// Wrap a lookup outcome
    #[must_use]
    pub fn new(query: impl Into<String>, contact: Option<Contact>) -> Self {
        Self {
            query: query.into(),
            found: contact.is_some(),
            contact,
        }
    }

    /// Render the result to a writer
    pub fn write_to(&self, out: &mut impl Write, mode: OutputMode) {
        let written = match (mode, &self.contact) {
            (OutputMode::Human, Some(contact)) => writeln!(out, "{contact}"),
            (OutputMode::Human, None) => writeln!(out, "No contact named '{}'.", self.query),
            (OutputMode::Json, _) => write_json(out, self),
        };
        report(written);
    }
}

impl OperationResult {
    /// Render the result to a writer
    pub fn write_to(&self, out: &mut impl Write, mode: OutputMode) {
        let written = match mode {
            OutputMode::Human => writeln!(out, "{}", self.message),
            OutputMode::Json => write_json(out, self),
        };
        report(written);
    }
}

impl SessionResult {
    /// Render the result to stdout
    pub fn render(&self, mode: OutputMode) {
        self.write_to(&mut io::stdout().lock(), mode);
    }

    /// Render the result to a writer
    ///
    /// Human mode prints each part under its own heading; JSON mode prints
    /// one document.
    pub fn write_to(&self, out: &mut impl Write, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if !self.searches.is_empty() {
                    report(writeln!(out, "Search results:"));
                    for search in &self.searches {
                        search.write_to(out, mode);
                    }
                }
                if !self.deletions.is_empty() {
                    report(writeln!(out, "Deletions:"));
                    for deletion in &self.deletions {
                        deletion.write_to(out, mode);
                    }
                }
                report(writeln!(out, "Contacts:"));
                self.remaining.write_to(out, mode);
            },
            OutputMode::Json => report(write_json(out, self)),
        }
    }
}

fn write_json(out: &mut impl Write, value: &impl Serialize) -> io::Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value).unwrap_or_default())
}

fn report(written: io::Result<()>) {
    if let Err(e) = written {
        log::warn!("failed to write output: {e}");
    }
}
