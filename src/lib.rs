//! contactbook - A small layered contact manager
//!
//! Contacts live in a repository, a service adds, lists, searches and
//! deletes them, and every add or delete sends a notification to the
//! contact's email.
//!
//! ```
//! use contactbook::adapters::memory::InMemoryContactRepository;
//! use contactbook::adapters::notify::LogNotifier;
//! use contactbook::core::models::Contact;
//! use contactbook::core::services::ContactService;
//!
//! let mut service = ContactService::new(InMemoryContactRepository::new(), LogNotifier::new());
//! service.add_contact(Contact::new("Alice", "alice@email.com", "123456"));
//! assert!(service.search_contact("alice").is_some());
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
