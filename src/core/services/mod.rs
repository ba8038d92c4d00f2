//! Business logic services
//!
//! - [`contact_service`] - Add, list, search and delete contacts
//! - [`matcher`] - Case-insensitive key comparison

pub mod contact_service;
pub mod matcher;

pub use contact_service::ContactService;
pub use matcher::eq_ignore_case;
