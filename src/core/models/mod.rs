//! Domain models for contactbook
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Contact`] - Name, email and phone of a person

mod contact;

pub use contact::Contact;
