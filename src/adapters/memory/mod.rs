//! In-memory contact repository
//!
//! Implements `ContactRepository` over a `Vec` in insertion order. Lookups
//! are linear scans; the lists this holds are small.

use log::{debug, trace};

use crate::core::models::Contact;
use crate::core::ports::{ContactRepository, Repository};
use crate::core::services::eq_ignore_case;

/// Contact repository backed by a plain vector
#[derive(Debug, Clone, Default)]
pub struct InMemoryContactRepository {
    contacts: Vec<Contact>,
}

impl InMemoryContactRepository {
    /// Create an empty repository
    #[must_use]
    pub const fn new() -> Self {
        Self {
            contacts: Vec::new(),
        }
    }

    /// Create a repository preloaded with contacts, in order
    #[must_use]
    pub const fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    fn position_by_id(&self, id: &str) -> Option<usize> {
        self.contacts.iter().position(|c| eq_ignore_case(c.email(), id))
    }
}

impl Repository<Contact> for InMemoryContactRepository {
    fn add(&mut self, contact: Contact) {
        trace!("storing contact at index {}", self.contacts.len());
        self.contacts.push(contact);
    }

    fn get_all(&self) -> Vec<Contact> {
        self.contacts.clone()
    }

    fn find_by_id(&self, id: &str) -> Option<Contact> {
        self.position_by_id(id).map(|i| self.contacts[i].clone())
    }

    fn remove(&mut self, id: &str) -> Option<Contact> {
        let index = self.position_by_id(id)?;
        debug!("removing contact at index {index}");
        Some(self.contacts.remove(index))
    }

    fn len(&self) -> usize {
        self.contacts.len()
    }
}

impl ContactRepository for InMemoryContactRepository {
    fn find_by_name(&self, name: &str) -> Option<Contact> {
        self.contacts.iter().find(|c| eq_ignore_case(c.name(), name)).cloned()
    }
}
