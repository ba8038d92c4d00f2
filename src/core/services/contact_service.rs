//! Contact use-case service
//!
//! Orchestrates a [`ContactRepository`] and a [`NotificationSender`]:
//! storage first, then a best-effort notification. Every call is
//! self-contained; there is no state beyond what the repository holds.

use log::debug;

use crate::core::models::Contact;
use crate::core::ports::{ContactRepository, NotificationSender};

/// Contact management over a repository and a notification transport
#[derive(Debug)]
pub struct ContactService<R, N> {
    repository: R,
    notifier: N,
}

impl<R: ContactRepository, N: NotificationSender> ContactService<R, N> {
    /// Create a service from a repository and a notification sender
    pub const fn new(repository: R, notifier: N) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Store a contact and notify its email address
    ///
    /// Duplicates are accepted. The notification cannot undo the insert.
    pub fn add_contact(&mut self, contact: Contact) {
        debug!("adding contact {contact}");
        let email = contact.email().to_string();
        let message = added_message(&contact);
        self.repository.add(contact);
        self.notifier.send_notification(&email, &message);
    }

    /// All contacts in insertion order
    #[must_use]
    pub fn get_all_contacts(&self) -> Vec<Contact> {
        self.repository.get_all()
    }

    /// Look a contact up by name, ignoring case
    #[must_use]
    pub fn search_contact(&self, name: &str) -> Option<Contact> {
        self.repository.find_by_name(name)
    }

    /// Delete the first contact with this name and notify its email
    ///
    /// A name with no match is a silent no-op: nothing is removed and no
    /// notification goes out.
    ///
    /// Removal goes by the found contact's email, so when emails are shared
    /// the record removed is the first one with that email. That record is
    /// what gets returned.
    pub fn delete_contact(&mut self, name: &str) -> Option<Contact> {
        let Some(contact) = self.repository.find_by_name(name) else {
            debug!("delete skipped, no contact named '{name}'");
            return None;
        };

        let removed = self.repository.remove(contact.email());
        self.notifier.send_notification(contact.email(), &removed_message(&contact));
        if let Some(removed) = &removed {
            debug!("deleted contact {removed}");
        }
        removed
    }

    /// Borrow the underlying repository
    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Borrow the notification sender
    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Take the service apart
    #[must_use]
    pub fn into_parts(self) -> (R, N) {
        (self.repository, self.notifier)
    }
}

fn added_message(contact: &Contact) -> String {
    format!("New contact '{}' added.", contact.name())
}

fn removed_message(contact: &Contact) -> String {
    format!("Contact '{}' has been removed.", contact.name())
}
