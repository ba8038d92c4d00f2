//! Repository ports
//!
//! Defines the storage interface the contact service depends on.

use super::super::models::Contact;

/// Generic keyed storage
///
/// Implementations keep items in insertion order. Lookups signal absence
/// with `None`; a missing id is never an error.
pub trait Repository<T> {
    /// Append an item to the end of the sequence
    fn add(&mut self, item: T);

    /// All items in insertion order
    ///
    /// Returns an owned copy so callers cannot disturb stored state.
    fn get_all(&self) -> Vec<T>;

    /// First item whose id equals `id` (case-insensitive)
    fn find_by_id(&self, id: &str) -> Option<T>;

    /// Remove the item `find_by_id` would return
    ///
    /// Does nothing when no item matches. Returns the removed item.
    fn remove(&mut self, id: &str) -> Option<T>;

    /// Number of stored items
    fn len(&self) -> usize {
        self.get_all().len()
    }

    /// Whether the repository holds no items
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Repository for contacts, keyed by email
pub trait ContactRepository: Repository<Contact> {
    /// First contact whose name equals `name` (case-insensitive)
    fn find_by_name(&self, name: &str) -> Option<Contact>;
}
