//! Tests for the in-memory contact repository

use contactbook::adapters::memory::InMemoryContactRepository;
use contactbook::core::models::Contact;
use contactbook::core::ports::{ContactRepository, Repository};

use crate::common::fixtures::{alice, bob, carol};

#[test]
fn test_repository_through_trait_object() {
    let mut repo: Box<dyn ContactRepository> = Box::new(InMemoryContactRepository::new());
    repo.add(alice());
    repo.add(bob());

    assert_eq!(repo.len(), 2);
    assert_eq!(repo.find_by_name("BOB"), Some(bob()));
    assert_eq!(repo.find_by_id("Alice@Email.com"), Some(alice()));
}

#[test]
fn test_remove_by_id_keeps_others_in_order() {
    let mut repo = InMemoryContactRepository::with_contacts(vec![alice(), bob(), carol()]);

    assert_eq!(repo.remove("bob@email.com"), Some(bob()));
    assert_eq!(repo.get_all(), vec![alice(), carol()]);
}

#[test]
fn test_remove_twice() {
    let mut repo = InMemoryContactRepository::with_contacts(vec![alice()]);

    assert!(repo.remove("alice@email.com").is_some());
    assert!(repo.remove("alice@email.com").is_none());
    assert!(repo.is_empty());
}

#[test]
fn test_find_by_name_does_not_match_email() {
    let repo = InMemoryContactRepository::with_contacts(vec![alice()]);
    assert_eq!(repo.find_by_name("alice@email.com"), None);
    assert_eq!(repo.find_by_id("Alice"), None);
}

#[test]
fn test_empty_strings_are_stored() {
    let mut repo = InMemoryContactRepository::new();
    repo.add(Contact::new("", "", ""));

    assert_eq!(repo.find_by_id(""), Some(Contact::new("", "", "")));
    assert_eq!(repo.find_by_name(""), Some(Contact::new("", "", "")));
}
