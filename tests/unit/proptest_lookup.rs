//! Property-based tests for case-insensitive lookup
//!
//! Uses proptest to verify properties that should hold for all inputs.

use contactbook::adapters::memory::InMemoryContactRepository;
use contactbook::core::models::Contact;
use contactbook::core::ports::{ContactRepository, Repository};
use contactbook::core::services::eq_ignore_case;
use proptest::prelude::*;

proptest! {
    /// A name matches itself in any ASCII casing
    #[test]
    fn name_lookup_ignores_case(name in "[a-zA-Z]{1,12}") {
        let repo = InMemoryContactRepository::with_contacts(vec![
            Contact::new(name.clone(), "x@y.z", "1"),
        ]);
        let lower = repo.find_by_name(&name.to_lowercase());
        prop_assert!(lower.is_some());
        prop_assert_eq!(repo.find_by_name(&name.to_uppercase()), lower.clone());
        prop_assert_eq!(repo.find_by_name(&name), lower);
    }

    /// Email lookup ignores case as well
    #[test]
    fn id_lookup_ignores_case(user in "[a-zA-Z0-9]{1,10}", host in "[a-z]{1,8}") {
        let email = format!("{user}@{host}.com");
        let repo = InMemoryContactRepository::with_contacts(vec![
            Contact::new("n", email.clone(), "1"),
        ]);
        prop_assert!(repo.find_by_id(&email.to_uppercase()).is_some());
    }

    /// Comparison is symmetric
    #[test]
    fn eq_ignore_case_is_symmetric(a in "\\PC{0,8}", b in "\\PC{0,8}") {
        prop_assert_eq!(eq_ignore_case(&a, &b), eq_ignore_case(&b, &a));
    }

    /// Insertion order survives any sequence of adds
    #[test]
    fn listing_keeps_insertion_order(names in prop::collection::vec("[a-z]{1,6}", 0..20)) {
        let mut repo = InMemoryContactRepository::new();
        for name in &names {
            repo.add(Contact::new(name.clone(), format!("{name}@x.com"), ""));
        }
        let listed: Vec<String> = repo.get_all().iter().map(|c| c.name().to_string()).collect();
        prop_assert_eq!(listed, names);
    }
}
