//! Demo command - the fixed add, list, delete walkthrough

use contactbook::core::models::Contact;
use contactbook::core::ports::NotifierKind;
use contactbook::output::{ContactListResult, OutputMode};

use super::build_service;

/// Add Alice and Bob, list everyone, then delete Alice
pub fn demo(notifier: NotifierKind, mode: OutputMode) -> anyhow::Result<()> {
    let mut service = build_service(notifier, mode);

    service.add_contact(Contact::new("Alice", "alice@email.com", "123456"));
    service.add_contact(Contact::new("Bob", "bob@email.com", "987654"));

    ContactListResult::new(service.get_all_contacts()).render(mode);

    service.delete_contact("Alice");
    log::debug!("demo finished with {} contact(s)", service.get_all_contacts().len());

    Ok(())
}
