//! Session command - load a seed file and run searches and deletions

use std::path::Path;

use contactbook::adapters::seed;
use contactbook::core::ports::NotifierKind;
use contactbook::output::{
    ContactListResult, OperationResult, OutputMode, SearchResult, SessionResult,
};

use super::build_service;

/// Run a scripted session against the contacts in `file`
///
/// Contacts are added in file order, then searches run, then deletions,
/// then whatever is left is listed.
pub fn session(
    file: &Path,
    searches: &[String],
    deletions: &[String],
    notifier: NotifierKind,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let seed = seed::load_file(file)?;
    let mut service = build_service(notifier, mode);

    let contacts = seed.into_contacts();
    log::info!("loaded {} contact(s) from {}", contacts.len(), file.display());
    for contact in contacts {
        service.add_contact(contact);
    }

    let searches = searches
        .iter()
        .map(|name| SearchResult::new(name.as_str(), service.search_contact(name)))
        .collect();

    let deletions = deletions
        .iter()
        .map(|name| match service.delete_contact(name) {
            Some(contact) => OperationResult {
                success: true,
                message: format!("Deleted contact '{}'.", contact.name()),
            },
            None => OperationResult {
                success: false,
                message: format!("No contact named '{name}'; nothing deleted."),
            },
        })
        .collect();

    SessionResult {
        searches,
        deletions,
        remaining: ContactListResult::new(service.get_all_contacts()),
    }
    .render(mode);

    Ok(())
}
