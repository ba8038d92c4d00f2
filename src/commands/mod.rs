//! Command implementations

mod demo;
mod session;

use std::io;

use contactbook::adapters::memory::InMemoryContactRepository;
use contactbook::adapters::notify::build_notifier;
use contactbook::core::ports::{NotificationSender, NotifierKind};
use contactbook::core::services::ContactService;
use contactbook::output::OutputMode;

pub use demo::demo;
pub use session::session;

/// Service wired with the default repository and a chosen notifier
type Service = ContactService<InMemoryContactRepository, Box<dyn NotificationSender>>;

/// Build a fresh service
///
/// Console notifications go to stderr in JSON mode so stdout stays parseable.
fn build_service(notifier: NotifierKind, mode: OutputMode) -> Service {
    let sender = match mode {
        OutputMode::Human => build_notifier(notifier, io::stdout()),
        OutputMode::Json => build_notifier(notifier, io::stderr()),
    };
    ContactService::new(InMemoryContactRepository::new(), sender)
}
