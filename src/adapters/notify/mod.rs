//! Notification transports
//!
//! - [`console`] - One line per notification on stdout/stderr
//! - [`logger`] - Notifications as log records

pub mod console;
pub mod logger;

use std::io::Write;

pub use console::ConsoleNotifier;
pub use logger::LogNotifier;

use crate::core::ports::{NotificationSender, NotifierKind};

/// Build the notification sender for a transport kind
///
/// Console output goes to `console_out`; the log transport ignores it.
#[must_use]
pub fn build_notifier<W: Write + 'static>(
    kind: NotifierKind,
    console_out: W,
) -> Box<dyn NotificationSender> {
    match kind {
        NotifierKind::Console => Box::new(ConsoleNotifier::with_writer(console_out)),
        NotifierKind::Log => Box::new(LogNotifier::new()),
    }
}
