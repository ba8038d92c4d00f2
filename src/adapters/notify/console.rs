//! Console notification sender
//!
//! Writes one line per notification to any writer, usually stdout or stderr.

use std::cell::RefCell;
use std::io::Write;

use log::warn;

use crate::core::ports::{NotificationSender, format_notification};

/// Prints notifications as `[Notification → recipient] message`
#[derive(Debug)]
pub struct ConsoleNotifier<W: Write> {
    out: RefCell<W>,
}

impl<W: Write> ConsoleNotifier<W> {
    /// Notifier writing to an arbitrary sink
    #[must_use]
    pub const fn with_writer(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    /// Recover the underlying writer
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> NotificationSender for ConsoleNotifier<W> {
    fn send_notification(&self, recipient: &str, message: &str) {
        let line = format_notification(recipient, message);
        let mut out = self.out.borrow_mut();
        if let Err(e) = writeln!(out, "{line}").and_then(|()| out.flush()) {
            warn!("failed to write notification for {recipient}: {e}");
        }
    }
}
