//! Log-backed notification sender
//!
//! Routes notifications through the `log` facade on the `notification`
//! target, so they land wherever the logger sends them.

use log::info;

use crate::core::ports::{NotificationSender, format_notification};

/// Log target used for every notification
pub const NOTIFICATION_TARGET: &str = "notification";

/// Emits notifications as `info` log records
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl LogNotifier {
    /// Create a log notifier
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl NotificationSender for LogNotifier {
    fn send_notification(&self, recipient: &str, message: &str) {
        info!(target: NOTIFICATION_TARGET, "{}", format_notification(recipient, message));
    }
}
