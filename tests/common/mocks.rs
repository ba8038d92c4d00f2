//! Mock implementations of port traits for testing
//!
//! These mocks record what they were asked to do instead of doing I/O.

use std::cell::RefCell;

use contactbook::core::ports::NotificationSender;

/// A notification captured by [`RecordingNotifier`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sent {
    pub recipient: String,
    pub message: String,
}

/// Notification sender that keeps every message it is given
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: RefCell<Vec<Sent>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything sent so far, oldest first
    pub fn sent(&self) -> Vec<Sent> {
        self.sent.borrow().clone()
    }

    /// Notifications sent to one recipient
    pub fn sent_to(&self, recipient: &str) -> Vec<Sent> {
        self.sent.borrow().iter().filter(|s| s.recipient == recipient).cloned().collect()
    }

    pub fn count(&self) -> usize {
        self.sent.borrow().len()
    }
}

impl NotificationSender for RecordingNotifier {
    fn send_notification(&self, recipient: &str, message: &str) {
        self.sent.borrow_mut().push(Sent {
            recipient: recipient.to_string(),
            message: message.to_string(),
        });
    }
}
