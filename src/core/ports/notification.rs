//! Notification port
//!
//! Defines the interface for telling someone that something happened.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sends a human-readable message to a recipient
///
/// Delivery is fire-and-forget: there is no confirmation, retry or queueing,
/// and transport failures are not reported back to the caller.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSender {
    /// Send `message` to `recipient`
    fn send_notification(&self, recipient: &str, message: &str);
}

impl<N: NotificationSender + ?Sized> NotificationSender for Box<N> {
    fn send_notification(&self, recipient: &str, message: &str) {
        (**self).send_notification(recipient, message);
    }
}

/// Format a notification as a single output line
#[must_use]
pub fn format_notification(recipient: &str, message: &str) -> String {
    format!("[Notification → {recipient}] {message}")
}

/// Notification transport enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifierKind {
    /// Print to the console (default)
    #[default]
    Console,
    /// Emit through the `log` facade
    Log,
}

impl FromStr for NotifierKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" | "stdout" => Ok(Self::Console),
            "log" | "logger" => Ok(Self::Log),
            _ => Err(format!("Unknown notifier: {s}. Use 'console' or 'log'")),
        }
    }
}

impl fmt::Display for NotifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Console => write!(f, "console"),
            Self::Log => write!(f, "log"),
        }
    }
}
