//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the contact service and
//! whatever stores contacts or delivers notifications.
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The service depends only on these traits, never on concrete
//! implementations, so a different store or transport can be swapped in
//! without touching it.

mod notification;
mod repository;

#[cfg(test)]
pub use notification::MockNotificationSender;
pub use notification::{NotificationSender, NotifierKind, format_notification};
pub use repository::{ContactRepository, Repository};
