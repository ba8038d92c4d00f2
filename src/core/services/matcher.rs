//! Key matching
//!
//! Lookups by email or name compare case-insensitively, the way people
//! expect "alice", "Alice" and "ALICE" to be the same contact.

/// Compare two keys ignoring case
///
/// ASCII input takes the fast path; anything else is compared after full
/// Unicode lowercasing.
#[must_use]
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.to_lowercase() == b.to_lowercase()
}
