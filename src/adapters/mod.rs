//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `memory/` - In-memory contact repository
//! - `notify/` - Console and log notification senders
//! - `seed/` - TOML seed file loading

pub mod memory;
pub mod notify;
pub mod seed;
