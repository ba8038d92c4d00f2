//! Core domain logic for contactbook
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Contact)
//! - `services/` - Business logic orchestration
//! - `ports/` - Trait definitions for storage and notifications

pub mod models;
pub mod ports;
pub mod services;
