//! Addrbook - a persistent personal address book.
//!
//! This library models named contacts with validated phone numbers and an
//! optional birthday, keeps them in a name-keyed collection with search
//! and paged iteration, and persists the whole collection to a snapshot
//! file between runs.
//!
//! # Architecture
//!
//! - **domain**: validated value objects for names, phones, and birthdays
//! - **models**: the contact record aggregating the domain types
//! - **book**: the keyed record collection, snapshot schema, and scoped
//!   auto-save sessions
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management for the demo binary

// Re-export commonly used types
pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::{AddressBook, BookSession, Pages, DEFAULT_SNAPSHOT_FILE};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, ConfigError, ConfigResult};
pub use models::Record;
