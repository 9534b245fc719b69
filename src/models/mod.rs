//! Data models for address book entities.
//!
//! This module contains the data structures representing contact records
//! aggregated from the validated domain types.

pub mod record;

pub use record::Record;
