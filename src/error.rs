//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on records or the address book.
#[derive(Error, Debug)]
pub enum BookError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No phone with the requested value exists on the record
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    /// Paging was requested with a zero page size
    #[error("Page size must be at least 1")]
    InvalidPageSize,

    /// A snapshot could not be decoded into records
    #[error("Corrupt snapshot: {0}")]
    CorruptSnapshot(#[from] serde_json::Error),

    /// Reading or writing the snapshot file failed
    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::PhoneNotFound("1234567890".to_string());
        assert_eq!(err.to_string(), "Phone number not found: 1234567890");

        let err = BookError::InvalidPageSize;
        assert_eq!(err.to_string(), "Page size must be at least 1");

        let err = ConfigError::InvalidValue {
            var: "ADDRBOOK_PAGE_SIZE".to_string(),
            reason: "Must be a positive number".to_string(),
        };
        assert!(err.to_string().contains("ADDRBOOK_PAGE_SIZE"));
    }

    #[test]
    fn test_validation_error_converts() {
        let err: BookError = ValidationError::InvalidPhone("123".to_string()).into();
        assert_eq!(err.to_string(), "Invalid phone number: 123");
    }
}
