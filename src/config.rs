//! Configuration management for the addrbook demo binary.
//!
//! This module handles loading and validating configuration from
//! environment variables. The library core takes no environment input;
//! only the demo driver reads this.

use crate::book::DEFAULT_SNAPSHOT_FILE;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the addrbook demo binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Snapshot file the demo saves to and reloads from
    pub snapshot_path: PathBuf,

    /// Records per page when listing the book (default: 4)
    pub page_size: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRBOOK_FILE`: snapshot file path (default: `SomeAddressBook.bin`)
    /// - `ADDRBOOK_PAGE_SIZE`: records per page, at least 1 (default: 4)
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let snapshot_path = env::var("ADDRBOOK_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SNAPSHOT_FILE));

        let page_size = Self::parse_env_usize("ADDRBOOK_PAGE_SIZE", 4)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "ADDRBOOK_PAGE_SIZE".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        Ok(Config {
            snapshot_path,
            page_size,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_FILE),
            page_size: 4,
        }
    }
}
