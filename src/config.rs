//! Configuration management.
//!
//! Loads settings from environment variables, optionally seeded from a
//! `.env` file. Everything has a default: the core runs unconfigured.

use crate::error::{ConfigError, ConfigResult};
use crate::image::DEFAULT_KEY_PREFIX;
use std::env;

/// Runtime configuration for the contact-book core.
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace prefix for picture blob keys (default: `contacts/images`)
    pub blob_key_prefix: String,

    /// Default log level when `RUST_LOG` is unset (default: `info`)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_BLOB_PREFIX`: blob key namespace (default: `contacts/images`)
    /// - `CONTACTS_LOG_LEVEL`: default tracing level (default: `info`)
    pub fn from_env() -> ConfigResult<Self> {
        // Seed from .env if present; missing files are fine
        let _ = dotenvy::dotenv();

        let blob_key_prefix = env::var("CONTACTS_BLOB_PREFIX")
            .unwrap_or_else(|_| DEFAULT_KEY_PREFIX.to_string());

        if blob_key_prefix.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_BLOB_PREFIX".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }
        if blob_key_prefix.starts_with('/') || blob_key_prefix.ends_with('/') {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_BLOB_PREFIX".to_string(),
                reason: "Must not start or end with '/'".to_string(),
            });
        }

        let log_level = env::var("CONTACTS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            blob_key_prefix,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            blob_key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            log_level: "info".to_string(),
        }
    }
}
