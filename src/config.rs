//! Application configuration management
//!
//! This module handles loading and validating configuration from environment
//! variables. Configuration is loaded once at startup by the embedding
//! application and passed down explicitly; there is no global instance.

use std::env;
use std::path::PathBuf;

use crate::constants::DEFAULT_DATA_DIR;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub storage: StorageConfig,
}

/// Record store configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory holding the persisted JSON documents
    pub data_dir: PathBuf,
    /// Pretty-print persisted documents
    pub pretty: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            storage: StorageConfig::from_env()?,
        })
    }
}

impl StorageConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            data_dir: PathBuf::from(
                env::var("CRMP_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string()),
            ),
            pretty: env::var("CRMP_PRETTY_JSON")
                .map(|v| {
                    v.parse()
                        .map_err(|_| ConfigError::InvalidValue("CRMP_PRETTY_JSON".to_string()))
                })
                .unwrap_or(Ok(false))?,
        })
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            pretty: false,
        }
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
