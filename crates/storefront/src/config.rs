//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `LUXE_DATA_DIR` - Directory holding the durable cart and wishlist records
//!   (default: `.luxe`)
//! - `LUXE_CATALOG` - Path to the product catalog JSON file
//!   (default: `catalog.json`)
//! - `LUXE_LOG_FORMAT` - `pretty` or `json` (default: `pretty`)
//! - `RUST_LOG` - Log filter directives (read by the subscriber, not here)

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = ".luxe";
const DEFAULT_CATALOG: &str = "catalog.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(format!("expected `pretty` or `json`, got `{s}`")),
        }
    }
}

/// Storefront application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory for durable store records
    pub data_dir: PathBuf,
    /// Product catalog file
    pub catalog_path: PathBuf,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            catalog_path: PathBuf::from(DEFAULT_CATALOG),
            log_format: LogFormat::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let data_dir = lookup("LUXE_DATA_DIR")
            .filter(|v| !v.trim().is_empty())
            .map_or(defaults.data_dir, PathBuf::from);
        let catalog_path = lookup("LUXE_CATALOG")
            .filter(|v| !v.trim().is_empty())
            .map_or(defaults.catalog_path, PathBuf::from);
        let log_format = match lookup("LUXE_LOG_FORMAT") {
            Some(raw) => raw
                .parse::<LogFormat>()
                .map_err(|e| ConfigError::InvalidEnvVar("LUXE_LOG_FORMAT".to_string(), e))?,
            None => defaults.log_format,
        };

        Ok(Self {
            data_dir,
            catalog_path,
            log_format,
        })
    }
}
