//! Unified error type for storefront intents.
//!
//! Store mutations report only flush failures (`PersistError`); intents that
//! also resolve products against the catalog can fail before anything is
//! mutated. `StorefrontError` covers both so view code can use `?` throughout.

use luxe_core::ProductId;
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::persistence::PersistError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Flushing a store to durable storage failed. The in-memory change was
    /// kept.
    #[error("Changes may not survive a restart: {0}")]
    Persist(#[from] PersistError),

    /// The catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration is invalid.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// No product with this ID exists where it was looked up.
    #[error("Not found: product {0}")]
    ProductNotFound(ProductId),
}

impl StorefrontError {
    /// Whether the intent itself took effect in memory despite the error.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Persist(_))
    }
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
