//! Durable key/value persistence for the storefront stores.
//!
//! # Layers
//!
//! - [`StorageArea`] - raw key → string medium (the local-storage analogue)
//! - [`PersistenceGateway`] - typed, stateless bridge that hydrates and
//!   flushes a store's item sequence as a JSON array under a fixed key
//!
//! # Backends
//!
//! - [`MemoryStorage`] - process-local map, optionally quota-limited
//! - [`FileStorage`] - one JSON file per key inside a data directory
//!
//! Reads are failure tolerant: a missing, unreadable or malformed record
//! hydrates as an empty sequence. Writes report failure to the caller.

mod file;
mod memory;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::instrument;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Record keys owned by each store.
pub mod keys {
    /// Key for the cart's line items.
    pub const CART: &str = "luxe_cart";

    /// Key for the wishlist's products.
    pub const WISHLIST: &str = "luxe_wishlist";
}

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("quota exceeded writing {key} (limit {limit} bytes)")]
    QuotaExceeded { key: String, limit: usize },

    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("storage lock poisoned")]
    Poisoned,
}

/// Errors raised when flushing a store to durable storage.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to encode {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: StorageError,
    },
}

/// A durable key/value medium holding string records.
pub trait StorageArea: Send + Sync {
    /// Read the record stored under `key`, or `None` if there is none.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the medium cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the medium refuses the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: StorageArea + ?Sized> StorageArea for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

impl<S: StorageArea + ?Sized> StorageArea for Arc<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

/// Typed bridge between an in-memory item sequence and a named record.
///
/// Holds no state of its own beyond the storage handle; every call goes
/// straight to the backend.
#[derive(Debug, Clone)]
pub struct PersistenceGateway<S> {
    storage: S,
}

impl<S: StorageArea> PersistenceGateway<S> {
    /// Wrap a storage backend.
    #[must_use]
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Get a reference to the underlying storage backend.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Hydrate the sequence stored under `key`.
    ///
    /// Never fails: an absent record, a read error or a record that does not
    /// decode as an array of `T` all yield an empty sequence.
    #[instrument(skip(self))]
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.storage.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read record, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(items) => {
                tracing::debug!(items = items.len(), "Hydrated record");
                items
            }
            Err(e) => {
                tracing::warn!(error = %e, "Discarding malformed record, starting empty");
                Vec::new()
            }
        }
    }

    /// Flush `items` to the record under `key`, overwriting it.
    ///
    /// # Errors
    ///
    /// Returns `PersistError` if the items cannot be encoded or the backend
    /// refuses the write.
    #[instrument(skip(self, items), fields(items = items.len()))]
    pub fn save<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), PersistError> {
        let raw = serde_json::to_string(items).map_err(|source| PersistError::Encode {
            key: key.to_string(),
            source,
        })?;

        self.storage.set_item(key, &raw).map_err(|source| {
            tracing::error!(error = %source, "Failed to flush record");
            PersistError::Write {
                key: key.to_string(),
                source,
            }
        })?;

        tracing::debug!(bytes = raw.len(), "Flushed record");
        Ok(())
    }
}
