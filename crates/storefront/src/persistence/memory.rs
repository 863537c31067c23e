//! In-memory storage backend.

use std::collections::HashMap;
use std::sync::RwLock;

use super::{StorageArea, StorageError};

/// Process-local storage.
///
/// Records vanish when the value is dropped. An optional quota caps the total
/// number of bytes held across all records, mirroring the way browser local
/// storage refuses writes once full.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: RwLock<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    /// Create an unbounded, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that refuses writes pushing its total size past
    /// `quota` bytes.
    #[must_use]
    pub fn with_quota(quota: usize) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            quota: Some(quota),
        }
    }

    /// Number of records currently held.
    ///
    /// Unlike reads and writes through [`StorageArea`], which report a
    /// poisoned lock as [`StorageError::Poisoned`], this still counts the
    /// records left behind by the panicking writer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records
            .read()
            .map_or_else(|poisoned| poisoned.into_inner().len(), |records| records.len())
    }

    /// Whether no records are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageArea for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let records = self.records.read().map_err(|_| StorageError::Poisoned)?;
        Ok(records.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut records = self.records.write().map_err(|_| StorageError::Poisoned)?;

        if let Some(limit) = self.quota {
            let others: usize = records
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            if others + key.len() + value.len() > limit {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    limit,
                });
            }
        }

        records.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
