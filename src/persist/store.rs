//! Keyed blob storage.
//!
//! A `BlobStore` knows nothing about sessions: it reads and writes opaque
//! bytes under string keys. Implementations must be shareable across
//! threads so a store can sit behind an `Arc`.

use std::sync::RwLock;

use rustc_hash::FxHashMap;

use super::error::{PersistError, Result};

/// Opaque keyed byte storage.
pub trait BlobStore: Send + Sync {
    /// Read the blob under `key`, if present.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Write a blob, replacing any previous one.
    fn write(&self, key: &str, bytes: &[u8]) -> Result<()>;

    /// Remove the blob under `key`. Removing a missing key succeeds.
    fn remove(&self, key: &str) -> Result<()>;

    /// Is there a blob under `key`?
    fn contains(&self, key: &str) -> bool;
}

/// In-memory store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: RwLock<FxHashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored blobs.
    pub fn len(&self) -> Result<usize> {
        let blobs = self.blobs.read().map_err(|_| PersistError::LockPoisoned)?;
        Ok(blobs.len())
    }
}

impl BlobStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let blobs = self.blobs.read().map_err(|_| PersistError::LockPoisoned)?;
        Ok(blobs.get(key).cloned())
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let mut blobs = self.blobs.write().map_err(|_| PersistError::LockPoisoned)?;
        blobs.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut blobs = self.blobs.write().map_err(|_| PersistError::LockPoisoned)?;
        blobs.remove(key);
        Ok(())
    }

    fn contains(&self, key: &str) -> bool {
        self.blobs
            .read()
            .map(|blobs| blobs.contains_key(key))
            .unwrap_or(false)
    }
}
