//! Session save adapter.
//!
//! `Persistence` binds a blob store, a key and a codec. It stores exactly
//! one save: `save` overwrites, `load` returns `None` when there is nothing
//! usable, `clear` removes it.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::envelope::{SaveCodec, SaveEnvelope, SAVE_VERSION};
use super::error::{PersistError, Result};
use super::store::{BlobStore, MemoryStore};
use crate::session::Snapshot;

/// Key the session is saved under by default.
pub const DEFAULT_SAVE_KEY: &str = "tile-game-save";

/// Saves and loads session snapshots.
///
/// ```
/// use tile_explorer::persist::Persistence;
/// use tile_explorer::session::GameSession;
///
/// let persistence = Persistence::in_memory();
/// let session = GameSession::standard(Default::default());
///
/// persistence.save(&session.snapshot()).unwrap();
/// assert!(persistence.exists());
/// assert!(persistence.load().unwrap().is_some());
/// ```
#[derive(Clone)]
pub struct Persistence {
    store: Arc<dyn BlobStore>,
    key: String,
    codec: SaveCodec,
}

impl Persistence {
    /// Persist into `store` under the default key, as JSON.
    #[must_use]
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self {
            store,
            key: DEFAULT_SAVE_KEY.to_string(),
            codec: SaveCodec::default(),
        }
    }

    /// Persist into a fresh in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Use a different key (builder pattern).
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Use a different codec (builder pattern).
    #[must_use]
    pub fn with_codec(mut self, codec: SaveCodec) -> Self {
        self.codec = codec;
        self
    }

    /// The save key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Write a snapshot, replacing any previous save.
    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let bytes = self.codec.encode(&SaveEnvelope::new(snapshot))?;
        self.store.write(&self.key, &bytes)?;
        tracing::debug!(key = %self.key, bytes = bytes.len(), "session saved");
        Ok(())
    }

    /// Read the saved snapshot.
    ///
    /// Returns `None` when nothing is saved, or when the save has a
    /// different version, in which case the stale blob is removed. A blob
    /// that fails to decode is reported as an error and left in place.
    pub fn load(&self) -> Result<Option<Snapshot>> {
        let Some(bytes) = self.store.read(&self.key)? else {
            return Ok(None);
        };

        // Only the version is read before the check; older formats may
        // differ in every other field
        let version = self.codec.version(&bytes)?;
        if version != SAVE_VERSION {
            tracing::info!(
                key = %self.key,
                found = %version,
                expected = SAVE_VERSION,
                "discarding save with mismatched version"
            );
            self.clear()?;
            return Ok(None);
        }

        let envelope: SaveEnvelope<Snapshot> = self.codec.decode(&bytes)?;
        tracing::debug!(key = %self.key, saved_at = %envelope.timestamp, "session loaded");
        Ok(Some(envelope.state))
    }

    /// When the current save was written, if it is readable.
    pub fn saved_at(&self) -> Result<Option<DateTime<Utc>>> {
        let Some(bytes) = self.store.read(&self.key)? else {
            return Ok(None);
        };
        let version = self.codec.version(&bytes)?;
        if version != SAVE_VERSION {
            return Err(PersistError::VersionMismatch {
                found: version,
                expected: SAVE_VERSION,
            });
        }
        Ok(Some(self.codec.header(&bytes)?.timestamp))
    }

    /// Remove the save.
    pub fn clear(&self) -> Result<()> {
        self.store.remove(&self.key)
    }

    /// Is a save present?
    #[must_use]
    pub fn exists(&self) -> bool {
        self.store.contains(&self.key)
    }
}

impl std::fmt::Debug for Persistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persistence")
            .field("key", &self.key)
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::GameSession;

    fn snapshot() -> Snapshot {
        GameSession::standard(crate::core::SessionConfig::default().with_seed(3)).snapshot()
    }

    #[test]
    fn test_load_missing_is_none() {
        let persistence = Persistence::in_memory();
        assert!(!persistence.exists());
        assert!(persistence.load().unwrap().is_none());
        assert!(persistence.saved_at().unwrap().is_none());
    }

    #[test]
    fn test_roundtrip_both_codecs() {
        for codec in [SaveCodec::Json, SaveCodec::Binary] {
            let persistence = Persistence::in_memory().with_codec(codec);
            let snapshot = snapshot();

            persistence.save(&snapshot).unwrap();
            assert_eq!(persistence.load().unwrap(), Some(snapshot));
            assert!(persistence.saved_at().unwrap().is_some());
        }
    }

    #[test]
    fn test_version_mismatch_clears() {
        let store = Arc::new(MemoryStore::new());
        let persistence = Persistence::new(store.clone());

        let mut envelope = SaveEnvelope::new(snapshot());
        envelope.version = "0.1".into();
        store
            .write(DEFAULT_SAVE_KEY, &SaveCodec::Json.encode(&envelope).unwrap())
            .unwrap();

        assert!(persistence.load().unwrap().is_none());
        assert!(!persistence.exists());
    }

    #[test]
    fn test_old_format_with_numeric_timestamp_clears() {
        let store = Arc::new(MemoryStore::new());
        store
            .write(
                DEFAULT_SAVE_KEY,
                br#"{"version":"0.9","timestamp":1700000000000,"state":{}}"#,
            )
            .unwrap();
        let persistence = Persistence::new(store.clone());

        assert!(matches!(
            persistence.saved_at(),
            Err(PersistError::VersionMismatch { .. })
        ));
        assert!(persistence.load().unwrap().is_none());
        assert!(!persistence.exists());
        assert!(!store.contains(DEFAULT_SAVE_KEY));
    }

    #[test]
    fn test_garbage_is_recoverable_error() {
        let store = Arc::new(MemoryStore::new());
        store.write("slot", b"{\"version\": 7").unwrap();
        let persistence = Persistence::new(store).with_key("slot");

        let err = persistence.load().unwrap_err();
        assert!(err.is_recoverable());
        assert!(persistence.exists());
    }

    #[test]
    fn test_clear() {
        let persistence = Persistence::in_memory();
        persistence.save(&snapshot()).unwrap();
        persistence.clear().unwrap();
        assert!(!persistence.exists());
    }
}
