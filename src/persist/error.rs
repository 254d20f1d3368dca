//! Error types for save persistence.

use thiserror::Error;

use crate::tiles::TemplateId;

/// Errors raised while saving or loading a session.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("save store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("save version {found} does not match expected {expected}")]
    VersionMismatch { found: String, expected: &'static str },

    #[error("save references unknown template {0}")]
    UnknownTemplate(TemplateId),

    #[error("corrupted snapshot: {0}")]
    CorruptSnapshot(String),
}

impl PersistError {
    /// Can the caller discard the save and start a fresh session?
    ///
    /// Storage failures are not recoverable this way: the blob may be fine
    /// and retrying later may succeed.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PersistError::Serialization(_)
                | PersistError::VersionMismatch { .. }
                | PersistError::UnknownTemplate(_)
                | PersistError::CorruptSnapshot(_)
        )
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(err: serde_json::Error) -> Self {
        PersistError::Serialization(err.to_string())
    }
}

impl From<bincode::Error> for PersistError {
    fn from(err: bincode::Error) -> Self {
        PersistError::Serialization(err.to_string())
    }
}

/// Result type for persistence operations.
pub type Result<T> = std::result::Result<T, PersistError>;
