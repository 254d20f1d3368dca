//! Save persistence.
//!
//! ## Key Types
//!
//! - `Persistence`: save/load/clear/exists for one session save
//! - `BlobStore`: keyed byte storage (`MemoryStore`, `FileStore`)
//! - `SaveEnvelope`, `SaveCodec`: versioned wrapper and its encodings
//! - `PersistError`: failures, split into recoverable and not

pub mod error;
pub mod envelope;
pub mod store;
pub mod file;
pub mod persistence;

pub use error::PersistError;
pub use envelope::{EnvelopeHeader, SaveCodec, SaveEnvelope, SAVE_VERSION};
pub use store::{BlobStore, MemoryStore};
pub use file::FileStore;
pub use persistence::{Persistence, DEFAULT_SAVE_KEY};
