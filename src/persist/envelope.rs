//! Versioned save envelope and codecs.
//!
//! Every save is wrapped as `{ version, timestamp, state }`. The version
//! and timestamp come first so a reader can check them without decoding
//! the (possibly incompatible) state.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::Result;

/// Current save format version.
pub const SAVE_VERSION: &str = "1.0";

/// A save with its format tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaveEnvelope<T> {
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub state: T,
}

impl<T> SaveEnvelope<T> {
    /// Wrap `state` with the current version, stamped now.
    pub fn new(state: T) -> Self {
        Self {
            version: SAVE_VERSION.to_string(),
            timestamp: Utc::now(),
            state,
        }
    }

    /// Does this envelope carry the current version?
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.version == SAVE_VERSION
    }
}

/// The first field of an envelope.
///
/// Decodes saves of any format generation, whatever the shape of the
/// fields after it.
#[derive(Deserialize)]
struct VersionTag {
    version: String,
}

/// Leading fields of an envelope.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct EnvelopeHeader {
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

/// Encoding used for save blobs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaveCodec {
    /// Human-readable JSON text.
    #[default]
    Json,
    /// Compact bincode.
    Binary,
}

impl SaveCodec {
    /// Encode an envelope.
    pub fn encode<T: Serialize>(self, envelope: &SaveEnvelope<T>) -> Result<Vec<u8>> {
        Ok(match self {
            SaveCodec::Json => serde_json::to_vec(envelope)?,
            SaveCodec::Binary => bincode::serialize(envelope)?,
        })
    }

    /// Decode only the version tag.
    pub fn version(self, bytes: &[u8]) -> Result<String> {
        let tag: VersionTag = match self {
            SaveCodec::Json => serde_json::from_slice(bytes)?,
            SaveCodec::Binary => bincode::deserialize(bytes)?,
        };
        Ok(tag.version)
    }

    /// Decode only the version and timestamp.
    pub fn header(self, bytes: &[u8]) -> Result<EnvelopeHeader> {
        Ok(match self {
            SaveCodec::Json => serde_json::from_slice(bytes)?,
            // bincode ignores trailing bytes, so the header reads as a prefix
            SaveCodec::Binary => bincode::deserialize(bytes)?,
        })
    }

    /// Decode a full envelope.
    pub fn decode<T: DeserializeOwned>(self, bytes: &[u8]) -> Result<SaveEnvelope<T>> {
        Ok(match self {
            SaveCodec::Json => serde_json::from_slice(bytes)?,
            SaveCodec::Binary => bincode::deserialize(bytes)?,
        })
    }
}
