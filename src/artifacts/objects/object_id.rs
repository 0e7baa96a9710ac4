//! Object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character lowercase hexadecimal strings representing SHA-1
//! hashes of `<type> <size>\0<payload>`. They uniquely identify every stored
//! object (blobs, trees, commits, tags).
//!
//! ## Storage
//!
//! Objects are stored in `.git/objects/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::objects::{OBJECT_ID_LENGTH, RAW_OBJECT_ID_LENGTH};
use crate::errors::{StoreError, StoreResult};
use std::path::PathBuf;

/// Object identifier (SHA-1 hash)
///
/// Always holds exactly 40 lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// Upper-case hex digits are accepted and folded to lower case.
    pub fn try_parse(id: String) -> StoreResult<Self> {
        if id.len() != OBJECT_ID_LENGTH || !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(StoreError::InvalidObjectId(id));
        }
        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Build an object ID from the 20 raw digest bytes
    pub fn from_raw(raw: &[u8]) -> StoreResult<Self> {
        if raw.len() != RAW_OBJECT_ID_LENGTH {
            return Err(StoreError::InvalidObjectId(hex::encode(raw)));
        }
        Ok(Self(hex::encode(raw)))
    }

    /// The 20 raw bytes of the hash, big-endian, as stored in tree entries
    pub fn to_raw(&self) -> [u8; RAW_OBJECT_ID_LENGTH] {
        let mut raw = [0u8; RAW_OBJECT_ID_LENGTH];
        // the constructor guarantees 40 hex digits
        hex::decode_to_slice(&self.0, &mut raw).unwrap_or_default();
        raw
    }

    /// Convert to file system path for object storage
    ///
    /// Splits the hash as `XX/YYYYYY...` where XX is the first 2 chars.
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<[u8; RAW_OBJECT_ID_LENGTH]> for ObjectId {
    fn from(raw: [u8; RAW_OBJECT_ID_LENGTH]) -> Self {
        Self(hex::encode(raw))
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
