//! Blob object
//!
//! Blobs store file content. They hold only the raw bytes, without any
//! metadata like filename or permissions (those live in trees).
//!
//! ## Format
//!
//! On disk: `blob <size>\0<content>`

use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::errors::StoreResult;
use bytes::Bytes;
use derive_new::new;

/// Opaque file content
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    data: Bytes,
}

impl Blob {
    pub fn data(&self) -> &Bytes {
        &self.data
    }
}

impl Packable for Blob {
    fn serialize(&self) -> Bytes {
        self.data.clone()
    }
}

impl Unpackable for Blob {
    fn deserialize(data: Bytes) -> StoreResult<Self> {
        Ok(Self::new(data))
    }
}
