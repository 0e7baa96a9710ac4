//! Commit object
//!
//! Commits record a snapshot of the repository. The payload is a KVLM:
//!
//! ```text
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <email> <timestamp> <timezone>
//! committer <name> <email> <timestamp> <timezone>
//!
//! <commit message>
//! ```
//!
//! Headers are kept exactly as read, so unknown keys (`gpgsig`, `encoding`,
//! `mergetag`) survive a read/write cycle untouched.

use crate::artifacts::objects::kvlm::{Kvlm, KvlmValue};
use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{StoreError, StoreResult};
use bytes::Bytes;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Commit {
    kvlm: Kvlm,
}

impl Commit {
    pub fn kvlm(&self) -> &Kvlm {
        &self.kvlm
    }

    /// Tree object ID representing the directory snapshot
    pub fn tree_oid(&self) -> StoreResult<ObjectId> {
        self.kvlm
            .oids(b"tree")?
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::MalformedKvlm {
                format: "commit".to_string(),
                key: "tree".to_string(),
            })
    }

    /// Parent commit IDs (empty for a root commit, several for a merge)
    pub fn parents(&self) -> StoreResult<Vec<ObjectId>> {
        self.kvlm.oids(b"parent")
    }

    pub fn author(&self) -> Option<&Bytes> {
        self.kvlm.get(b"author").and_then(KvlmValue::first)
    }

    pub fn message(&self) -> &Bytes {
        self.kvlm.message()
    }

    /// First line of the commit message
    pub fn short_message(&self) -> String {
        String::from_utf8_lossy(self.message())
            .lines()
            .next()
            .unwrap_or("")
            .to_string()
    }
}

impl Packable for Commit {
    fn serialize(&self) -> Bytes {
        self.kvlm.serialize()
    }
}

impl Unpackable for Commit {
    fn deserialize(data: Bytes) -> StoreResult<Self> {
        Ok(Self::new(Kvlm::parse(&data)?))
    }
}
