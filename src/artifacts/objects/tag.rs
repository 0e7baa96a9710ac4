//! Tag object
//!
//! Annotated tags point at another object and carry their own metadata. They
//! share the commit payload format:
//!
//! ```text
//! object <sha>
//! type commit
//! tag v1.0
//! tagger <name> <email> <timestamp> <timezone>
//!
//! <tag message>
//! ```

use crate::artifacts::objects::kvlm::{Kvlm, KvlmValue};
use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{StoreError, StoreResult};
use bytes::Bytes;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Tag {
    kvlm: Kvlm,
}

impl Tag {
    pub fn kvlm(&self) -> &Kvlm {
        &self.kvlm
    }

    /// The object this tag points at
    pub fn target_oid(&self) -> StoreResult<ObjectId> {
        self.kvlm
            .oids(b"object")?
            .into_iter()
            .next()
            .ok_or_else(|| self.missing("object"))
    }

    /// Declared type of the tagged object
    pub fn target_type(&self) -> StoreResult<ObjectType> {
        let value = self
            .kvlm
            .get(b"type")
            .and_then(KvlmValue::first)
            .ok_or_else(|| self.missing("type"))?;
        ObjectType::try_from(value.as_ref())
    }

    pub fn name(&self) -> Option<String> {
        self.kvlm
            .get(b"tag")
            .and_then(KvlmValue::first)
            .map(|name| String::from_utf8_lossy(name).into_owned())
    }

    pub fn message(&self) -> &Bytes {
        self.kvlm.message()
    }

    fn missing(&self, key: &str) -> StoreError {
        StoreError::MalformedKvlm {
            format: "tag".to_string(),
            key: key.to_string(),
        }
    }
}

impl Packable for Tag {
    fn serialize(&self) -> Bytes {
        self.kvlm.serialize()
    }
}

impl Unpackable for Tag {
    fn deserialize(data: Bytes) -> StoreResult<Self> {
        Ok(Self::new(Kvlm::parse(&data)?))
    }
}
