use crate::artifacts::objects::RAW_OBJECT_ID_LENGTH;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tag::Tag;
use crate::artifacts::objects::tree::Tree;
use crate::errors::StoreResult;
use bytes::{Bytes, BytesMut};
use sha1::{Digest, Sha1};

/// Produces an object's payload (everything after the header)
pub trait Packable {
    fn serialize(&self) -> Bytes;
}

/// Rebuilds an object from its payload
pub trait Unpackable {
    fn deserialize(data: Bytes) -> StoreResult<Self>
    where
        Self: Sized;
}

/// Any stored object, tagged by its format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Object {
    Blob(Blob),
    Commit(Commit),
    Tag(Tag),
    Tree(Tree),
}

impl Object {
    /// Deserialize a payload of the given format
    pub fn deserialize(object_type: ObjectType, data: Bytes) -> StoreResult<Self> {
        Ok(match object_type {
            ObjectType::Blob => Object::Blob(Blob::deserialize(data)?),
            ObjectType::Commit => Object::Commit(Commit::deserialize(data)?),
            ObjectType::Tag => Object::Tag(Tag::deserialize(data)?),
            ObjectType::Tree => Object::Tree(Tree::deserialize(data)?),
        })
    }

    pub fn object_type(&self) -> ObjectType {
        match self {
            Object::Blob(_) => ObjectType::Blob,
            Object::Commit(_) => ObjectType::Commit,
            Object::Tag(_) => ObjectType::Tag,
            Object::Tree(_) => ObjectType::Tree,
        }
    }

    /// Header plus payload, the exact bytes that are hashed and compressed
    pub fn to_bytes(&self) -> Bytes {
        let payload = self.serialize();
        let header = self.object_type().header(payload.len());

        let mut out = BytesMut::with_capacity(header.len() + payload.len());
        out.extend_from_slice(&header);
        out.extend_from_slice(&payload);
        out.freeze()
    }

    // TODO: Cache the serialization and ID; trees and commits recompute both on every call
    pub fn object_id(&self) -> ObjectId {
        Self::hash(&self.to_bytes())
    }

    pub(crate) fn hash(content: &[u8]) -> ObjectId {
        let digest: [u8; RAW_OBJECT_ID_LENGTH] = Sha1::digest(content).into();
        ObjectId::from(digest)
    }
}

impl Packable for Object {
    fn serialize(&self) -> Bytes {
        match self {
            Object::Blob(blob) => blob.serialize(),
            Object::Commit(commit) => commit.serialize(),
            Object::Tag(tag) => tag.serialize(),
            Object::Tree(tree) => tree.serialize(),
        }
    }
}
