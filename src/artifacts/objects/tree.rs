//! Tree object
//!
//! Trees list the contents of a directory snapshot: files (blobs) and
//! subdirectories (other trees), each with a mode and a name.
//!
//! ## Format
//!
//! On disk: `tree <size>\0<entries>`
//! Each entry: `<mode> <name>\0<20-byte-sha1>`
//!
//! Entries are kept in the order they were given or read. Nothing here sorts
//! them, so a tree written by this crate is only byte-identical to git's own
//! output when the caller already supplies git's path order.

use crate::artifacts::objects::RAW_OBJECT_ID_LENGTH;
use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{StoreError, StoreResult};
use bytes::{Bytes, BytesMut};
use derive_new::new;

const DIRECTORY_MODE: &[u8] = b"40000";

/// One `(mode, path, hash)` record of a tree
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TreeEntry {
    /// ASCII octal mode, 5 or 6 bytes (`40000`, `100644`, ...)
    pub mode: Bytes,
    /// Entry name, never containing NUL
    pub path: Bytes,
    pub oid: ObjectId,
}

impl TreeEntry {
    pub fn is_tree(&self) -> bool {
        self.mode.as_ref() == DIRECTORY_MODE
    }

    /// Mode left-padded with zeros to six digits, as `ls-tree` prints it
    pub fn padded_mode(&self) -> String {
        format!("{:0>6}", String::from_utf8_lossy(&self.mode))
    }

    pub fn path_lossy(&self) -> String {
        String::from_utf8_lossy(&self.path).into_owned()
    }

    /// Decode the entry starting at `offset`, returning it and the offset of
    /// the next one
    fn decode_at(raw: &[u8], offset: usize) -> StoreResult<(Self, usize)> {
        let malformed = |reason: &str| StoreError::MalformedTreeEntry {
            offset,
            reason: reason.to_string(),
        };

        let space = raw[offset..]
            .iter()
            .position(|&b| b == b' ')
            .map(|pos| offset + pos)
            .ok_or_else(|| malformed("missing space after mode"))?;
        let mode_len = space - offset;
        if mode_len != 5 && mode_len != 6 {
            return Err(malformed(&format!("mode is {mode_len} bytes long")));
        }
        if !raw[offset..space].iter().all(|b| (b'0'..=b'7').contains(b)) {
            return Err(malformed("mode is not an octal number"));
        }

        let nul = raw[space..]
            .iter()
            .position(|&b| b == 0)
            .map(|pos| space + pos)
            .ok_or_else(|| malformed("missing NUL after path"))?;

        let oid_end = nul + 1 + RAW_OBJECT_ID_LENGTH;
        let raw_oid = raw
            .get(nul + 1..oid_end)
            .ok_or_else(|| malformed("truncated object id"))?;

        let entry = TreeEntry::new(
            Bytes::copy_from_slice(&raw[offset..space]),
            Bytes::copy_from_slice(&raw[space + 1..nul]),
            ObjectId::from_raw(raw_oid)?,
        );

        Ok((entry, oid_end))
    }

    fn encode_into(&self, out: &mut BytesMut) {
        out.extend_from_slice(&self.mode);
        out.extend_from_slice(b" ");
        out.extend_from_slice(&self.path);
        out.extend_from_slice(&[0]);
        out.extend_from_slice(&self.oid.to_raw());
    }
}

/// Tree object: an ordered list of entries
#[derive(Debug, Clone, Default, PartialEq, Eq, new)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> impl Iterator<Item = TreeEntry> {
        self.entries.into_iter()
    }
}

impl Packable for Tree {
    fn serialize(&self) -> Bytes {
        let mut out = BytesMut::new();
        for entry in &self.entries {
            entry.encode_into(&mut out);
        }
        out.freeze()
    }
}

impl Unpackable for Tree {
    fn deserialize(data: Bytes) -> StoreResult<Self> {
        let mut entries = Vec::new();
        let mut offset = 0;

        while offset < data.len() {
            let (entry, next) = TreeEntry::decode_at(&data, offset)?;
            entries.push(entry);
            offset = next;
        }

        Ok(Tree { entries })
    }
}
