//! Key-value list with message
//!
//! Commit and tag payloads share one text format: a header of `key value`
//! lines followed by a blank line and a free-form message.
//!
//! ```text
//! tree 29ff16c9c14e2652b22f8b78bb08a5a07930c147
//! parent 206941306e8a8af65b66eaaaea388a7ae24d49a0
//! gpgsig -----BEGIN PGP SIGNATURE-----
//!  iQIzBAABCAAdFiEExwXquOM8bWb4Q2zVGxM2FxoLkGQFAlsEjZQACgkQGxM2FxoL
//!  -----END PGP SIGNATURE-----
//!
//! Create first draft
//! ```
//!
//! A value continues onto following lines that start with a single space; the
//! space is dropped when parsing and reinserted when serializing. Keys keep
//! the order in which they were first seen, and a key that repeats collects
//! its values in a list.

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{StoreError, StoreResult};
use bytes::{Bytes, BytesMut};

/// Value stored under a KVLM key
///
/// A key only becomes `Many` once it is seen a second time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KvlmValue {
    Single(Bytes),
    Many(Vec<Bytes>),
}

impl KvlmValue {
    /// All values in order, whether the key repeated or not
    pub fn values(&self) -> &[Bytes] {
        match self {
            KvlmValue::Single(value) => std::slice::from_ref(value),
            KvlmValue::Many(values) => values,
        }
    }

    /// The first value stored under the key
    pub fn first(&self) -> Option<&Bytes> {
        self.values().first()
    }

    fn push(&mut self, value: Bytes) {
        match self {
            KvlmValue::Single(existing) => {
                *self = KvlmValue::Many(vec![existing.clone(), value]);
            }
            KvlmValue::Many(values) => values.push(value),
        }
    }
}

/// Ordered key-value list with a trailing message
///
/// The message is the entry under the reserved empty key; it is kept apart
/// from the headers so that header keys are never empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Kvlm {
    headers: Vec<(Bytes, KvlmValue)>,
    message: Bytes,
}

impl Kvlm {
    pub fn new(message: impl Into<Bytes>) -> Self {
        Kvlm {
            headers: Vec::new(),
            message: message.into(),
        }
    }

    /// Parse a raw payload
    ///
    /// Runs as a single forward scan, so neither the number of headers nor the
    /// size of the message grows the stack. Every header line needs a key and a
    /// space, and the headers must end with a blank line.
    pub fn parse(raw: &[u8]) -> StoreResult<Self> {
        let invalid = |offset: usize, reason: &str| StoreError::InvalidKvlm {
            offset,
            reason: reason.to_string(),
        };
        let mut kvlm = Kvlm::default();
        let mut start = 0;

        loop {
            let space = find_byte(raw, b' ', start);
            let newline = find_byte(raw, b'\n', start)
                .ok_or_else(|| invalid(start, "missing blank line before message"))?;

            match space {
                Some(space) if space < newline => {
                    if space == start {
                        return Err(invalid(start, "empty header key"));
                    }

                    let key = Bytes::copy_from_slice(&raw[start..space]);
                    let end = value_end(raw, space)
                        .ok_or_else(|| invalid(start, "missing blank line before message"))?;
                    kvlm.insert(key, fold_continuations(&raw[space + 1..end]));
                    start = end + 1;
                }
                _ if newline == start => {
                    kvlm.message = Bytes::copy_from_slice(&raw[newline + 1..]);
                    return Ok(kvlm);
                }
                _ => return Err(invalid(start, "header line without a value")),
            }
        }
    }

    /// Serialize back to the raw payload
    pub fn serialize(&self) -> Bytes {
        let mut out = BytesMut::new();

        for (key, value) in &self.headers {
            for value in value.values() {
                out.extend_from_slice(key);
                out.extend_from_slice(b" ");
                out.extend_from_slice(&expand_continuations(value));
                out.extend_from_slice(b"\n");
            }
        }

        out.extend_from_slice(b"\n");
        out.extend_from_slice(&self.message);
        out.freeze()
    }

    /// Store a value, turning the key into a list when it already exists
    pub fn insert(&mut self, key: impl Into<Bytes>, value: impl Into<Bytes>) {
        let key = key.into();
        let value = value.into();

        match self.headers.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, existing)) => existing.push(value),
            None => self.headers.push((key, KvlmValue::Single(value))),
        }
    }

    pub fn get(&self, key: &[u8]) -> Option<&KvlmValue> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.as_ref() == key)
            .map(|(_, value)| value)
    }

    /// Header keys in first-insertion order
    pub fn keys(&self) -> impl Iterator<Item = &Bytes> {
        self.headers.iter().map(|(key, _)| key)
    }

    /// Every value under `key` parsed as an object ID
    pub fn oids(&self, key: &[u8]) -> StoreResult<Vec<ObjectId>> {
        self.get(key)
            .map(KvlmValue::values)
            .unwrap_or_default()
            .iter()
            .map(|value| ObjectId::try_parse(String::from_utf8_lossy(value).trim().to_string()))
            .collect()
    }

    pub fn message(&self) -> &Bytes {
        &self.message
    }
}

fn find_byte(raw: &[u8], needle: u8, from: usize) -> Option<usize> {
    raw.get(from..)?
        .iter()
        .position(|&b| b == needle)
        .map(|pos| pos + from)
}

/// Offset of the first newline after `from` that is not followed by a space
fn value_end(raw: &[u8], from: usize) -> Option<usize> {
    let mut end = from;
    while let Some(newline) = find_byte(raw, b'\n', end + 1) {
        if raw.get(newline + 1) != Some(&b' ') {
            return Some(newline);
        }
        end = newline;
    }
    None
}

fn fold_continuations(value: &[u8]) -> Bytes {
    let mut out = BytesMut::with_capacity(value.len());
    let mut i = 0;
    while i < value.len() {
        out.extend_from_slice(&value[i..i + 1]);
        if value[i] == b'\n' && value.get(i + 1) == Some(&b' ') {
            i += 1;
        }
        i += 1;
    }
    out.freeze()
}

fn expand_continuations(value: &[u8]) -> Bytes {
    let mut out = BytesMut::with_capacity(value.len());
    for &b in value {
        out.extend_from_slice(&[b]);
        if b == b'\n' {
            out.extend_from_slice(b" ");
        }
    }
    out.freeze()
}
