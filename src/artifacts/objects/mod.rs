//! Object types and codecs
//!
//! Every piece of content is stored as an object identified by a SHA-1 hash.
//! There are four types:
//!
//! - **Blob**: File content (raw bytes)
//! - **Tree**: Directory listing (modes, names, and object IDs)
//! - **Commit**: Snapshot metadata (tree, parents, author, message)
//! - **Tag**: Annotated reference to another object
//!
//! Commits and tags share the key-value-list-with-message codec in `kvlm`.
//! All objects are stored in the format `<type> <size>\0<content>`.

pub mod blob;
pub mod commit;
pub mod kvlm;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tag;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of a SHA-1 hash in raw bytes
pub const RAW_OBJECT_ID_LENGTH: usize = 20;
