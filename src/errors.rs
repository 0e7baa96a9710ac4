//! Error types for the object store
//!
//! Every core operation surfaces the first failure it hits as a `StoreError`.
//! Nothing here is retried or recovered; the command layer decides how to
//! present it.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for repository, object and reference operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// a path that must be a directory exists as something else
    #[error("not a directory: {0}")]
    PathConflict(PathBuf),

    /// a repository or checkout target exists and has entries
    #[error("not empty: {0}")]
    NotEmptyTarget(PathBuf),

    /// no `.git` directory was found walking upward
    #[error("no git directory found in {0} hierarchy")]
    NotARepository(PathBuf),

    #[error("configuration file missing: {0}")]
    MissingConfiguration(PathBuf),

    #[error("unsupported repositoryformatversion {0}")]
    UnsupportedRepositoryVersion(String),

    /// the stored size header disagrees with the payload
    #[error("malformed object {oid}: {reason}")]
    CorruptObject { oid: String, reason: String },

    #[error("unknown object type {0}")]
    UnknownFormat(String),

    #[error("malformed tree entry at offset {offset}: {reason}")]
    MalformedTreeEntry { offset: usize, reason: String },

    /// a commit or tag payload does not follow the header/message layout
    #[error("malformed key-value list at offset {offset}: {reason}")]
    InvalidKvlm { offset: usize, reason: String },

    /// a tree entry name that would leave its directory when checked out
    #[error("refusing to write tree entry {0:?}")]
    UnsafeEntryName(String),

    /// a commit or tag lacks a key its accessor needs
    #[error("malformed {format} object: missing {key}")]
    MalformedKvlm { format: String, key: String },

    #[error("invalid object id: {0}")]
    InvalidObjectId(String),

    #[error("object {0} not found")]
    ObjectNotFound(ObjectId),

    #[error("no such reference {0}")]
    UnresolvedReference(String),

    /// name resolution matched more than one object
    #[error("ambiguous reference {name}: candidates are:\n - {}", .candidates.iter().map(ObjectId::as_str).collect::<Vec<_>>().join("\n - "))]
    AmbiguousReference {
        name: String,
        candidates: Vec<ObjectId>,
    },

    #[error("object {oid} is a {actual}, not a {expected}")]
    FormatMismatch {
        oid: ObjectId,
        expected: ObjectType,
        actual: ObjectType,
    },

    #[error("symbolic reference {0} nests too deeply")]
    SymrefLoop(String),

    #[error("dereferencing {name} did not reach a {expected} (stopped at {oid})")]
    DereferenceLoop {
        name: String,
        expected: ObjectType,
        oid: ObjectId,
    },

    #[error("config error: {0}")]
    Config(#[from] ini::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
