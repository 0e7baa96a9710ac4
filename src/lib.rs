//! A minimal git-compatible object store
//!
//! - `areas`: On-disk locations (repository layout, object database, refs, config)
//! - `artifacts`: Object formats and name resolution
//! - `commands`: The operations behind the `trove` binary
//! - `errors`: The `StoreError` type shared by the core

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
