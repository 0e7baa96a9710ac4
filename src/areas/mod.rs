//! Core repository components
//!
//! - `config`: `.git/config` parsing and validation
//! - `database`: Object database for storing blobs, trees, commits and tags
//! - `refs`: Reference management (branches, HEAD, tags)
//! - `repository`: Repository location, creation and path helpers
//! - `workspace`: Working directory file system operations

pub mod config;
pub mod database;
pub mod refs;
pub mod repository;
pub mod workspace;
