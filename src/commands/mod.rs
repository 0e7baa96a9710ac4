//! Command implementations
//!
//! Commands fall into two groups, as in git:
//!
//! - `plumbing`: Direct object and reference access (cat-file, hash-object,
//!   ls-tree, rev-parse, show-ref)
//! - `porcelain`: User-facing workflows (init, log, checkout)
//!
//! Every command writes its output to the writer it is handed, never to
//! stdout directly.

pub mod plumbing;
pub mod porcelain;
