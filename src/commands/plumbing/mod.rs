//! Plumbing commands
//!
//! ## Commands
//!
//! - `cat-file`: Print the raw payload of an object
//! - `hash-object`: Compute an object ID and optionally store the object
//! - `ls-tree`: List the entries of a tree
//! - `rev-parse`: Resolve a name to an object ID
//! - `show-ref`: List every reference with the object it points at

pub mod cat_file;
pub mod hash_object;
pub mod ls_tree;
pub mod rev_parse;
pub mod show_ref;
