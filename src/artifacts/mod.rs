//! Object model and name resolution
//!
//! - `objects`: Object formats (blob, commit, tag, tree) and their codecs
//! - `revision`: Turning user-supplied names into object IDs

pub mod objects;
pub mod revision;
