//! Name resolution
//!
//! - `revision`: Parsing user-supplied names and computing candidate objects
//! - `finder`: Picking a single candidate and following tags and commits to
//!   reach an object of the requested type

pub mod finder;
pub mod revision;

pub const FULL_OID_REGEX: &str = r"^[0-9A-Fa-f]{40}$";
pub const SHORT_OID_REGEX: &str = r"^[0-9A-Fa-f]{4,39}$";
pub const REF_ALIASES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "@" => "HEAD",
};

/// Upper bound on tag/commit hops taken while looking for a requested type
pub const MAX_DEREF_HOPS: usize = 64;
