use crate::areas::refs::HEAD_REF_NAME;
use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::revision::{FULL_OID_REGEX, REF_ALIASES, SHORT_OID_REGEX};
use crate::errors::StoreResult;
use tracing::trace;

/// A user-supplied object name, classified by how it is looked up
///
/// Supports:
/// - `HEAD` (and its alias `@`), resolved through the references
/// - Full OIDs: 40 hexadecimal characters
/// - Abbreviated OIDs: 4-39 hexadecimal characters, matched against the
///   objects on disk
///
/// Branch and tag names are not looked up by their short name; anything
/// else yields no candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    Head,
    FullOid(ObjectId),
    ShortOid(String),
    Unsupported(String),
    Blank,
}

impl Revision {
    pub fn parse(name: &str) -> Revision {
        let name = name.trim();
        let name = *REF_ALIASES.get(name).unwrap_or(&name);

        if name.is_empty() {
            Revision::Blank
        } else if name == HEAD_REF_NAME {
            Revision::Head
        } else if Self::matches(FULL_OID_REGEX, name) {
            ObjectId::try_parse(name.to_string())
                .map(Revision::FullOid)
                .unwrap_or_else(|_| Revision::Unsupported(name.to_string()))
        } else if Self::matches(SHORT_OID_REGEX, name) {
            Revision::ShortOid(name.to_ascii_lowercase())
        } else {
            Revision::Unsupported(name.to_string())
        }
    }

    /// Every object this name could refer to, sorted
    pub fn candidates(&self, repository: &Repository) -> StoreResult<Vec<ObjectId>> {
        let candidates = match self {
            Revision::Head => vec![repository.refs().resolve(HEAD_REF_NAME)?],
            Revision::FullOid(oid) => vec![oid.clone()],
            Revision::ShortOid(prefix) => repository.database().find_objects_by_prefix(prefix)?,
            Revision::Unsupported(_) | Revision::Blank => Vec::new(),
        };

        trace!(revision = ?self, count = candidates.len(), "resolved candidates");
        Ok(candidates)
    }

    fn matches(pattern: &str, name: &str) -> bool {
        regex::Regex::new(pattern).is_ok_and(|regex| regex.is_match(name))
    }
}

impl std::fmt::Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Revision::Head => write!(f, "{HEAD_REF_NAME}"),
            Revision::FullOid(oid) => write!(f, "{oid}"),
            Revision::ShortOid(name) | Revision::Unsupported(name) => write!(f, "{name}"),
            Revision::Blank => Ok(()),
        }
    }
}
