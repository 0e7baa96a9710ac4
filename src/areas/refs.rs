//! References (branches, HEAD, tags)
//!
//! References are human-readable names pointing at objects. They are either:
//! - Direct: containing a 40-character object ID
//! - Symbolic: `ref: <name>`, pointing at another reference
//!
//! ## Layout
//!
//! - `HEAD`: the current branch, usually symbolic
//! - `refs/heads/*`: branch tips
//! - `refs/tags/*`: tags

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{StoreError, StoreResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::WalkDir;

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

/// Name of the directory holding every non-HEAD reference
pub const REFS_DIR: &str = "refs";

/// Symbolic references followed before giving up, matching git's own limit
pub const MAX_SYMREF_DEPTH: usize = 5;

/// Parsed content of a reference file
#[derive(Debug, Clone, PartialEq, Eq)]
enum SymRefOrOid {
    /// Symbolic reference pointing to another ref
    SymRef(String),
    /// Direct object ID
    Oid(ObjectId),
}

impl SymRefOrOid {
    fn read_symref_or_oid(path: &Path) -> StoreResult<Option<SymRefOrOid>> {
        if !path.is_file() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        let symref_regex =
            regex::Regex::new(SYMREF_REGEX).map_err(std::io::Error::other)?;
        match symref_regex.captures(content) {
            Some(symref_match) => Ok(Some(SymRefOrOid::SymRef(
                symref_match[1].trim().to_string(),
            ))),
            None => Ok(Some(SymRefOrOid::Oid(ObjectId::try_parse(
                content.to_string(),
            )?))),
        }
    }
}

/// A listed ref directory: names in sorted order mapped to hashes or to
/// nested directories
pub type RefTree = BTreeMap<String, RefNode>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefNode {
    Oid(ObjectId),
    Dir(RefTree),
}

/// References manager rooted at the metadata directory
#[derive(Debug)]
pub struct Refs {
    path: Box<Path>,
}

impl Refs {
    pub fn new(path: Box<Path>) -> Self {
        Refs { path }
    }

    /// Resolve a reference name (`HEAD`, `refs/heads/master`, ...) to the
    /// object it ultimately points at
    ///
    /// Follows symbolic references up to `MAX_SYMREF_DEPTH` hops.
    pub fn resolve(&self, name: &str) -> StoreResult<ObjectId> {
        let mut current = name.to_string();

        for _ in 0..=MAX_SYMREF_DEPTH {
            match SymRefOrOid::read_symref_or_oid(&self.path.join(&current))? {
                Some(SymRefOrOid::SymRef(target)) => {
                    trace!(from = %current, to = %target, "following symbolic ref");
                    current = target;
                }
                Some(SymRefOrOid::Oid(oid)) => return Ok(oid),
                None => return Err(StoreError::UnresolvedReference(current)),
            }
        }

        Err(StoreError::SymrefLoop(name.to_string()))
    }

    /// List every reference under `refs/`
    pub fn list(&self) -> StoreResult<RefTree> {
        self.list_dir(&self.refs_path())
    }

    /// List the references in `dir`, recursing into subdirectories
    pub fn list_dir(&self, dir: &Path) -> StoreResult<RefTree> {
        let mut tree = RefTree::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(std::io::Error::from)?;
            let name = entry.file_name().to_string_lossy().into_owned();

            if entry.file_type().is_dir() {
                tree.insert(name, RefNode::Dir(self.list_dir(entry.path())?));
            } else {
                let ref_name = self.ref_name(entry.path());
                tree.insert(name, RefNode::Oid(self.resolve(&ref_name)?));
            }
        }

        Ok(tree)
    }

    /// Flatten a listing into `(full ref name, oid)` pairs in sorted order
    pub fn flatten(&self, prefix: &str, tree: &RefTree) -> Vec<(String, ObjectId)> {
        tree.iter()
            .flat_map(|(name, node)| {
                let full_name = format!("{prefix}/{name}");
                match node {
                    RefNode::Oid(oid) => vec![(full_name, oid.clone())],
                    RefNode::Dir(subtree) => self.flatten(&full_name, subtree),
                }
            })
            .collect()
    }

    /// Write raw content (`<oid>` or `ref: <name>`) to a reference file,
    /// creating parent directories as needed
    pub fn update_ref_file(&self, name: &str, raw_ref: &str) -> StoreResult<()> {
        let path = self.path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, format!("{raw_ref}\n"))?;
        Ok(())
    }

    pub fn refs_path(&self) -> PathBuf {
        self.path.join(REFS_DIR)
    }

    pub fn heads_path(&self) -> PathBuf {
        self.refs_path().join("heads")
    }

    pub fn tags_path(&self) -> PathBuf {
        self.refs_path().join("tags")
    }

    fn ref_name(&self, path: &Path) -> String {
        path.strip_prefix(&self.path)
            .unwrap_or(path)
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}
