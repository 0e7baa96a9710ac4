use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::revision::MAX_DEREF_HOPS;
use crate::artifacts::revision::revision::Revision;
use crate::errors::{StoreError, StoreResult};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Resolves a name to exactly one object, optionally of a given type
///
/// With an expected type and `follow` set, annotated tags are peeled to their
/// target and commits are replaced by their tree when a tree is wanted.
#[derive(Debug)]
pub struct ObjectFinder<'r> {
    repository: &'r Repository,
    expected: Option<ObjectType>,
    follow: bool,
}

impl<'r> ObjectFinder<'r> {
    pub fn new(repository: &'r Repository) -> Self {
        ObjectFinder {
            repository,
            expected: None,
            follow: true,
        }
    }

    pub fn expecting(mut self, expected: Option<ObjectType>) -> Self {
        self.expected = expected;
        self
    }

    pub fn follow(mut self, follow: bool) -> Self {
        self.follow = follow;
        self
    }

    /// Resolve `name`
    ///
    /// Returns `None` when the name resolves but no object of the expected
    /// type is reachable from it.
    pub fn find(&self, name: &str) -> StoreResult<Option<ObjectId>> {
        let revision = Revision::parse(name);
        let mut candidates = revision.candidates(self.repository)?;

        let candidate = match candidates.len() {
            0 => return Err(StoreError::UnresolvedReference(name.to_string())),
            1 => candidates.remove(0),
            _ => {
                return Err(StoreError::AmbiguousReference {
                    name: name.to_string(),
                    candidates,
                });
            }
        };

        match self.expected {
            None => Ok(Some(candidate)),
            Some(expected) => self.dereference(name, candidate, expected),
        }
    }

    /// Like `find`, but a missing match of the expected type is an error
    pub fn find_required(&self, name: &str) -> StoreResult<ObjectId> {
        match self.find(name)? {
            Some(oid) => Ok(oid),
            None => {
                let oid = self.find_untyped(name)?;
                let actual = self.repository.database().object_type(&oid)?;
                Err(StoreError::FormatMismatch {
                    oid,
                    expected: self.expected.unwrap_or(actual),
                    actual,
                })
            }
        }
    }

    fn find_untyped(&self, name: &str) -> StoreResult<ObjectId> {
        ObjectFinder::new(self.repository)
            .find(name)?
            .ok_or_else(|| StoreError::UnresolvedReference(name.to_string()))
    }

    fn dereference(
        &self,
        name: &str,
        start: ObjectId,
        expected: ObjectType,
    ) -> StoreResult<Option<ObjectId>> {
        let mut visited = HashSet::new();
        let mut current = start;

        loop {
            if visited.len() >= MAX_DEREF_HOPS || !visited.insert(current.clone()) {
                return Err(StoreError::DereferenceLoop {
                    name: name.to_string(),
                    expected,
                    oid: current,
                });
            }

            let object = self.repository.database().read(&current)?;
            if object.object_type() == expected {
                debug!(%name, oid = %current, hops = visited.len() - 1, "found object");
                return Ok(Some(current));
            }
            if !self.follow {
                return Ok(None);
            }

            current = match object {
                Object::Tag(tag) => tag.target_oid()?,
                Object::Commit(commit) if expected == ObjectType::Tree => commit.tree_oid()?,
                _ => return Ok(None),
            };
            trace!(%name, next = %current, "following");
        }
    }
}
