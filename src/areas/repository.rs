//! Repository location and layout
//!
//! A repository is a worktree with a `.git` metadata directory inside it.
//! Every path used by the object database and the references manager is
//! resolved under that metadata directory.

use crate::areas::config::Config;
use crate::areas::database::Database;
use crate::areas::refs::{HEAD_REF_NAME, Refs};
use crate::areas::workspace::prepare_empty_dir;
use crate::errors::{StoreError, StoreResult};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the metadata directory inside a worktree
pub const GIT_DIR: &str = ".git";

const DEFAULT_BRANCH: &str = "master";
const DEFAULT_DESCRIPTION: &str =
    "Unnamed repository; edit this file 'description' to name the repository.\n";

#[derive(Debug)]
pub struct Repository {
    path: Box<Path>,
    git_dir: Box<Path>,
    config: Config,
    database: Database,
    refs: Refs,
}

impl Repository {
    /// Open the repository whose worktree is `path`
    ///
    /// Fails unless `path/.git` is a directory holding a config with a
    /// supported format version.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let path = path.canonicalize()?;
        let git_dir = path.join(GIT_DIR);

        if !git_dir.is_dir() {
            return Err(StoreError::NotARepository(path));
        }

        let config = Config::load(&git_dir.join("config"))?;
        config.validate()?;

        Ok(Self::assemble(path, git_dir, config))
    }

    /// Create a fresh repository at `path`
    ///
    /// The target must not exist or must be an empty directory.
    pub fn create(path: &Path) -> StoreResult<Self> {
        prepare_empty_dir(path)?;
        let path = path.canonicalize()?;
        let git_dir = path.join(GIT_DIR);
        let repository = Self::assemble(path, git_dir, Config::default());

        for segments in [
            &["branches"][..],
            &["objects"][..],
            &["refs", "tags"][..],
            &["refs", "heads"][..],
        ] {
            repository.resolve_dir(segments, true)?;
        }

        if let Some(description) = repository.resolve_file(&["description"], true)? {
            std::fs::write(description, DEFAULT_DESCRIPTION)?;
        }
        repository
            .refs
            .update_ref_file(HEAD_REF_NAME, &format!("ref: refs/heads/{DEFAULT_BRANCH}"))?;
        if let Some(config) = repository.resolve_file(&["config"], true)? {
            repository.config.write(&config)?;
        }

        debug!(path = %repository.path.display(), "created repository");
        Ok(repository)
    }

    /// Find the repository containing `start`, walking up through parents
    ///
    /// Returns `None` at the filesystem root unless `required` is set, in
    /// which case `NotARepository` is returned instead.
    pub fn locate(start: &Path, required: bool) -> StoreResult<Option<Self>> {
        let start = start.canonicalize()?;
        let mut current = start.as_path();

        loop {
            if current.join(GIT_DIR).is_dir() {
                debug!(path = %current.display(), "located repository");
                return Self::open(current).map(Some);
            }

            match current.parent() {
                Some(parent) => current = parent,
                None if required => return Err(StoreError::NotARepository(start)),
                None => return Ok(None),
            }
        }
    }

    /// Join `segments` under the metadata directory
    pub fn resolve_path(&self, segments: &[&str]) -> PathBuf {
        segments
            .iter()
            .fold(self.git_dir.to_path_buf(), |path, segment| path.join(segment))
    }

    /// Like `resolve_path`, but the result must be a directory
    ///
    /// Returns `None` when it does not exist and `create` is unset.
    pub fn resolve_dir(&self, segments: &[&str], create: bool) -> StoreResult<Option<PathBuf>> {
        let path = self.resolve_path(segments);

        if path.exists() {
            return if path.is_dir() {
                Ok(Some(path))
            } else {
                Err(StoreError::PathConflict(path))
            };
        }

        if create {
            std::fs::create_dir_all(&path)?;
            Ok(Some(path))
        } else {
            Ok(None)
        }
    }

    /// Like `resolve_path`, but makes sure the parent directory exists
    pub fn resolve_file(&self, segments: &[&str], create: bool) -> StoreResult<Option<PathBuf>> {
        let Some((_, parents)) = segments.split_last() else {
            return Ok(None);
        };

        Ok(self
            .resolve_dir(parents, create)?
            .map(|_| self.resolve_path(segments)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    fn assemble(path: PathBuf, git_dir: PathBuf, config: Config) -> Self {
        Repository {
            database: Database::new(git_dir.join("objects").into_boxed_path()),
            refs: Refs::new(git_dir.clone().into_boxed_path()),
            path: path.into_boxed_path(),
            git_dir: git_dir.into_boxed_path(),
            config,
        }
    }
}
