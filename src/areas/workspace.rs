use crate::errors::{StoreError, StoreResult};
use std::path::{Component, Path};
use tracing::trace;

/// Working directory file system operations
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn write_file(&self, file_path: &Path, data: &[u8]) -> StoreResult<()> {
        let file_path = self.path.join(file_path);
        trace!(path = %file_path.display(), bytes = data.len(), "writing workspace file");

        std::fs::write(file_path, data)?;
        Ok(())
    }

    pub fn create_dir(&self, dir_path: &Path) -> StoreResult<()> {
        std::fs::create_dir(self.path.join(dir_path))?;
        Ok(())
    }
}

/// Turn a tree entry name into a single path component
///
/// Names holding a separator, `.`, `..` or a root would place the entry
/// outside the directory of the tree that lists it.
pub fn entry_component(name: &str) -> StoreResult<&Path> {
    let path = Path::new(name);
    let mut components = path.components();

    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !name.contains(['/', '\\']) => Ok(path),
        _ => Err(StoreError::UnsafeEntryName(name.to_string())),
    }
}

/// Make sure `path` is an empty directory, creating it when absent
///
/// Used for new repositories and checkout targets, neither of which may
/// clobber existing files.
pub fn prepare_empty_dir(path: &Path) -> StoreResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
        return Ok(());
    }

    if !path.is_dir() {
        return Err(StoreError::PathConflict(path.to_path_buf()));
    }

    if std::fs::read_dir(path)?.next().is_some() {
        return Err(StoreError::NotEmptyTarget(path.to_path_buf()));
    }

    Ok(())
}
