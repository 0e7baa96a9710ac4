use crate::areas::repository::Repository;
use crate::areas::workspace::{Workspace, entry_component, prepare_empty_dir};
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::revision::finder::ObjectFinder;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::debug;

impl Repository {
    /// Write the tree reachable from `name` into `target`
    ///
    /// `target` must be missing or an empty directory. Subtrees become
    /// directories and blobs become files; any other entry is skipped.
    pub fn checkout(&self, name: &str, target: &Path) -> anyhow::Result<()> {
        let tree_oid = ObjectFinder::new(self)
            .expecting(Some(ObjectType::Tree))
            .find_required(name)
            .with_context(|| format!("Failed to resolve tree {name}"))?;

        prepare_empty_dir(target)
            .with_context(|| format!("Cannot check out into {}", target.display()))?;
        let workspace = Workspace::new(target.into());

        let mut pending = vec![(tree_oid, PathBuf::new())];
        while let Some((oid, dir)) = pending.pop() {
            let Object::Tree(tree) = self.database().read(&oid)? else {
                anyhow::bail!("{oid} is not a tree");
            };

            for entry in tree.into_entries() {
                let name = entry.path_lossy();
                let path = dir.join(entry_component(&name)?);

                match self.database().read(&entry.oid)? {
                    Object::Tree(_) => {
                        workspace.create_dir(&path)?;
                        pending.push((entry.oid, path));
                    }
                    Object::Blob(blob) => workspace.write_file(&path, blob.data())?,
                    other => {
                        debug!(path = %path.display(), object_type = %other.object_type(), "skipping entry");
                    }
                }
            }
        }

        Ok(())
    }
}
