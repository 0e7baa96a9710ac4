use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::revision::finder::ObjectFinder;
use anyhow::Context;
use std::io::Write;

impl Repository {
    /// List the entries of the tree reachable from `name`
    ///
    /// Each line reads `<mode> <type> <oid>\t<path>`, with the mode padded to
    /// six digits and the type read from the referenced object itself.
    pub fn ls_tree(&self, name: &str, writer: &mut dyn Write) -> anyhow::Result<()> {
        let oid = ObjectFinder::new(self)
            .expecting(Some(ObjectType::Tree))
            .find_required(name)
            .with_context(|| format!("Failed to resolve tree {name}"))?;

        let Object::Tree(tree) = self.database().read(&oid)? else {
            anyhow::bail!("{oid} is not a tree");
        };

        for entry in tree.entries() {
            let entry_type = self
                .database()
                .object_type(&entry.oid)
                .with_context(|| format!("Failed to read {}", entry.path_lossy()))?;

            writeln!(
                writer,
                "{} {} {}\t{}",
                entry.padded_mode(),
                entry_type,
                entry.oid,
                entry.path_lossy()
            )?;
        }

        Ok(())
    }
}
