use crate::areas::refs::REFS_DIR;
use crate::areas::repository::Repository;
use anyhow::Context;
use std::io::Write;

impl Repository {
    /// Print `<oid> refs/<path>` for every reference, in name order
    pub fn show_ref(&self, writer: &mut dyn Write) -> anyhow::Result<()> {
        let tree = self.refs().list().context("Failed to list references")?;

        for (name, oid) in self.refs().flatten(REFS_DIR, &tree) {
            writeln!(writer, "{oid} {name}")?;
        }

        Ok(())
    }
}
