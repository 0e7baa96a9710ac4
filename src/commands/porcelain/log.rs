use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::revision::finder::ObjectFinder;
use anyhow::Context;
use std::collections::HashSet;
use std::io::Write;

const GRAPH_NAME: &str = "trovelog";

impl Repository {
    /// Render the history reachable from `name` as a Graphviz digraph
    ///
    /// Each commit is visited once, even when merges make it reachable along
    /// several paths, and contributes one `c_<oid> -> c_<parent>;` edge per
    /// parent. A parent's own history is printed before the next parent's
    /// edge.
    pub fn log(&self, name: &str, writer: &mut dyn Write) -> anyhow::Result<()> {
        let start = ObjectFinder::new(self)
            .expecting(Some(ObjectType::Commit))
            .find_required(name)
            .with_context(|| format!("Failed to resolve commit {name}"))?;

        writeln!(writer, "digraph {GRAPH_NAME}{{")?;

        let mut seen = HashSet::from([start.clone()]);
        let parents = self.commit_parents(&start)?;
        let mut frames = vec![(start, parents.into_iter())];

        // depth first: each edge is printed right before its parent is entered
        while let Some((oid, parents)) = frames.last_mut() {
            let Some(parent) = parents.next() else {
                frames.pop();
                continue;
            };

            writeln!(writer, "  c_{oid} -> c_{parent};")?;
            if seen.insert(parent.clone()) {
                let grandparents = self.commit_parents(&parent)?;
                frames.push((parent, grandparents.into_iter()));
            }
        }

        writeln!(writer, "}}")?;
        Ok(())
    }

    fn commit_parents(&self, oid: &ObjectId) -> anyhow::Result<Vec<ObjectId>> {
        let Object::Commit(commit) = self.database().read(oid)? else {
            anyhow::bail!("{oid} is not a commit");
        };

        Ok(commit.parents()?)
    }
}
