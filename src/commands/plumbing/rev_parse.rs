use crate::areas::repository::Repository;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::revision::finder::ObjectFinder;
use anyhow::Context;
use std::io::Write;

impl Repository {
    /// Print the object ID `name` resolves to, peeled to `object_type` if given
    pub fn rev_parse(
        &self,
        name: &str,
        object_type: Option<ObjectType>,
        writer: &mut dyn Write,
    ) -> anyhow::Result<()> {
        let oid = ObjectFinder::new(self)
            .expecting(object_type)
            .find_required(name)
            .with_context(|| format!("Failed to resolve {name}"))?;

        writeln!(writer, "{oid}")?;
        Ok(())
    }
}
