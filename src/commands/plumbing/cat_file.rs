use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Packable;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::revision::finder::ObjectFinder;
use anyhow::Context;
use std::io::Write;

impl Repository {
    /// Write the payload of the `object_type` object named by `name`, byte for byte
    pub fn cat_file(
        &self,
        object_type: ObjectType,
        name: &str,
        writer: &mut dyn Write,
    ) -> anyhow::Result<()> {
        let oid = ObjectFinder::new(self)
            .expecting(Some(object_type))
            .find_required(name)
            .with_context(|| format!("Failed to resolve {object_type} {name}"))?;
        let object = self.database().read(&oid)?;

        writer.write_all(&object.serialize())?;
        Ok(())
    }
}
