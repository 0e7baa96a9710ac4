use crate::areas::database::Database;
use crate::areas::repository::Repository;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use std::io::Write;
use std::path::Path;

/// Hash the file at `path` as an object of `object_type` and print its ID
///
/// The object is stored only when a repository is given, so hashing alone
/// works outside any repository.
pub fn hash_object(
    path: &Path,
    object_type: ObjectType,
    repository: Option<&Repository>,
    writer: &mut dyn Write,
) -> anyhow::Result<()> {
    let data = std::fs::read(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let oid = Database::hash_stream(
        Bytes::from(data),
        object_type,
        repository.map(Repository::database),
    )
    .with_context(|| format!("Failed to hash {} as {object_type}", path.display()))?;

    writeln!(writer, "{oid}")?;
    Ok(())
}
