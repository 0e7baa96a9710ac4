use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{StoreError, StoreResult};
use bytes::Bytes;
use fake::rand;
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Loose object database rooted at `.git/objects`
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

// TODO: implement packfiles for better performance and storage efficiency
impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Read and deserialize the object stored under `object_id`
    pub fn read(&self, object_id: &ObjectId) -> StoreResult<Object> {
        let (object_type, payload) = self.read_payload(object_id)?;
        debug!(oid = %object_id, %object_type, size = payload.len(), "read object");

        Object::deserialize(object_type, payload)
    }

    /// Type recorded in the header of a stored object
    pub fn object_type(&self, object_id: &ObjectId) -> StoreResult<ObjectType> {
        let (object_type, _) = self.read_payload(object_id)?;
        Ok(object_type)
    }

    /// Hash an object and, when `persist` is set, write it to disk
    ///
    /// The returned ID is the same either way. Writing an object that already
    /// exists replaces the file with identical bytes.
    pub fn write(&self, object: &Object, persist: bool) -> StoreResult<ObjectId> {
        let content = object.to_bytes();
        let object_id = Object::hash(&content);

        if persist {
            let object_path = self.path.join(object_id.to_path());
            let object_dir = self.ensure_object_dir(&object_path)?;

            self.write_object(object_dir, object_path, content)?;
            debug!(oid = %object_id, object_type = %object.object_type(), "stored object");
        }

        Ok(object_id)
    }

    /// Write an object to disk unconditionally
    pub fn store(&self, object: &Object) -> StoreResult<ObjectId> {
        self.write(object, true)
    }

    /// Build an object of `object_type` from raw bytes and hash it
    ///
    /// The object is persisted only when a database is given.
    pub fn hash_stream(
        data: Bytes,
        object_type: ObjectType,
        database: Option<&Database>,
    ) -> StoreResult<ObjectId> {
        let object = Object::deserialize(object_type, data)?;

        match database {
            Some(database) => database.write(&object, true),
            None => Ok(object.object_id()),
        }
    }

    /// Find all objects whose ID starts with the given prefix.
    ///
    /// Only the `objects/<first two chars>` directory is scanned, so the prefix
    /// must be at least 2 characters long. A missing directory yields no
    /// matches. Results are sorted.
    pub fn find_objects_by_prefix(&self, prefix: &str) -> StoreResult<Vec<ObjectId>> {
        let prefix = prefix.to_ascii_lowercase();
        if prefix.len() < 2 {
            return Ok(Vec::new());
        }

        let (dir_name, file_prefix) = prefix.split_at(2);
        let dir_path = self.path.join(dir_name);
        if !dir_path.is_dir() {
            return Ok(Vec::new());
        }

        let mut matches = Vec::new();
        for entry in std::fs::read_dir(&dir_path)? {
            let file_name = entry?.file_name();
            let file_name = file_name.to_string_lossy();

            if file_name.starts_with(file_prefix) {
                // temp files and other strays are not object ids
                if let Ok(oid) = ObjectId::try_parse(format!("{dir_name}{file_name}")) {
                    matches.push(oid);
                }
            }
        }
        matches.sort();

        trace!(%prefix, count = matches.len(), "prefix scan");
        Ok(matches)
    }

    fn read_payload(&self, object_id: &ObjectId) -> StoreResult<(ObjectType, Bytes)> {
        let object_path = self.path.join(object_id.to_path());
        let raw = self.read_object(object_id, &object_path)?;

        let corrupt = |reason: &str| StoreError::CorruptObject {
            oid: object_id.to_string(),
            reason: reason.to_string(),
        };

        let space = raw
            .iter()
            .position(|&b| b == b' ')
            .ok_or_else(|| corrupt("missing type"))?;
        let nul = raw[space..]
            .iter()
            .position(|&b| b == 0)
            .map(|pos| space + pos)
            .ok_or_else(|| corrupt("missing header terminator"))?;

        let size = std::str::from_utf8(&raw[space + 1..nul])
            .ok()
            .and_then(|size| size.parse::<usize>().ok())
            .ok_or_else(|| corrupt("unreadable length"))?;
        let payload = raw.slice(nul + 1..);
        if size != payload.len() {
            return Err(corrupt(&format!(
                "bad length: header says {size}, payload has {}",
                payload.len()
            )));
        }

        let object_type = ObjectType::try_from(&raw[..space])?;
        Ok((object_type, payload))
    }

    fn read_object(&self, object_id: &ObjectId, object_path: &Path) -> StoreResult<Bytes> {
        let object_content = match std::fs::read(object_path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(StoreError::ObjectNotFound(object_id.clone()));
            }
            Err(err) => return Err(err.into()),
        };

        Self::decompress(&object_content)
    }

    fn ensure_object_dir(&self, object_path: &Path) -> StoreResult<PathBuf> {
        let object_dir = object_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.path.to_path_buf());

        if object_dir.exists() && !object_dir.is_dir() {
            return Err(StoreError::PathConflict(object_dir));
        }
        std::fs::create_dir_all(&object_dir)?;

        Ok(object_dir)
    }

    fn write_object(
        &self,
        object_dir: PathBuf,
        object_path: PathBuf,
        object_content: Bytes,
    ) -> StoreResult<()> {
        let temp_object_path = object_dir.join(Self::generate_temp_name());
        let object_content = Self::compress(&object_content)?;

        let persisted = Self::persist_temp(&temp_object_path, &object_path, &object_content);
        if persisted.is_err() {
            match std::fs::remove_file(&temp_object_path) {
                Err(err) if err.kind() != ErrorKind::NotFound => {
                    warn!(path = %temp_object_path.display(), %err, "failed to remove temp object");
                }
                _ => {}
            }
        }

        persisted
    }

    fn persist_temp(temp_path: &Path, object_path: &Path, content: &[u8]) -> StoreResult<()> {
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(temp_path)?;
        file.write_all(content)?;
        drop(file);

        // rename the temp file to the object file to make it atomic
        std::fs::rename(temp_path, object_path)?;

        Ok(())
    }

    fn compress(data: &[u8]) -> StoreResult<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(data)?;

        Ok(encoder.finish()?.into())
    }

    fn decompress(data: &[u8]) -> StoreResult<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(data);
        let mut decompressed_content = Vec::new();
        decoder.read_to_end(&mut decompressed_content)?;

        Ok(decompressed_content.into())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
