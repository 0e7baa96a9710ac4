use crate::errors::{StoreError, StoreResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Blob,
    Commit,
    Tag,
    Tree,
}

impl ObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Blob => "blob",
            ObjectType::Commit => "commit",
            ObjectType::Tag => "tag",
            ObjectType::Tree => "tree",
        }
    }

    /// Build the `<type> <size>\0` object header
    pub fn header(&self, size: usize) -> Vec<u8> {
        format!("{} {}\0", self.as_str(), size).into_bytes()
    }
}

impl TryFrom<&[u8]> for ObjectType {
    type Error = StoreError;

    fn try_from(value: &[u8]) -> StoreResult<Self> {
        match value {
            b"blob" => Ok(ObjectType::Blob),
            b"commit" => Ok(ObjectType::Commit),
            b"tag" => Ok(ObjectType::Tag),
            b"tree" => Ok(ObjectType::Tree),
            _ => Err(StoreError::UnknownFormat(
                String::from_utf8_lossy(value).into_owned(),
            )),
        }
    }
}

impl TryFrom<&str> for ObjectType {
    type Error = StoreError;

    fn try_from(value: &str) -> StoreResult<Self> {
        ObjectType::try_from(value.as_bytes())
    }
}

impl std::str::FromStr for ObjectType {
    type Err = StoreError;

    fn from_str(s: &str) -> StoreResult<Self> {
        ObjectType::try_from(s)
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
