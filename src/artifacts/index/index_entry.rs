//! Index entry
//!
//! One staged file: its repository-relative path and the digest of the blob
//! holding its content. On disk each entry is a single `<digest> <path>` line;
//! the path is everything after the first space so it may itself contain
//! spaces.

use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct IndexEntry {
    /// Slash-separated path relative to the repository root
    pub path: String,
    /// Digest of the staged blob
    pub oid: ObjectId,
}

impl IndexEntry {
    /// Whether `path` survives the one-line-per-entry file format
    pub fn is_storable_path(path: &str) -> bool {
        !path.contains(['\n', '\r'])
    }

    pub fn parse_line(line: &str) -> Result<Self, String> {
        let (oid, path) = line
            .split_once(' ')
            .ok_or_else(|| format!("expected '<digest> <path>', got '{line}'"))?;
        let oid = ObjectId::try_parse(oid).ok_or_else(|| format!("invalid digest '{oid}'"))?;

        if path.is_empty() {
            return Err("empty path".to_string());
        }

        Ok(Self::new(path.to_string(), oid))
    }

    pub fn to_line(&self) -> String {
        format!("{} {}", self.oid, self.path)
    }
}
