//! Object database
//!
//! Content-addressed, write-once storage for blobs, trees and commits.
//! Each object is zlib-compressed and sharded by the first two hex characters
//! of its digest: `objects/ab/cdef...`.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, ObjectBox, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::errors::{Error, IoResultExt};
use bytes::Bytes;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).is_file()
    }

    /// Store a typed object and return its digest
    pub fn store(&self, object: &impl Object) -> crate::Result<ObjectId> {
        self.put(object.object_type(), &object.serialize()?)
    }

    /// Encode `payload` under `object_type`, write it unless already present
    /// and return its digest.
    pub fn put(&self, object_type: ObjectType, payload: &[u8]) -> crate::Result<ObjectId> {
        let header = object_type.header(payload.len());
        let mut encoded = Vec::with_capacity(header.len() + payload.len());
        encoded.extend_from_slice(header.as_bytes());
        encoded.extend_from_slice(payload);

        let object_id = ObjectId::hash(&encoded);
        let object_path = self.path.join(object_id.to_path());

        // objects are immutable: an existing file already holds these bytes
        if object_path.exists() {
            tracing::debug!(oid = %object_id, "object already stored");
            return Ok(object_id);
        }

        self.write_object(&object_path, &encoded)?;
        tracing::debug!(oid = %object_id, kind = %object_type, size = payload.len(), "stored object");

        Ok(object_id)
    }

    /// Read an object back as its type and raw payload
    pub fn get(&self, object_id: &ObjectId) -> crate::Result<(ObjectType, Bytes)> {
        let object_path = self.path.join(object_id.to_path());
        if !object_path.is_file() {
            return Err(Error::ObjectNotFound(object_id.clone()));
        }

        let compressed = std::fs::read(&object_path).at(&object_path)?;
        let encoded = Self::decompress(&compressed)
            .map_err(|reason| Error::CorruptObject(format!("{object_id}: {reason}")))?;

        let (object_type, payload) = ObjectType::split_encoded(&encoded).map_err(|e| match e {
            Error::CorruptObject(reason) => Error::CorruptObject(format!("{object_id}: {reason}")),
            other => other,
        })?;

        Ok((object_type, Bytes::copy_from_slice(payload)))
    }

    pub fn parse_object(&self, object_id: &ObjectId) -> crate::Result<ObjectBox> {
        let (object_type, payload) = self.get(object_id)?;

        match object_type {
            ObjectType::Blob => Ok(ObjectBox::Blob(Box::new(Blob::deserialize(payload.as_ref())?))),
            ObjectType::Tree => Ok(ObjectBox::Tree(Box::new(Tree::deserialize(payload.as_ref())?))),
            ObjectType::Commit => Ok(ObjectBox::Commit(Box::new(Commit::deserialize(
                payload.as_ref(),
            )?))),
        }
    }

    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> crate::Result<Option<Blob>> {
        let (object_type, payload) = self.get(object_id)?;

        match object_type {
            ObjectType::Blob => Ok(Some(Blob::deserialize(payload.as_ref())?)),
            _ => Ok(None),
        }
    }

    pub fn parse_object_as_tree(&self, object_id: &ObjectId) -> crate::Result<Option<Tree>> {
        let (object_type, payload) = self.get(object_id)?;

        match object_type {
            ObjectType::Tree => Ok(Some(Tree::deserialize(payload.as_ref())?)),
            _ => Ok(None),
        }
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> crate::Result<Option<Commit>> {
        let (object_type, payload) = self.get(object_id)?;

        match object_type {
            ObjectType::Commit => Ok(Some(Commit::deserialize(payload.as_ref())?)),
            _ => Ok(None),
        }
    }

    /// Load the tree a commit points at
    pub fn load_commit_tree(&self, commit_oid: &ObjectId) -> crate::Result<Tree> {
        let commit = self
            .parse_object_as_commit(commit_oid)?
            .ok_or_else(|| Error::InvalidCommit {
                oid: commit_oid.clone(),
                reason: "object is not a commit".to_string(),
            })?;

        self.parse_object_as_tree(commit.tree_oid())?
            .ok_or_else(|| Error::InvalidCommit {
                oid: commit_oid.clone(),
                reason: format!("{} is not a tree", commit.tree_oid()),
            })
    }

    fn write_object(&self, object_path: &Path, encoded: &[u8]) -> crate::Result<()> {
        let object_dir = object_path
            .parent()
            .ok_or_else(|| Error::CorruptObject(format!("invalid object path {}", object_path.display())))?;
        std::fs::create_dir_all(object_dir).at(object_dir)?;

        let compressed = Self::compress(encoded).at(object_path)?;

        // write to a temp file first, then rename it into place
        let temp_object_path = Self::temp_path(object_dir);
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)
            .at(&temp_object_path)?;
        file.write_all(&compressed).at(&temp_object_path)?;

        std::fs::rename(&temp_object_path, object_path).at(object_path)?;

        Ok(())
    }

    fn compress(data: &[u8]) -> std::io::Result<Vec<u8>> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(data)?;
        encoder.finish()
    }

    fn decompress(data: &[u8]) -> Result<Vec<u8>, String> {
        let mut decoder = flate2::read::ZlibDecoder::new(data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .map_err(|e| format!("unable to decompress object content: {e}"))?;

        Ok(decompressed_content)
    }

    fn temp_path(object_dir: &Path) -> PathBuf {
        object_dir.join(format!("tmp-obj-{}", std::process::id()))
    }
}
