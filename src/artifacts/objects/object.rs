use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use bytes::Bytes;
use std::io::BufRead;

/// Produces the payload of an object (everything after the header).
pub trait Packable {
    fn serialize(&self) -> crate::Result<Bytes>;
}

/// Rebuilds an object from its payload; the header has already been consumed.
pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> crate::Result<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    fn display(&self) -> String;

    /// `<type> <len>\0<payload>`, the bytes the digest is computed over
    fn encode(&self) -> crate::Result<Bytes> {
        let payload = self.serialize()?;
        let header = self.object_type().header(payload.len());

        let mut encoded = Vec::with_capacity(header.len() + payload.len());
        encoded.extend_from_slice(header.as_bytes());
        encoded.extend_from_slice(&payload);

        Ok(Bytes::from(encoded))
    }

    fn object_id(&self) -> crate::Result<ObjectId> {
        Ok(ObjectId::hash(&self.encode()?))
    }
}

pub enum ObjectBox {
    Blob(Box<Blob>),
    Tree(Box<Tree>),
    Commit(Box<Commit>),
}

impl ObjectBox {
    pub fn object_type(&self) -> ObjectType {
        match self {
            ObjectBox::Blob(blob) => blob.object_type(),
            ObjectBox::Tree(tree) => tree.object_type(),
            ObjectBox::Commit(commit) => commit.object_type(),
        }
    }

    pub fn display(&self) -> String {
        match self {
            ObjectBox::Blob(blob) => blob.display(),
            ObjectBox::Tree(tree) => tree.display(),
            ObjectBox::Commit(commit) => commit.display(),
        }
    }
}
