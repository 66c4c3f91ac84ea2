//! Blob object
//!
//! Blobs store file content. They carry no metadata: the path and mode of a
//! file live in the tree that references the blob.
//!
//! ## Format
//!
//! On disk: `blob <size>\0<content>`

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::IoResultExt;
use bytes::Bytes;
use derive_new::new;
use std::io::BufRead;
use std::path::Path;

/// Raw content of one file version
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    pub fn content(&self) -> &Bytes {
        &self.content
    }

    /// Content decoded as UTF-8, invalid sequences replaced
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}

impl Packable for Blob {
    fn serialize(&self) -> crate::Result<Bytes> {
        Ok(self.content.clone())
    }
}

impl Unpackable for Blob {
    fn deserialize(mut reader: impl BufRead) -> crate::Result<Self> {
        let mut content = Vec::new();
        reader
            .read_to_end(&mut content)
            .at(Path::new("<blob payload>"))?;

        Ok(Self::new(content.into()))
    }
}

impl Object for Blob {
    fn object_type(&self) -> ObjectType {
        ObjectType::Blob
    }

    fn display(&self) -> String {
        self.text()
    }
}
