//! Object identifier (SHA-1 digest)
//!
//! Object IDs are 40-character lowercase hexadecimal strings. In tree
//! payloads they are stored as their 20 raw bytes.
//!
//! ## Storage
//!
//! Objects are stored in `.trk/objects/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::objects::{OBJECT_ID_LENGTH, RAW_OBJECT_ID_LENGTH};
use crate::errors::Error;
use sha1::{Digest, Sha1};
use std::io;
use std::path::PathBuf;

/// Object identifier (SHA-1 digest in hex form)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from its hex form
    ///
    /// Uppercase digits are accepted and normalised to lowercase so that the
    /// sharded path on disk is always the same.
    pub fn try_parse(id: impl AsRef<str>) -> Option<Self> {
        let id = id.as_ref().trim();
        if id.len() != OBJECT_ID_LENGTH || !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        Some(Self(id.to_ascii_lowercase()))
    }

    /// Digest of an already encoded object (`<type> <len>\0<payload>`)
    pub fn hash(encoded: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(encoded);

        Self(format!("{:x}", hasher.finalize()))
    }

    /// Write the object ID in binary format (20 bytes)
    pub fn write_h40_to<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        let hex40 = self.0.as_bytes();

        for pair in hex40.chunks(2) {
            let pair = std::str::from_utf8(pair)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
            let byte = u8::from_str_radix(pair, 16)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
            writer.write_all(&[byte])?;
        }

        Ok(())
    }

    /// Read an object ID from binary format (20 bytes)
    ///
    /// Fails with `CorruptObject` when fewer than 20 bytes remain.
    pub fn read_h40_from<R: io::Read + ?Sized>(reader: &mut R) -> crate::Result<Self> {
        let mut raw = [0u8; RAW_OBJECT_ID_LENGTH];
        reader
            .read_exact(&mut raw)
            .map_err(|_| Error::CorruptObject("truncated object id".to_string()))?;

        Ok(Self::from_raw(&raw))
    }

    fn from_raw(raw: &[u8; RAW_OBJECT_ID_LENGTH]) -> Self {
        Self(raw.iter().map(|byte| format!("{byte:02x}")).collect())
    }

    /// Convert to file system path for object storage
    ///
    /// `abc123...` becomes `ab/c123...`
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }

    /// First 7 characters of the digest
    pub fn to_short_oid(&self) -> String {
        self.0.split_at(7).0.to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
