//! Tree object
//!
//! A tree is the snapshot of every staged path at commit time. Trees are flat:
//! `a/b/c.txt` is stored as a single entry of the root tree rather than as
//! nested directory trees.
//!
//! ## Format
//!
//! On disk: `tree <size>\0<entries>`
//! Each entry: `<mode> <path>\0<20-byte-sha1>`, no separator between entries.
//!
//! Entries are kept in a sorted map, so the encoding order (and therefore the
//! digest) only depends on the set of entries, never on insertion history.

use crate::artifacts::database::database_entry::DatabaseEntry;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::REGULAR_FILE_MODE;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{Error, IoResultExt};
use bytes::Bytes;
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: BTreeMap<String, DatabaseEntry>,
}

impl Tree {
    /// Build a tree from index entries, every file as a regular `100644` entry
    pub fn build<'e>(entries: impl IntoIterator<Item = &'e IndexEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|entry| {
                (
                    entry.path.clone(),
                    DatabaseEntry::new(entry.oid.clone(), REGULAR_FILE_MODE.to_string()),
                )
            })
            .collect();

        Tree { entries }
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (String, DatabaseEntry)>) -> Self {
        Tree {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn get(&self, path: &str) -> Option<&DatabaseEntry> {
        self.entries.get(path)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &DatabaseEntry)> {
        self.entries.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn into_entries(self) -> impl Iterator<Item = (String, DatabaseEntry)> {
        self.entries.into_iter()
    }
}

impl Packable for Tree {
    fn serialize(&self) -> crate::Result<Bytes> {
        let mut content = Vec::new();

        for (path, entry) in &self.entries {
            content.extend_from_slice(format!("{} {}", entry.mode, path).as_bytes());
            content.push(0);
            entry
                .oid
                .write_h40_to(&mut content)
                .map_err(|e| Error::CorruptObject(format!("tree entry {path}: {e}")))?;
        }

        Ok(Bytes::from(content))
    }
}

impl Unpackable for Tree {
    fn deserialize(reader: impl BufRead) -> crate::Result<Self> {
        let mut entries = BTreeMap::new();
        let mut reader = reader;

        // Reuse scratch buffers to reduce allocs
        let mut mode_bytes = Vec::new();
        let mut path_bytes = Vec::new();

        loop {
            mode_bytes.clear();
            // Read "mode " (space-delimited)
            let n = reader
                .read_until(b' ', &mut mode_bytes)
                .at(Path::new("<tree payload>"))?;
            if n == 0 {
                break; // clean EOF: no more entries
            }
            if mode_bytes.pop() != Some(b' ') {
                return Err(Error::CorruptObject("truncated tree entry mode".to_string()));
            }
            let mode = std::str::from_utf8(&mode_bytes)
                .map_err(|_| Error::CorruptObject("tree entry mode is not UTF-8".to_string()))?
                .to_owned();

            // Read "path\0"
            path_bytes.clear();
            reader
                .read_until(b'\0', &mut path_bytes)
                .at(Path::new("<tree payload>"))?;
            if path_bytes.pop() != Some(b'\0') {
                return Err(Error::CorruptObject(format!(
                    "truncated tree entry after mode {mode}"
                )));
            }
            let path = std::str::from_utf8(&path_bytes)
                .map_err(|_| Error::CorruptObject("tree entry path is not UTF-8".to_string()))?
                .to_owned();

            let oid = ObjectId::read_h40_from(&mut reader).map_err(|_| {
                Error::CorruptObject(format!("truncated object id for tree entry {path}"))
            })?;

            if entries
                .insert(path.clone(), DatabaseEntry::new(oid, mode))
                .is_some()
            {
                return Err(Error::CorruptObject(format!(
                    "duplicate tree entry {path}"
                )));
            }
        }

        Ok(Tree { entries })
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }

    fn display(&self) -> String {
        self.entries
            .iter()
            .map(|(path, entry)| {
                let object_type = if entry.is_tree() {
                    ObjectType::Tree
                } else {
                    ObjectType::Blob
                };
                format!("{} {} {}\t{}", entry.mode, object_type, entry.oid, path)
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}
