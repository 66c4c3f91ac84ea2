//! Index (staging area)
//!
//! The index tracks which file versions go into the next commit: one blob
//! digest per repository-relative path.
//!
//! ## Index File Format
//!
//! Plain text, one `<digest> <path>` line per entry, sorted by path. The file
//! is always rewritten in full; a missing file is an empty index.

use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, IoResultExt};
use std::collections::BTreeMap;
use std::path::Path;

/// Staging area
///
/// Tracks files staged for the next commit, keyed by slash-separated path.
#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.trk/index.txt`)
    path: Box<Path>,
    /// Tracked files mapped by path
    entries: BTreeMap<String, IndexEntry>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: BTreeMap::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entry_by_path(&self, path: &str) -> Option<&IndexEntry> {
        self.entries.get(path)
    }

    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.values()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.changed = false;
    }

    /// Load the index from disk, replacing whatever is held in memory
    pub fn rehydrate(&mut self) -> crate::Result<()> {
        self.clear();

        if !self.path.exists() {
            return Ok(());
        }

        let content = std::fs::read_to_string(&self.path).at(&self.path)?;
        for (number, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let entry = IndexEntry::parse_line(line).map_err(|reason| Error::CorruptIndex {
                line: number + 1,
                reason,
            })?;
            self.entries.insert(entry.path.clone(), entry);
        }

        Ok(())
    }

    /// Upsert the entry for `path`; staging an unchanged digest is a no-op
    pub fn add(&mut self, path: String, oid: ObjectId) {
        if self
            .entries
            .get(&path)
            .is_some_and(|entry| entry.oid == oid)
        {
            return;
        }

        self.entries
            .insert(path.clone(), IndexEntry::new(path, oid));
        self.changed = true;
    }

    /// Replace the whole index with `entries`
    pub fn replace_all(&mut self, entries: impl IntoIterator<Item = IndexEntry>) {
        let entries = entries
            .into_iter()
            .map(|entry| (entry.path.clone(), entry))
            .collect::<BTreeMap<_, _>>();

        if entries != self.entries {
            self.entries = entries;
            self.changed = true;
        }
    }

    /// Persist the index if anything changed since it was loaded
    pub fn write_updates(&mut self) -> crate::Result<()> {
        if !self.changed {
            return Ok(());
        }

        if let Some(entry) = self
            .entries
            .values()
            .find(|entry| !IndexEntry::is_storable_path(&entry.path))
        {
            return Err(Error::UnsupportedPath(entry.path.clone()));
        }

        let content = self
            .entries
            .values()
            .map(|entry| format!("{}\n", entry.to_line()))
            .collect::<String>();

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).at(parent)?;
        }
        std::fs::write(&self.path, content).at(&self.path)?;
        tracing::debug!(entries = self.entries.len(), "index written");

        self.changed = false;
        Ok(())
    }
}
