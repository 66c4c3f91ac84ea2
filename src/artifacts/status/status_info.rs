use crate::areas::repository::Repository;
use crate::artifacts::ignore::IgnoreRules;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::FileChange;
use crate::artifacts::status::inspector::Inspector;
use derive_new::new;
use std::collections::BTreeMap;

/// Every indexed path lands in exactly one of Staged/Modified/Deleted;
/// a scanned path is Untracked iff it is neither indexed nor ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusInfo {
    changes: BTreeMap<String, FileChange>,
}

impl StatusInfo {
    pub fn partition<'e>(
        entries: impl IntoIterator<Item = &'e IndexEntry>,
        scanned: &[String],
        ignore: &IgnoreRules,
        mut digest_of: impl FnMut(&str) -> crate::Result<Option<ObjectId>>,
    ) -> crate::Result<Self> {
        let mut changes = BTreeMap::new();

        for entry in entries {
            let change = match digest_of(&entry.path)? {
                None => FileChange::Deleted,
                Some(oid) if oid == entry.oid => FileChange::Staged,
                Some(_) => FileChange::Modified,
            };
            changes.insert(entry.path.clone(), change);
        }

        for path in scanned {
            if !changes.contains_key(path) && !ignore.is_ignored(path) {
                changes.insert(path.clone(), FileChange::Untracked);
            }
        }

        Ok(StatusInfo { changes })
    }

    /// Paths in one category, sorted
    pub fn paths(&self, change: FileChange) -> impl Iterator<Item = &String> {
        self.changes
            .iter()
            .filter(move |(_, c)| **c == change)
            .map(|(path, _)| path)
    }

    /// All paths with their category, sorted by path
    pub fn changes(&self) -> impl Iterator<Item = (&String, FileChange)> {
        self.changes.iter().map(|(path, change)| (path, *change))
    }

    pub fn change_of(&self, path: &str) -> Option<FileChange> {
        self.changes.get(path).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    /// Load the index and ignore rules, scan the workspace and partition
    pub fn initialize(&self) -> crate::Result<StatusInfo> {
        let mut index = self.repository.index();
        index.rehydrate()?;

        let ignore = self.repository.ignore_rules()?;
        let scanned = self.repository.workspace().list_files()?;
        let inspector = Inspector::new(self.repository.workspace());

        StatusInfo::partition(index.entries(), &scanned, &ignore, |path| {
            inspector.workspace_digest(path)
        })
    }
}
