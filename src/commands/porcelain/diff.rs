use crate::areas::repository::Repository;
use crate::artifacts::diff::file_diff::FileDiff;
use crate::artifacts::status::file_change::FileChange;
use crate::artifacts::status::status_info::Status;
use crate::errors::Error;

impl Repository {
    /// Unified diff of every modified path, staged blob against working file
    pub fn diff(&self) -> anyhow::Result<()> {
        let status = Status::new(self).initialize()?;

        let mut diffs = Vec::new();
        for (path, change) in status.changes() {
            match change {
                FileChange::Modified => diffs.push(self.diff_modified_file(path)?),
                FileChange::Deleted => diffs.push(FileDiff::deleted(path)),
                FileChange::Untracked | FileChange::Staged => {}
            }
        }

        let mut writer = self.writer();
        for diff in diffs.iter().filter(|diff| diff.has_changes()) {
            diff.render(&mut **writer)?;
        }

        Ok(())
    }

    fn diff_modified_file(&self, path: &str) -> anyhow::Result<FileDiff> {
        let staged_oid = self
            .index()
            .entry_by_path(path)
            .map(|entry| entry.oid.clone())
            .ok_or_else(|| Error::PathNotFound(path.into()))?;
        let staged = self
            .database()
            .parse_object_as_blob(&staged_oid)?
            .ok_or_else(|| Error::CorruptObject(format!("{staged_oid} at {path} is not a blob")))?;
        let working = self.workspace().read_file(path)?;

        Ok(FileDiff::modified(path, staged.content(), &working))
    }
}
