use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;

impl Repository {
    /// Snapshot the index into a commit on top of HEAD and move HEAD's target
    pub(crate) fn write_commit(&self, message: String) -> anyhow::Result<(ObjectId, Commit)> {
        let tree_id = self.store_index_tree()?;
        let parent = self.refs().resolve_head()?.oid().cloned();

        let author = self.config()?.author();
        let commit = Commit::new(parent, tree_id, author, message);
        let commit_id = self.database().store(&commit)?;

        self.refs().update_head(&commit_id)?;

        Ok((commit_id, commit))
    }
}
