use crate::areas::repository::Repository;
use crate::errors::Error;

impl Repository {
    /// Print every path recorded in HEAD's tree
    pub fn list_files(&mut self) -> anyhow::Result<()> {
        let head = self.refs().resolve_head()?;
        let head_oid = head
            .oid()
            .ok_or_else(|| Error::NoCommitsYet(head.describe()))?;

        let tree = self.database().load_commit_tree(head_oid)?;
        for path in tree.paths() {
            writeln!(self.writer(), "{path}")?;
        }

        Ok(())
    }
}
