use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::tree::Tree;
use crate::artifacts::status::inspector::Inspector;
use crate::errors::Error;

/// Plan for switching the working tree from one commit's tree to another's
pub struct Migration<'r> {
    repository: &'r Repository,
    /// Tree of the commit currently checked out, if any
    current: Option<Tree>,
    target: Tree,
}

impl<'r> Migration<'r> {
    pub fn new(repository: &'r Repository, current: Option<Tree>, target: Tree) -> Self {
        Migration {
            repository,
            current,
            target,
        }
    }

    /// Delete every file of the current tree, pruning emptied directories
    pub fn clear_workspace(&self) -> crate::Result<usize> {
        let Some(current) = &self.current else {
            return Ok(0);
        };

        let workspace = self.repository.workspace();
        let inspector = Inspector::new(workspace);
        let mut removed = 0;

        for (path, entry) in current.entries() {
            match inspector.workspace_digest(path)? {
                None => continue,
                Some(oid) if oid != entry.oid => {
                    tracing::warn!(%path, "discarding uncommitted changes");
                }
                Some(_) => {}
            }

            workspace.remove_file(path)?;
            removed += 1;
        }

        tracing::info!(removed, "cleared current tree from workspace");
        Ok(removed)
    }

    /// Write every blob of the target tree and reset the index to it
    pub fn populate_workspace(&self, index: &mut Index) -> crate::Result<usize> {
        let workspace = self.repository.workspace();
        let database = self.repository.database();

        for (path, entry) in self.target.entries() {
            let blob = database.parse_object_as_blob(&entry.oid)?.ok_or_else(|| {
                Error::CorruptObject(format!("{} at {path} is not a blob", entry.oid))
            })?;
            workspace.write_file(path, blob.content())?;
        }

        index.replace_all(
            self.target
                .entries()
                .map(|(path, entry)| IndexEntry::new(path.clone(), entry.oid.clone())),
        );

        let written = self.target.entries().count();
        tracing::info!(written, "wrote target tree to workspace");
        Ok(written)
    }
}
