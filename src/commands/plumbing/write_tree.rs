use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use crate::errors::Error;

impl Repository {
    pub fn write_tree(&mut self) -> anyhow::Result<()> {
        let tree_id = self.store_index_tree()?;

        writeln!(self.writer(), "{tree_id}")?;

        Ok(())
    }

    /// Store the index as a flat tree; an empty index cannot be written
    pub(crate) fn store_index_tree(&self) -> anyhow::Result<ObjectId> {
        let mut index = self.index();

        // Load the index file from the disk
        index.rehydrate()?;

        if index.is_empty() {
            return Err(Error::EmptyIndex.into());
        }

        let tree = Tree::build(index.entries());
        Ok(self.database().store(&tree)?)
    }
}
