use crate::artifacts::objects::TREE_MODE;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

/// One tree record as read back from the database: what the path points to.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DatabaseEntry {
    pub oid: ObjectId,
    pub mode: String,
}

impl DatabaseEntry {
    pub fn is_tree(&self) -> bool {
        self.mode == TREE_MODE
    }
}
