use crate::areas::workspace::Workspace;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

/// Computes the digest a workspace file would get, without touching the store
#[derive(new)]
pub struct Inspector<'w> {
    workspace: &'w Workspace,
}

impl<'w> Inspector<'w> {
    /// Digest of the file's current content, or None when it is gone
    pub fn workspace_digest(&self, path: &str) -> crate::Result<Option<ObjectId>> {
        if !self.workspace.exists(path) {
            return Ok(None);
        }

        let blob = Blob::new(self.workspace.read_file(path)?);
        Ok(Some(blob.object_id()?))
    }
}
