use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::errors::{Error, IoResultExt};
use bytes::Bytes;
use std::path::Path;

impl Repository {
    /// Store the file at `object_path` as a blob and print its digest
    pub fn hash_object(&mut self, object_path: &str) -> anyhow::Result<()> {
        let path = self.path().join(object_path);
        if !path.is_file() {
            return Err(Error::PathNotFound(Path::new(object_path).to_path_buf()).into());
        }

        let data = std::fs::read(&path).at(&path)?;
        let object_id = self.database().store(&Blob::new(Bytes::from(data)))?;

        writeln!(self.writer(), "{object_id}")?;

        Ok(())
    }
}
