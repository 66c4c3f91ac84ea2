use crate::areas::repository::Repository;
use crate::artifacts::objects::object::ObjectBox;
use crate::artifacts::objects::object_id::ObjectId;

impl Repository {
    /// Pretty-print any stored object
    pub fn cat_file(&mut self, object_id: &str) -> anyhow::Result<()> {
        let oid = ObjectId::try_parse(object_id)
            .ok_or_else(|| anyhow::anyhow!("not a valid object name: '{object_id}'"))?;

        let object = self.database().parse_object(&oid)?;

        match &object {
            // blob content is printed verbatim, including its own trailing newline
            ObjectBox::Blob(blob) => self.writer().write_all(blob.content())?,
            _ => writeln!(self.writer(), "{}", object.display())?,
        }

        Ok(())
    }
}
