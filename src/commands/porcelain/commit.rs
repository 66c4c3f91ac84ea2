use crate::areas::repository::Repository;

impl Repository {
    pub fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        let head = self.refs().resolve_head()?;
        let is_root = match head.oid() {
            Some(_) => "",
            None => "(root-commit) ",
        };

        let message = message.trim().to_string();
        let (commit_id, commit) = self.write_commit(message)?;

        writeln!(
            self.writer(),
            "[{} {}{}] {}",
            head.describe(),
            is_root,
            commit_id.to_short_oid(),
            commit.short_message()
        )?;

        Ok(())
    }
}
