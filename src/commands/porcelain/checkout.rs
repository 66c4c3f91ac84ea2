use crate::areas::repository::Repository;
use crate::artifacts::branch::head::Head;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::checkout::target::{CheckoutTarget, TargetRef};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;

const DETACHMENT_NOTICE: &str = r#"
You are in 'detached HEAD' state. You can look around, make experimental
changes and commit them, and you can discard any commits you make in this
state without impacting any branches by performing another checkout.

If you want to create a new branch to retain commits you create, you may
do so (now or later) by using the branch command. Example:

    trk branch <new-branch-name>
"#;

impl Repository {
    pub fn checkout(&mut self, target: &str) -> anyhow::Result<()> {
        let head = self.refs().resolve_head()?;
        // nothing on disk changes until the target is known to be a valid commit
        let target = CheckoutTarget::resolve(target, self.refs(), self.database())?;
        let current_tree = self.current_tree(&head)?;

        let mut index = self.index();
        index.rehydrate()?;

        let migration = Migration::new(self, current_tree, target.tree.clone());
        migration.clear_workspace()?;

        match &target.target_ref {
            TargetRef::Branch(branch) => self.refs().set_head_to_branch(branch)?,
            TargetRef::Detached => self.refs().detach_head(&target.oid)?,
        }

        migration.populate_workspace(&mut index)?;
        index.write_updates()?;
        drop(index);

        self.print_previous_head(&head, &target.oid)?;
        match &target.target_ref {
            TargetRef::Branch(branch) => {
                writeln!(self.writer(), "Switched to branch '{}'", branch)?;
            }
            TargetRef::Detached => {
                if !matches!(head, Head::Detached(_)) {
                    eprintln!(
                        "Note: checking out '{}'.\n{}",
                        target.oid, DETACHMENT_NOTICE
                    );
                }
                self.print_head_position(
                    "HEAD is now at",
                    &target.oid,
                    target.commit.short_message(),
                )?;
            }
        }

        Ok(())
    }

    /// Tree of the commit HEAD resolves to; None while the branch is unborn
    pub(crate) fn current_tree(&self, head: &Head) -> anyhow::Result<Option<Tree>> {
        match head.oid() {
            Some(oid) => Ok(Some(self.database().load_commit_tree(oid)?)),
            None => Ok(None),
        }
    }

    fn print_previous_head(&self, head: &Head, target_oid: &ObjectId) -> anyhow::Result<()> {
        if let Head::Detached(current_oid) = head
            && current_oid != target_oid
        {
            let commit = self.database().parse_object_as_commit(current_oid)?;
            let subject = commit.map(|c| c.short_message()).unwrap_or_default();
            self.print_head_position("Previous HEAD position was", current_oid, subject)?;
        }

        Ok(())
    }

    fn print_head_position(
        &self,
        message: &str,
        oid: &ObjectId,
        subject: String,
    ) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{} {} {}",
            message,
            oid.to_short_oid(),
            subject
        )?;

        Ok(())
    }
}
