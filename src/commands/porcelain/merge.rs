use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::head::Head;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::merge::resolver::{MergeOutcome, MergeResolver};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Error;

impl Repository {
    /// Merge `target` into the current branch; only the current branch's ref
    /// may move, and only by fast-forward
    pub fn merge(&mut self, target: &str) -> anyhow::Result<()> {
        let (branch, current_oid) = match self.refs().resolve_head()? {
            Head::Detached(oid) => {
                return Err(Error::InvalidRef(format!(
                    "HEAD is detached at {}; merge needs a branch to update",
                    oid.to_short_oid()
                ))
                .into());
            }
            Head::OnBranch { branch, oid: None } => {
                return Err(Error::NoCommitsYet(branch.to_string()).into());
            }
            Head::OnBranch {
                branch,
                oid: Some(oid),
            } => (branch, oid),
        };

        let target_branch = BranchName::try_parse(target)?;
        if !self.refs().branch_exists(&target_branch) {
            return Err(Error::BranchNotFound(target_branch.to_string()).into());
        }
        let target_oid = self
            .refs()
            .read_branch(&target_branch)?
            .ok_or_else(|| Error::NoCommitsYet(target_branch.to_string()))?;

        match MergeResolver::new(self.database()).resolve(&current_oid, &target_oid)? {
            MergeOutcome::AlreadyUpToDate => {
                writeln!(self.writer(), "Already up to date.")?;
            }
            MergeOutcome::FastForward => {
                self.fast_forward(&branch, &current_oid, &target_oid)?;
                writeln!(
                    self.writer(),
                    "Fast-forward: updating {} to {}",
                    branch, target_oid
                )?;
            }
            MergeOutcome::Conflict(paths) => {
                for path in &paths {
                    eprintln!("CONFLICT: {} changed in both branches", path);
                }
                anyhow::bail!(
                    "merge of '{}' into '{}' stopped: {} conflicting path(s)",
                    target_branch,
                    branch,
                    paths.len()
                );
            }
            MergeOutcome::Diverged => {
                writeln!(
                    self.writer(),
                    "Cannot fast-forward: {} has diverged. No direct file conflicts detected (manual merge needed).",
                    target_branch
                )?;
            }
        }

        Ok(())
    }

    fn fast_forward(
        &self,
        branch: &BranchName,
        current_oid: &ObjectId,
        target_oid: &ObjectId,
    ) -> anyhow::Result<()> {
        let current_tree = self.database().load_commit_tree(current_oid)?;
        let target_tree = self.database().load_commit_tree(target_oid)?;

        let mut index = self.index();
        index.rehydrate()?;

        let migration = Migration::new(self, Some(current_tree), target_tree);
        migration.clear_workspace()?;
        self.refs().update_branch(branch, target_oid)?;
        migration.populate_workspace(&mut index)?;
        index.write_updates()?;

        Ok(())
    }
}
