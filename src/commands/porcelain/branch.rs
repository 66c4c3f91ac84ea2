use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::Error;
use colored::Colorize;

impl Repository {
    /// Create a branch at the commit HEAD resolves to, detached or not
    pub fn branch(&mut self, branch_name: &str) -> anyhow::Result<()> {
        let branch_name = BranchName::try_parse(branch_name)?;

        let head = self.refs().resolve_head()?;
        let source_oid = head
            .oid()
            .cloned()
            .ok_or_else(|| Error::NoCommitsYet(head.describe()))?;

        self.refs().create_branch(&branch_name, &source_oid)?;

        writeln!(
            self.writer(),
            "Created branch '{}' at {}",
            branch_name, source_oid
        )?;

        Ok(())
    }

    pub fn list_branches(&self) -> anyhow::Result<()> {
        let head = self.refs().resolve_head()?;
        let current = head.branch();

        for branch in self.refs().list_branches()? {
            if Some(&branch) == current {
                writeln!(self.writer(), "* {}", branch.as_ref().green())?;
            } else {
                writeln!(self.writer(), "  {}", branch)?;
            }
        }

        Ok(())
    }
}
