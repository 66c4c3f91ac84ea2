use crate::areas::repository::Repository;
use crate::artifacts::branch::DEFAULT_BRANCH;
use crate::artifacts::branch::branch_name::BranchName;
use anyhow::Context;
use std::fs;

impl Repository {
    pub fn init(&mut self) -> anyhow::Result<()> {
        let reinitialized = self.refs().head_path().exists();

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .trk/objects directory")?;

        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create .trk/refs/heads directory")?;

        if reinitialized {
            writeln!(
                self.writer(),
                "Reinitialized existing trk repository in {}",
                self.trk_path().display()
            )?;
            return Ok(());
        }

        self.refs()
            .set_head_to_branch(&BranchName::try_parse(DEFAULT_BRANCH)?)
            .context("Failed to create initial HEAD reference")?;

        writeln!(
            self.writer(),
            "Initialized empty trk repository in {}",
            self.trk_path().display()
        )?;

        Ok(())
    }
}
