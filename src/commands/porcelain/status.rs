use crate::areas::repository::Repository;
use crate::artifacts::status::file_change::FileChange;
use crate::artifacts::status::status_info::{Status, StatusInfo};

// Sections of the long format, in display order
const SECTIONS: [FileChange; 4] = [
    FileChange::Modified,
    FileChange::Deleted,
    FileChange::Untracked,
    FileChange::Staged,
];

// Terminology:
// - staged files: tracked by the index, workspace content matches the staged blob
// - modified files: tracked by the index, workspace content differs
// - deleted files: tracked by the index, missing from the workspace
// - untracked files: neither tracked nor ignored
impl Repository {
    pub fn status(&self, porcelain: bool) -> anyhow::Result<()> {
        let status = Status::new(self).initialize()?;

        if porcelain {
            self.print_porcelain_format(&status)
        } else {
            self.print_long_format(&status)
        }
    }

    fn print_porcelain_format(&self, status: &StatusInfo) -> anyhow::Result<()> {
        for (path, change) in status.changes() {
            writeln!(self.writer(), "{} {}", change.porcelain_code(), path)?;
        }

        Ok(())
    }

    fn print_long_format(&self, status: &StatusInfo) -> anyhow::Result<()> {
        if status.is_empty() {
            writeln!(self.writer(), "nothing to commit, working tree clean")?;
            return Ok(());
        }

        for change in SECTIONS {
            let mut paths = status.paths(change).peekable();
            if paths.peek().is_none() {
                continue;
            }

            writeln!(self.writer(), "{}", change.heading())?;
            for path in paths {
                writeln!(self.writer(), "  {}", change.colorize(path))?;
            }
        }

        Ok(())
    }
}
