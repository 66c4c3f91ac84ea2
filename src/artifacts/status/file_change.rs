use colored::{ColoredString, Colorize};

/// Category a path falls into when comparing the index with the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileChange {
    /// Indexed, present, content differs from the staged blob
    Modified,
    /// Indexed, missing from the workspace
    Deleted,
    /// Present, neither indexed nor ignored
    Untracked,
    /// Indexed, present, content matches the staged blob
    Staged,
}

impl FileChange {
    /// Two-column code used by `status --porcelain`
    pub fn porcelain_code(&self) -> &'static str {
        match self {
            FileChange::Modified => "M ",
            FileChange::Deleted => "D ",
            FileChange::Untracked => "??",
            FileChange::Staged => "S ",
        }
    }

    /// Section heading used by the long status format
    pub fn heading(&self) -> ColoredString {
        match self {
            FileChange::Modified => "Modified files:".red(),
            FileChange::Deleted => "Deleted files:".magenta(),
            FileChange::Untracked => "Untracked files:".yellow(),
            FileChange::Staged => "Unchanged (staged) files:".green(),
        }
    }

    pub fn colorize(&self, path: &str) -> ColoredString {
        match self {
            FileChange::Modified => path.red(),
            FileChange::Deleted => path.magenta(),
            FileChange::Untracked => path.yellow(),
            FileChange::Staged => path.green(),
        }
    }
}
