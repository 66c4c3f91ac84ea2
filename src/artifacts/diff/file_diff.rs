use crate::artifacts::diff::diff_algorithm::{DiffAlgorithm, MyersDiff};
use crate::artifacts::diff::hunk::{DEFAULT_CONTEXT, Hunk};
use colored::Colorize;
use std::io::Write;

/// Difference between the staged and the working version of one path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileDiff {
    Modified {
        path: String,
        hunks: Vec<Hunk<String>>,
    },
    Deleted {
        path: String,
    },
}

impl FileDiff {
    /// Line diff of two file versions; bytes are decoded lossily as UTF-8
    pub fn modified(path: &str, staged: &[u8], working: &[u8]) -> Self {
        let a = Self::split_lines(staged);
        let b = Self::split_lines(working);
        let hunks = Hunk::build(&MyersDiff::new(&a, &b).diff(), DEFAULT_CONTEXT);

        FileDiff::Modified {
            path: path.to_string(),
            hunks,
        }
    }

    pub fn deleted(path: &str) -> Self {
        FileDiff::Deleted {
            path: path.to_string(),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            FileDiff::Modified { path, .. } | FileDiff::Deleted { path } => path,
        }
    }

    /// False for a modification that only touches line endings, which the
    /// line diff cannot show
    pub fn has_changes(&self) -> bool {
        match self {
            FileDiff::Modified { hunks, .. } => !hunks.is_empty(),
            FileDiff::Deleted { .. } => true,
        }
    }

    fn split_lines(data: &[u8]) -> Vec<String> {
        String::from_utf8_lossy(data)
            .lines()
            .map(String::from)
            .collect()
    }

    pub fn render(&self, writer: &mut dyn Write) -> std::io::Result<()> {
        match self {
            FileDiff::Deleted { path } => {
                writeln!(writer, "{}", format!("deleted: {path}").red())
            }
            FileDiff::Modified { path, hunks } => {
                writeln!(writer, "{}", format!("diff --trk a/{path} b/{path}").bold())?;
                writeln!(writer, "{}", format!("--- a/{path} (staged)").bold())?;
                writeln!(writer, "{}", format!("+++ b/{path} (working)").bold())?;

                for hunk in hunks {
                    writeln!(writer, "{}", hunk.header().cyan())?;
                    for edit in hunk.edits() {
                        writeln!(writer, "{edit}")?;
                    }
                }

                Ok(())
            }
        }
    }
}
