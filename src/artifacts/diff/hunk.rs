//! Unified diff hunks
//!
//! Changes separated by more than `2 * context` unchanged lines go into
//! separate hunks; each hunk carries up to `context` unchanged lines on both
//! sides.

use crate::artifacts::diff::diff_algorithm::Edit;

/// Lines of unchanged context kept around every change
pub const DEFAULT_CONTEXT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk<T> {
    /// Zero-based line offset of the hunk in the old file
    a_start: usize,
    /// Zero-based line offset of the hunk in the new file
    b_start: usize,
    edits: Vec<Edit<T>>,
}

impl<T: Clone> Hunk<T> {
    /// Group an edit script into hunks
    pub fn build(edits: &[Edit<T>], context: usize) -> Vec<Self> {
        // line offsets in a and b before each edit
        let mut offsets = Vec::with_capacity(edits.len());
        let (mut a_line, mut b_line) = (0, 0);
        for edit in edits {
            offsets.push((a_line, b_line));
            match edit {
                Edit::Delete { .. } => a_line += 1,
                Edit::Insert { .. } => b_line += 1,
                Edit::Equal { .. } => {
                    a_line += 1;
                    b_line += 1;
                }
            }
        }

        let changes = edits
            .iter()
            .enumerate()
            .filter(|(_, edit)| !edit.is_equal())
            .map(|(i, _)| i)
            .collect::<Vec<_>>();

        let mut groups: Vec<(usize, usize)> = Vec::new();
        for &change in &changes {
            match groups.last_mut() {
                Some((_, last)) if change - *last - 1 <= 2 * context => *last = change,
                _ => groups.push((change, change)),
            }
        }

        groups
            .into_iter()
            .map(|(first, last)| {
                let start = first.saturating_sub(context);
                let end = (last + context + 1).min(edits.len());
                let (a_start, b_start) = offsets[start];

                Hunk {
                    a_start,
                    b_start,
                    edits: edits[start..end].to_vec(),
                }
            })
            .collect()
    }

    pub fn edits(&self) -> &[Edit<T>] {
        &self.edits
    }

    pub fn a_size(&self) -> usize {
        self.edits
            .iter()
            .filter(|edit| !matches!(edit, Edit::Insert { .. }))
            .count()
    }

    pub fn b_size(&self) -> usize {
        self.edits
            .iter()
            .filter(|edit| !matches!(edit, Edit::Delete { .. }))
            .count()
    }

    /// `@@ -a,b +c,d @@` with a single-line range shown without its length
    /// and an empty range anchored on the line before it
    pub fn header(&self) -> String {
        format!(
            "@@ -{} +{} @@",
            Self::format_range(self.a_start, self.a_size()),
            Self::format_range(self.b_start, self.b_size())
        )
    }

    fn format_range(start: usize, length: usize) -> String {
        match length {
            0 => format!("{start},0"),
            1 => format!("{}", start + 1),
            _ => format!("{},{}", start + 1, length),
        }
    }
}
