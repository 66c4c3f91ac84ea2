//! Line diffs between staged and working file versions
//!
//! - `diff_algorithm`: Myers' diff for line-by-line comparison
//! - `hunk`: Grouping of edits into unified-diff hunks with context
//! - `file_diff`: Per-path result and its unified rendering

pub mod diff_algorithm;
pub mod file_diff;
pub mod hunk;
