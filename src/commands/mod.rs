//! Command implementations
//!
//! Commands are `impl Repository` blocks returning `anyhow::Result`, split
//! into two groups:
//!
//! - `plumbing`: Low-level object and index access (hash-object, cat-file, write-tree, list-files)
//! - `porcelain`: User-facing workflows (add, commit, log, checkout, merge, etc.)

pub mod plumbing;
pub mod porcelain;
