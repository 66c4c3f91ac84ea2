//! Checkout operations
//!
//! Switching to another commit happens in two steps:
//! - Resolving and validating the target before anything is touched
//! - Clearing the current commit's files and writing the target's, then
//!   resetting the index to the target tree
//!
//! The switch is lossy: uncommitted edits to tracked files are discarded.

pub mod migration;
pub mod target;
