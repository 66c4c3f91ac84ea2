//! Porcelain commands (user-facing version control operations)
//!
//! Porcelain commands compose the areas and artifacts into the workflows a
//! user runs day to day.
//!
//! ## Commands
//!
//! - `init`: Initialize (or reinitialize) a repository
//! - `add`: Stage files for commit
//! - `commit`: Record the index as a new commit
//! - `status`: Compare the index with the working tree
//! - `diff`: Show line changes between staged and working files
//! - `log`: Show commit history
//! - `branch`: Create and list branches
//! - `checkout`: Switch to a branch or a commit
//! - `merge`: Fast-forward the current branch or report conflicts

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod diff;
pub mod init;
pub mod log;
pub mod merge;
pub mod status;
