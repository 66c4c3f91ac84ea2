//! Error taxonomy for the repository core
//!
//! Every operation in `areas` and `artifacts` returns [`Result`]. The command
//! layer converts these into `anyhow` errors and reports them, one per
//! invocation.

use crate::artifacts::objects::object_id::ObjectId;
use std::path::{Path, PathBuf};

/// Errors raised by the object store, index, refs and working-tree operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("object {0} not found")]
    ObjectNotFound(ObjectId),

    #[error("corrupt object: {0}")]
    CorruptObject(String),

    #[error("corrupt index at line {line}: {reason}")]
    CorruptIndex { line: usize, reason: String },

    #[error("pathspec '{0}' did not match any files")]
    PathNotFound(PathBuf),

    #[error("'{0}' is ignored by .trkignore")]
    PathIgnored(PathBuf),

    #[error("'{}' contains a line break and cannot be staged", .0.escape_debug())]
    UnsupportedPath(String),

    #[error("nothing to write: the index is empty")]
    EmptyIndex,

    #[error("a branch named '{0}' already exists")]
    BranchExists(String),

    #[error("branch '{0}' does not exist")]
    BranchNotFound(String),

    #[error("branch '{0}' has no commits yet")]
    NoCommitsYet(String),

    #[error("invalid ref: {0}")]
    InvalidRef(String),

    #[error("'{0}' is not a valid branch name")]
    InvalidBranchName(String),

    #[error("commit '{0}' not found")]
    CommitNotFound(String),

    #[error("invalid commit {oid}: {reason}")]
    InvalidCommit { oid: ObjectId, reason: String },

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("not a trk repository: {0}")]
    NotARepository(PathBuf),

    #[error("I/O failure on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Attach the offending path to a bare `std::io::Error`.
pub trait IoResultExt<T> {
    fn at(self, path: &Path) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn at(self, path: &Path) -> Result<T> {
        self.map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
