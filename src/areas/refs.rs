//! References (branches and HEAD)
//!
//! References are human-readable names pointing to commits:
//! - Branches: `refs/heads/*` files holding a commit digest
//! - HEAD: either symbolic (`ref: refs/heads/<name>`) or a raw digest when
//!   detached
//!
//! ## File Format
//!
//! Every ref file holds one line terminated by a newline: a 40-character
//! digest or `ref: <path>`.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::head::Head;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, IoResultExt};
use derive_new::new;
use std::path::Path;
use walkdir::WalkDir;

/// References manager
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository directory (typically `.trk`)
    path: Box<Path>,
}

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

/// Raw content of a ref file
#[derive(Debug, Clone)]
enum SymRefOrOid {
    SymRef(String),
    Oid(ObjectId),
}

impl SymRefOrOid {
    fn read(path: &Path) -> crate::Result<Option<SymRefOrOid>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).at(path)?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        if let Some(symref_match) = regex::Regex::new(SYMREF_REGEX)?.captures(content) {
            Ok(Some(SymRefOrOid::SymRef(symref_match[1].to_string())))
        } else {
            ObjectId::try_parse(content)
                .map(|oid| Some(SymRefOrOid::Oid(oid)))
                .ok_or_else(|| {
                    Error::InvalidRef(format!("{} holds '{content}'", path.display()))
                })
        }
    }
}

impl Refs {
    /// Resolve HEAD to a branch (possibly unborn) or a detached commit
    pub fn resolve_head(&self) -> crate::Result<Head> {
        match SymRefOrOid::read(&self.head_path())? {
            Some(SymRefOrOid::SymRef(ref_path)) => {
                let branch = BranchName::try_parse_ref_path(&ref_path)?;
                let oid = self.read_branch(&branch)?;
                Ok(Head::OnBranch { branch, oid })
            }
            Some(SymRefOrOid::Oid(oid)) => Ok(Head::Detached(oid)),
            None => Err(Error::InvalidRef(format!(
                "{} is missing or empty",
                self.head_path().display()
            ))),
        }
    }

    /// Commit digest stored in a branch file; None for an unborn branch
    pub fn read_branch(&self, branch: &BranchName) -> crate::Result<Option<ObjectId>> {
        match SymRefOrOid::read(&self.branch_path(branch))? {
            Some(SymRefOrOid::Oid(oid)) => Ok(Some(oid)),
            Some(SymRefOrOid::SymRef(target)) => Err(Error::InvalidRef(format!(
                "branch {branch} is symbolic (-> {target})"
            ))),
            None => Ok(None),
        }
    }

    pub fn branch_exists(&self, branch: &BranchName) -> bool {
        self.branch_path(branch).is_file()
    }

    pub fn update_branch(&self, branch: &BranchName, oid: &ObjectId) -> crate::Result<()> {
        self.update_ref_file(&self.branch_path(branch), oid.as_ref())?;
        tracing::info!(%branch, %oid, "branch updated");

        Ok(())
    }

    /// Create a new branch at `oid`, refusing to overwrite an existing one
    pub fn create_branch(&self, branch: &BranchName, oid: &ObjectId) -> crate::Result<()> {
        if self.branch_exists(branch) {
            return Err(Error::BranchExists(branch.to_string()));
        }

        self.update_branch(branch, oid)
    }

    /// Move whatever HEAD points at: the current branch, or HEAD itself
    /// when detached
    pub fn update_head(&self, oid: &ObjectId) -> crate::Result<()> {
        match self.resolve_head()? {
            Head::OnBranch { branch, .. } => self.update_branch(&branch, oid),
            Head::Detached(_) => self.detach_head(oid),
        }
    }

    pub fn set_head_to_branch(&self, branch: &BranchName) -> crate::Result<()> {
        self.update_ref_file(
            &self.head_path(),
            &format!("ref: {}", branch.to_ref_path()),
        )?;
        tracing::info!(%branch, "HEAD now on branch");

        Ok(())
    }

    pub fn detach_head(&self, oid: &ObjectId) -> crate::Result<()> {
        self.update_ref_file(&self.head_path(), oid.as_ref())?;
        tracing::info!(%oid, "HEAD detached");

        Ok(())
    }

    /// Every branch name under `refs/heads`, sorted
    pub fn list_branches(&self) -> crate::Result<Vec<BranchName>> {
        let heads_path = self.heads_path();
        if !heads_path.exists() {
            return Ok(Vec::new());
        }

        let mut branches = WalkDir::new(&heads_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let relative_path = entry.path().strip_prefix(&heads_path).ok()?;
                let name = relative_path
                    .components()
                    .map(|component| component.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                BranchName::try_parse(name).ok()
            })
            .collect::<Vec<_>>();
        branches.sort();

        Ok(branches)
    }

    fn update_ref_file(&self, path: &Path, raw_ref: &str) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).at(parent)?;
        }

        std::fs::write(path, format!("{raw_ref}\n")).at(path)
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }

    fn branch_path(&self, branch: &BranchName) -> Box<Path> {
        self.heads_path().join(branch.as_ref()).into_boxed_path()
    }
}
