use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;

/// Where HEAD currently points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Head {
    /// HEAD holds a raw commit digest
    Detached(ObjectId),
    /// HEAD is symbolic; `oid` is None while the branch is unborn
    OnBranch {
        branch: BranchName,
        oid: Option<ObjectId>,
    },
}

impl Head {
    /// Commit HEAD resolves to, if any
    pub fn oid(&self) -> Option<&ObjectId> {
        match self {
            Head::Detached(oid) => Some(oid),
            Head::OnBranch { oid, .. } => oid.as_ref(),
        }
    }

    pub fn branch(&self) -> Option<&BranchName> {
        match self {
            Head::Detached(_) => None,
            Head::OnBranch { branch, .. } => Some(branch),
        }
    }

    /// Branch name, or "HEAD" when detached; used in messages
    pub fn describe(&self) -> String {
        match self {
            Head::Detached(_) => "HEAD".to_string(),
            Head::OnBranch { branch, .. } => branch.to_string(),
        }
    }
}
