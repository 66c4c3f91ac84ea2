use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use crate::errors::Error;

/// What HEAD will point at after the checkout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetRef {
    Branch(BranchName),
    Detached,
}

/// A fully validated checkout target
#[derive(Debug, Clone)]
pub struct CheckoutTarget {
    pub target_ref: TargetRef,
    pub oid: ObjectId,
    pub commit: Commit,
    pub tree: Tree,
}

impl CheckoutTarget {
    /// Resolve `target` as a branch name first, then as a raw commit digest
    pub fn resolve(target: &str, refs: &Refs, database: &Database) -> crate::Result<Self> {
        if let Ok(branch) = BranchName::try_parse(target)
            && refs.branch_exists(&branch)
        {
            let oid = refs
                .read_branch(&branch)?
                .ok_or_else(|| Error::NoCommitsYet(branch.to_string()))?;
            let (commit, tree) = Self::load(&oid, database)?;

            return Ok(CheckoutTarget {
                target_ref: TargetRef::Branch(branch),
                oid,
                commit,
                tree,
            });
        }

        let oid = ObjectId::try_parse(target)
            .filter(|oid| database.contains(oid))
            .ok_or_else(|| Error::CommitNotFound(target.to_string()))?;
        let (commit, tree) = Self::load(&oid, database)?;

        Ok(CheckoutTarget {
            target_ref: TargetRef::Detached,
            oid,
            commit,
            tree,
        })
    }

    fn load(oid: &ObjectId, database: &Database) -> crate::Result<(Commit, Tree)> {
        let invalid = |reason: String| Error::InvalidCommit {
            oid: oid.clone(),
            reason,
        };

        let commit = match database.parse_object_as_commit(oid) {
            Ok(Some(commit)) => commit,
            Ok(None) => return Err(invalid("object is not a commit".to_string())),
            Err(Error::CorruptObject(reason)) => return Err(invalid(reason)),
            Err(e) => return Err(e),
        };

        let tree = match database.parse_object_as_tree(commit.tree_oid()) {
            Ok(Some(tree)) => tree,
            Ok(None) => return Err(invalid(format!("{} is not a tree", commit.tree_oid()))),
            Err(Error::ObjectNotFound(tree_oid)) => {
                return Err(invalid(format!("tree {tree_oid} is missing")));
            }
            Err(Error::CorruptObject(reason)) => return Err(invalid(reason)),
            Err(e) => return Err(e),
        };

        // every blob must be readable before the working tree is cleared
        if let Some((path, entry)) = tree
            .entries()
            .find(|(_, entry)| !database.contains(&entry.oid))
        {
            return Err(invalid(format!("blob {} at {path} is missing", entry.oid)));
        }

        Ok((commit, tree))
    }
}
