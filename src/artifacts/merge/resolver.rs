use crate::areas::database::Database;
use crate::artifacts::merge::ancestry::AncestryWalker;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use crate::errors::Error;
use derive_new::new;

/// How a merge of `target` into the current branch resolves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Both sides point at the same commit
    AlreadyUpToDate,
    /// The current commit precedes the target; the branch can move forward
    FastForward,
    /// Paths present on both sides with different content
    Conflict(Vec<String>),
    /// Histories diverged without overlapping edits; left for a manual merge
    Diverged,
}

#[derive(new)]
pub struct MergeResolver<'d> {
    database: &'d Database,
}

impl<'d> MergeResolver<'d> {
    pub fn resolve(&self, current: &ObjectId, target: &ObjectId) -> crate::Result<MergeOutcome> {
        if current == target {
            return Ok(MergeOutcome::AlreadyUpToDate);
        }

        let walker = AncestryWalker::new(|oid: &ObjectId| {
            let commit = self
                .database
                .parse_object_as_commit(oid)?
                .ok_or_else(|| Error::InvalidCommit {
                    oid: oid.clone(),
                    reason: "object is not a commit".to_string(),
                })?;
            Ok(commit.parent().cloned())
        });

        if walker.is_strict_ancestor(current, target)? {
            return Ok(MergeOutcome::FastForward);
        }

        let ours = self.database.load_commit_tree(current)?;
        let theirs = self.database.load_commit_tree(target)?;
        let conflicts = Self::conflicting_paths(&ours, &theirs);

        if conflicts.is_empty() {
            Ok(MergeOutcome::Diverged)
        } else {
            Ok(MergeOutcome::Conflict(conflicts))
        }
    }

    /// Paths present in both trees whose blobs differ, sorted
    pub fn conflicting_paths(ours: &Tree, theirs: &Tree) -> Vec<String> {
        ours.entries()
            .filter_map(|(path, entry)| match theirs.get(path) {
                Some(other) if other.oid != entry.oid => Some(path.clone()),
                _ => None,
            })
            .collect()
    }
}
