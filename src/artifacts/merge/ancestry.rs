use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Error;
use std::collections::HashSet;

/// Walks single-parent chains using a caller-supplied parent loader
pub struct AncestryWalker<F>
where
    F: Fn(&ObjectId) -> crate::Result<Option<ObjectId>>,
{
    load_parent: F,
}

impl<F> AncestryWalker<F>
where
    F: Fn(&ObjectId) -> crate::Result<Option<ObjectId>>,
{
    pub fn new(load_parent: F) -> Self {
        AncestryWalker { load_parent }
    }

    /// True when `ancestor` appears on the parent chain of `descendant`,
    /// `descendant` itself excluded
    pub fn is_strict_ancestor(
        &self,
        ancestor: &ObjectId,
        descendant: &ObjectId,
    ) -> crate::Result<bool> {
        let mut seen = HashSet::from([descendant.clone()]);
        let mut current = (self.load_parent)(descendant)?;

        while let Some(oid) = current {
            if &oid == ancestor {
                return Ok(true);
            }
            if !seen.insert(oid.clone()) {
                return Err(Error::CorruptObject(format!(
                    "commit {oid} is its own ancestor"
                )));
            }

            tracing::trace!(%oid, "walking parent chain");
            current = (self.load_parent)(&oid)?;
        }

        Ok(false)
    }
}
