//! Merge resolution
//!
//! Histories are linear per commit, so the only merge performed is a
//! fast-forward. Anything else is classified and reported:
//!
//! - `ancestry`: Parent-chain walk deciding whether one commit precedes another
//! - `resolver`: Classification of a merge into its outcome

pub mod ancestry;
pub mod resolver;
