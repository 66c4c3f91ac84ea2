//! trk: a small content-addressed version control system
//!
//! - `areas`: the durable parts of a repository (object database, index,
//!   refs, workspace, config) and the `Repository` handle owning them
//! - `artifacts`: values and algorithms built on top of the areas (objects,
//!   branches, status, diff, checkout, merge, ignore rules)
//! - `commands`: one `impl Repository` block per CLI command

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

pub use errors::{Error, Result};
