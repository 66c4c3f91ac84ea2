//! Working tree status inspection
//!
//! Status compares the index against the working tree only; the HEAD commit
//! plays no part.
//!
//! ## Components
//!
//! - `file_change`: Categories a path can fall into
//! - `inspector`: Hashes workspace files without storing them
//! - `status_info`: Partition of all paths into categories

pub mod file_change;
pub mod inspector;
pub mod status_info;
