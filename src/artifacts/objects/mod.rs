//! Object types and operations
//!
//! All content is stored as objects identified by SHA-1 digests:
//!
//! - **Blob**: File content (raw bytes)
//! - **Tree**: Flat snapshot mapping paths to blob digests
//! - **Commit**: Snapshot pointer with lineage (at most one parent) and metadata
//!
//! All objects share the encoded form `<type> <size>\0<payload>`.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a SHA-1 digest in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
/// Length of a SHA-1 digest in raw bytes, as stored in tree entries
pub const RAW_OBJECT_ID_LENGTH: usize = 20;

/// Mode written for every file entry
pub const REGULAR_FILE_MODE: &str = "100644";
/// Mode of a nested tree entry; never written by this implementation
pub const TREE_MODE: &str = "40000";
