//! Index (staging area) data structures
//!
//! The index file is plain text, one `<digest> <path>` line per staged file,
//! written in canonical path order.

pub mod index_entry;

/// Name of the index file inside the repository directory
pub const INDEX_FILE_NAME: &str = "index.txt";
