//! Plumbing commands (low-level operations)
//!
//! Plumbing commands give direct access to the object store and the index.
//! They're used for scripting and as building blocks for porcelain commands.
//!
//! ## Commands
//!
//! - `cat-file`: Pretty-print a stored object
//! - `hash-object`: Store a file as a blob and print its digest
//! - `list-files`: List the paths recorded in HEAD's tree
//! - `write-tree`: Store the index as a tree and print its digest

pub mod cat_file;
pub mod hash_object;
pub mod list_files;
mod write_commit;
pub mod write_tree;
