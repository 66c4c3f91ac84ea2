//! Data structures and algorithms
//!
//! - `branch`: Branch names and HEAD states
//! - `checkout`: Target resolution and working-tree switching
//! - `core`: Output plumbing (pager)
//! - `database`: Entries read from tree objects
//! - `diff`: Line diffs (Myers) and unified hunks
//! - `ignore`: `.trkignore` glob rules
//! - `index`: Staging area entries
//! - `merge`: Fast-forward detection and conflict classification
//! - `objects`: Object types (blob, tree, commit)
//! - `status`: Index versus working tree partition

pub mod branch;
pub mod checkout;
pub mod core;
pub mod database;
pub mod diff;
pub mod ignore;
pub mod index;
pub mod merge;
pub mod objects;
pub mod status;
