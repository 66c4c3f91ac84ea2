//! Database entry types
//!
//! Entries read from tree objects: the object a path refers to and its mode.

pub mod database_entry;
