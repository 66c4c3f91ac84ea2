//! Core repository components
//!
//! This module contains the durable building blocks of a repository:
//!
//! - `config`: User identity resolution
//! - `database`: Object database for storing blobs, trees, and commits
//! - `index`: Staging area tracking the next commit's content
//! - `refs`: Branch and HEAD management
//! - `repository`: Handle coordinating all of the above
//! - `workspace`: Working directory file system operations

pub mod config;
pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
