//! Working directory file system operations
//!
//! Paths handed in and out of the workspace are slash-separated and relative
//! to the repository root, the same form the index and trees use.

use crate::errors::IoResultExt;
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Directories never scanned: the repository's own and a sibling git one
const IGNORED_PATHS: [&str; 2] = [".trk", ".git"];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every regular file below the root, sorted, skipping private directories
    pub fn list_files(&self) -> crate::Result<Vec<String>> {
        self.list_files_under(&self.path)
    }

    /// Every regular file below `dir` (an absolute path inside the workspace)
    pub fn list_files_under(&self, dir: &Path) -> crate::Result<Vec<String>> {
        let mut files = Vec::new();

        let walker = WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !Self::is_ignored(entry.file_name().to_string_lossy().as_ref()));

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(dir).to_path_buf();
                crate::Error::Io {
                    path,
                    source: e.into(),
                }
            })?;

            if entry.file_type().is_file()
                && let Some(relative) = self.relative_path(entry.path())
            {
                files.push(relative);
            }
        }
        files.sort();

        Ok(files)
    }

    fn is_ignored(name: &str) -> bool {
        IGNORED_PATHS.contains(&name)
    }

    /// Turn an absolute path under the root into its slash-separated form
    pub fn relative_path(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(self.path.as_ref()).ok()?;
        let parts = relative
            .components()
            .map(|component| match component {
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()?;

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("/"))
        }
    }

    pub fn absolute_path(&self, file_path: &str) -> PathBuf {
        self.path.join(file_path)
    }

    pub fn exists(&self, file_path: &str) -> bool {
        self.absolute_path(file_path).is_file()
    }

    pub fn read_file(&self, file_path: &str) -> crate::Result<Bytes> {
        let path = self.absolute_path(file_path);
        let content = std::fs::read(&path).at(&path)?;

        Ok(Bytes::from(content))
    }

    /// Write `data` to `file_path`, creating parent directories as needed
    pub fn write_file(&self, file_path: &str, data: &[u8]) -> crate::Result<()> {
        let path = self.absolute_path(file_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).at(parent)?;
        }

        std::fs::write(&path, data).at(&path)
    }

    /// Delete `file_path` if present and prune parent directories it left empty
    pub fn remove_file(&self, file_path: &str) -> crate::Result<()> {
        let path = self.absolute_path(file_path);
        if !path.is_file() {
            return Ok(());
        }

        std::fs::remove_file(&path).at(&path)?;
        self.prune_empty_parent_dirs(&path)
    }

    fn prune_empty_parent_dirs(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.path.as_ref()
            && parent.starts_with(self.path.as_ref())
            && parent.read_dir().at(parent)?.next().is_none()
        {
            std::fs::remove_dir(parent).at(parent)?;
            self.prune_empty_parent_dirs(parent)?;
        }

        Ok(())
    }
}
