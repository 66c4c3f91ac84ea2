use crate::areas::repository::REPOSITORY_DIR_NAME;
use crate::areas::repository::Repository;
use crate::artifacts::ignore::IgnoreRules;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Error;
use std::path::PathBuf;

impl Repository {
    pub fn add(&mut self, paths: &[String]) -> anyhow::Result<()> {
        let ignore = self.ignore_rules()?;

        for path in paths {
            match Self::normalize_pathspec(path) {
                Some(path) if path.is_empty() => self.stage_all(&ignore)?,
                Some(path) => self.stage_one(&path, &ignore)?,
                None => return Err(Error::PathNotFound(PathBuf::from(path)).into()),
            }
        }

        Ok(())
    }

    /// Replace the index with a snapshot of every non-ignored file
    fn stage_all(&self, ignore: &IgnoreRules) -> anyhow::Result<()> {
        let mut entries = Vec::new();
        for path in self.workspace().list_files()? {
            if ignore.is_ignored(&path) {
                continue;
            }
            if !IndexEntry::is_storable_path(&path) {
                tracing::warn!(path = %path.escape_debug(), "skipping path with a line break");
                continue;
            }

            let oid = self.store_workspace_blob(&path)?;
            entries.push(IndexEntry::new(path, oid));
        }

        let mut index = self.index();
        index.rehydrate()?;
        index.replace_all(entries);
        index.write_updates()?;

        writeln!(self.writer(), "Staged all changes.")?;

        Ok(())
    }

    /// Upsert one file, or every non-ignored file below one directory
    fn stage_one(&self, path: &str, ignore: &IgnoreRules) -> anyhow::Result<()> {
        let first_component = path.split('/').next().unwrap_or_default();
        if ignore.is_ignored(path) || first_component == REPOSITORY_DIR_NAME {
            return Err(Error::PathIgnored(PathBuf::from(path)).into());
        }

        let absolute_path = self.workspace().absolute_path(path);
        let files = if absolute_path.is_dir() {
            self.workspace()
                .list_files_under(&absolute_path)?
                .into_iter()
                .filter(|file| !ignore.is_ignored(file))
                .filter(|file| {
                    let storable = IndexEntry::is_storable_path(file);
                    if !storable {
                        tracing::warn!(path = %file.escape_debug(), "skipping path with a line break");
                    }
                    storable
                })
                .collect::<Vec<_>>()
        } else if absolute_path.is_file() {
            if !IndexEntry::is_storable_path(path) {
                return Err(Error::UnsupportedPath(path.to_string()).into());
            }
            vec![path.to_string()]
        } else {
            return Err(Error::PathNotFound(PathBuf::from(path)).into());
        };

        let mut staged = Vec::with_capacity(files.len());
        for file in files {
            let oid = self.store_workspace_blob(&file)?;
            staged.push((file, oid));
        }

        let mut index = self.index();
        index.rehydrate()?;
        for (file, oid) in &staged {
            index.add(file.clone(), oid.clone());
        }
        index.write_updates()?;
        drop(index);

        for (file, _) in &staged {
            writeln!(self.writer(), "added '{file}' to index")?;
        }

        Ok(())
    }

    fn store_workspace_blob(&self, path: &str) -> anyhow::Result<ObjectId> {
        let blob = Blob::new(self.workspace().read_file(path)?);
        Ok(self.database().store(&blob)?)
    }

    /// Slash-separated, root-relative form of a user pathspec; `.` and `./`
    /// become the empty string, anything escaping the root is rejected
    fn normalize_pathspec(path: &str) -> Option<String> {
        let mut parts = Vec::new();
        for part in path.split(['/', '\\']) {
            match part {
                "" | "." => continue,
                ".." => return None,
                part => parts.push(part),
            }
        }

        Some(parts.join("/"))
    }
}
