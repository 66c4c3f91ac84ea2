use crate::areas::config::Config;
use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::ignore::IgnoreRules;
use crate::artifacts::index::INDEX_FILE_NAME;
use crate::errors::{Error, IoResultExt};
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Name of the private repository directory under the root
pub const REPOSITORY_DIR_NAME: &str = ".trk";

/// Handle on one repository: the resolved root plus its four durable areas
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: RefCell<Index>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    /// Build a handle rooted at `path` without requiring `.trk` to exist yet
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> crate::Result<Self> {
        let path = path.canonicalize().at(path)?;
        let trk_path = path.join(REPOSITORY_DIR_NAME);

        let index = Index::new(trk_path.join(INDEX_FILE_NAME).into_boxed_path());
        let database = Database::new(trk_path.join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(trk_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            index: RefCell::new(index),
            database,
            workspace,
            refs,
        })
    }

    /// Open an existing repository, failing when `.trk` is absent
    pub fn open(path: &Path, writer: Box<dyn std::io::Write>) -> crate::Result<Self> {
        let repository = Self::new(path, writer)?;

        if !repository.trk_path().is_dir() {
            return Err(Error::NotARepository(repository.path.to_path_buf()));
        }

        Ok(repository)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn trk_path(&self) -> Box<Path> {
        self.path.join(REPOSITORY_DIR_NAME).into_boxed_path()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&'_ self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn config(&self) -> crate::Result<Config> {
        Config::load(&self.path)
    }

    pub fn ignore_rules(&self) -> crate::Result<IgnoreRules> {
        IgnoreRules::load(&self.path)
    }
}
