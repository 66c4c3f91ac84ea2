//! Commit object
//!
//! Commits represent snapshots of the repository at specific points in time.
//! They contain:
//! - A tree object ID (the snapshot)
//! - At most one parent commit ID (history is strictly linear per commit)
//! - Author and committer information
//! - Commit message
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <<email>> <unix-seconds>
//! committer <name> <<email>> <unix-seconds>
//!
//! <commit message>
//! ```
//!
//! Everything after the first blank line is the message, verbatim.

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{Error, IoResultExt};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::io::BufRead;
use std::path::Path;

/// Author or committer information
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Author {
    name: String,
    email: String,
    timestamp: DateTime<Utc>,
}

impl Author {
    /// Create a new author stamped with the current time
    pub fn new(name: String, email: String) -> Self {
        Self::new_with_timestamp(name, email, Utc::now())
    }

    pub fn new_with_timestamp(name: String, email: String, timestamp: DateTime<Utc>) -> Self {
        Author {
            name,
            email,
            timestamp,
        }
    }

    /// "Name <email@example.com>"
    pub fn display_name(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }

    /// "Name <email> unix-seconds", the form stored in the commit header
    pub fn display(&self) -> String {
        format!("{} <{}> {}", self.name, self.email, self.timestamp.timestamp())
    }

    /// String like "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl TryFrom<&str> for Author {
    type Error = Error;

    fn try_from(value: &str) -> crate::Result<Self> {
        let corrupt = |reason: &str| Error::CorruptObject(format!("{reason}: '{value}'"));

        let email_start = value.find('<').ok_or_else(|| corrupt("missing '<'"))?;
        let email_end = value.rfind('>').ok_or_else(|| corrupt("missing '>'"))?;
        if email_end < email_start {
            return Err(corrupt("malformed email"));
        }

        let name = value[..email_start].trim().to_string();
        let email = value[email_start + 1..email_end].to_string();

        // a trailing git-style "+hhmm" zone is tolerated and ignored
        let seconds = value[email_end + 1..]
            .split_whitespace()
            .next()
            .ok_or_else(|| corrupt("missing timestamp"))?
            .parse::<i64>()
            .map_err(|_| corrupt("invalid timestamp"))?;
        let timestamp =
            DateTime::from_timestamp(seconds, 0).ok_or_else(|| corrupt("timestamp out of range"))?;

        Ok(Author::new_with_timestamp(name, email, timestamp))
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// None for a root commit
    parent: Option<ObjectId>,
    tree_oid: ObjectId,
    author: Author,
    committer: Author,
    message: String,
}

impl Commit {
    /// Create a new commit; the author doubles as committer
    pub fn new(
        parent: Option<ObjectId>,
        tree_oid: ObjectId,
        author: Author,
        message: String,
    ) -> Self {
        Commit {
            parent,
            tree_oid,
            committer: author.clone(),
            author,
            message,
        }
    }

    /// First line of the commit message
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn committer(&self) -> &Author {
        &self.committer
    }

    fn header_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("tree {}", self.tree_oid)];
        if let Some(parent) = &self.parent {
            lines.push(format!("parent {parent}"));
        }
        lines.push(format!("author {}", self.author.display()));
        lines.push(format!("committer {}", self.committer.display()));

        lines
    }
}

impl Packable for Commit {
    fn serialize(&self) -> crate::Result<Bytes> {
        Ok(Bytes::from(self.display()))
    }
}

impl Unpackable for Commit {
    fn deserialize(mut reader: impl BufRead) -> crate::Result<Self> {
        let mut payload = Vec::new();
        reader
            .read_to_end(&mut payload)
            .at(Path::new("<commit payload>"))?;
        let content = String::from_utf8(payload)
            .map_err(|e| Error::CorruptObject(format!("commit is not valid UTF-8: {e}")))?;

        let (header, message) = content
            .split_once("\n\n")
            .ok_or_else(|| Error::CorruptObject("commit has no message separator".to_string()))?;
        let mut lines = header.lines();

        let tree_oid = lines
            .next()
            .and_then(|line| line.strip_prefix("tree "))
            .and_then(ObjectId::try_parse)
            .ok_or_else(|| {
                Error::CorruptObject("first commit line is not 'tree <digest>'".to_string())
            })?;

        let mut parent = None;
        let mut author = None;
        let mut committer = None;

        for line in lines {
            if let Some(value) = line.strip_prefix("parent ") {
                if parent.is_some() {
                    return Err(Error::CorruptObject(
                        "commit has more than one parent".to_string(),
                    ));
                }
                parent = Some(ObjectId::try_parse(value).ok_or_else(|| {
                    Error::CorruptObject(format!("invalid parent digest '{value}'"))
                })?);
            } else if let Some(value) = line.strip_prefix("author ") {
                author = Some(Author::try_from(value)?);
            } else if let Some(value) = line.strip_prefix("committer ") {
                committer = Some(Author::try_from(value)?);
            }
        }

        let author =
            author.ok_or_else(|| Error::CorruptObject("commit has no author".to_string()))?;
        let committer =
            committer.ok_or_else(|| Error::CorruptObject("commit has no committer".to_string()))?;

        Ok(Commit {
            parent,
            tree_oid,
            author,
            committer,
            message: message.to_string(),
        })
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn display(&self) -> String {
        let mut lines = self.header_lines();
        lines.push(String::new());
        lines.push(self.message.clone());

        lines.join("\n")
    }
}
