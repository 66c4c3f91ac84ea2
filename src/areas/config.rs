//! User identity configuration
//!
//! Resolution order for each field: environment (`TRK_NAME`, `TRK_EMAIL`,
//! `TRK_DATE`), then `name=`/`email=` lines of `<root>/.trkconfig`, then
//! built-in defaults.

use crate::artifacts::objects::commit::Author;
use crate::errors::IoResultExt;
use chrono::{DateTime, Utc};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = ".trkconfig";

pub const NAME_ENV: &str = "TRK_NAME";
pub const EMAIL_ENV: &str = "TRK_EMAIL";
pub const DATE_ENV: &str = "TRK_DATE";

const DEFAULT_NAME: &str = "Unknown";
const DEFAULT_EMAIL: &str = "unknown@example.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    name: String,
    email: String,
    date: Option<DateTime<Utc>>,
}

impl Config {
    /// Load the identity for the repository rooted at `root`
    pub fn load(root: &Path) -> crate::Result<Self> {
        let file = Self::read_file(&root.join(CONFIG_FILE_NAME))?;

        let name = std::env::var(NAME_ENV)
            .ok()
            .or(file.name)
            .unwrap_or_else(|| DEFAULT_NAME.to_string());
        let email = std::env::var(EMAIL_ENV)
            .ok()
            .or(file.email)
            .unwrap_or_else(|| DEFAULT_EMAIL.to_string());
        let date = std::env::var(DATE_ENV)
            .ok()
            .and_then(|raw| match parse_date(&raw) {
                Some(date) => Some(date),
                None => {
                    tracing::warn!(value = %raw, "ignoring unparseable {DATE_ENV}");
                    None
                }
            });

        Ok(Config { name, email, date })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Author stamped with the pinned date, or the current time
    pub fn author(&self) -> Author {
        match self.date {
            Some(date) => Author::new_with_timestamp(self.name.clone(), self.email.clone(), date),
            None => Author::new(self.name.clone(), self.email.clone()),
        }
    }

    fn read_file(path: &Path) -> crate::Result<FileIdentity> {
        let mut identity = FileIdentity::default();
        if !path.is_file() {
            return Ok(identity);
        }

        let content = std::fs::read_to_string(path).at(path)?;
        for line in content.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match line.split_once('=') {
                Some((key, value)) if key.trim() == "name" => {
                    identity.name = Some(value.trim().to_string())
                }
                Some((key, value)) if key.trim() == "email" => {
                    identity.email = Some(value.trim().to_string())
                }
                _ => tracing::debug!(%line, "skipping config line"),
            }
        }

        Ok(identity)
    }
}

#[derive(Debug, Default)]
struct FileIdentity {
    name: Option<String>,
    email: Option<String>,
}

/// Unix seconds, RFC 2822, or `%Y-%m-%d %H:%M:%S %z`
fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(seconds) = raw.parse::<i64>() {
        return DateTime::from_timestamp(seconds, 0);
    }

    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S %z"))
        .ok()
        .map(|date| date.with_timezone(&Utc))
}
