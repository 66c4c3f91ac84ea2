//! Ignore rules
//!
//! `.trkignore` holds one shell-style glob per line; blank lines and lines
//! starting with `#` are skipped. A path is ignored when its full
//! slash-separated, root-relative form matches any glob:
//!
//! - `*` matches any run of characters, `/` included
//! - `?` matches exactly one character
//! - `[seq]` / `[!seq]` match one character in / not in `seq`
//!
//! Globs are compiled once into a single anchored regex alternation.

use crate::errors::IoResultExt;
use std::path::Path;

pub const IGNORE_FILE_NAME: &str = ".trkignore";

#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    patterns: Vec<String>,
    matcher: Option<regex::Regex>,
}

impl IgnoreRules {
    /// Read `<root>/.trkignore`; a missing file ignores nothing
    pub fn load(root: &Path) -> crate::Result<Self> {
        let path = root.join(IGNORE_FILE_NAME);
        if !path.is_file() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).at(&path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> crate::Result<Self> {
        let patterns = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect::<Vec<_>>();

        let matcher = if patterns.is_empty() {
            None
        } else {
            let alternation = patterns
                .iter()
                .map(|pattern| format!("(?:{})", translate(pattern)))
                .collect::<Vec<_>>()
                .join("|");
            Some(regex::Regex::new(&format!("^(?s:{alternation})$"))?)
        };

        Ok(IgnoreRules { patterns, matcher })
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_ignored(&self, path: &str) -> bool {
        self.matcher
            .as_ref()
            .is_some_and(|matcher| matcher.is_match(path))
    }
}

/// Translate one glob into regex syntax (unanchored)
fn translate(pattern: &str) -> String {
    let chars = pattern.chars().collect::<Vec<_>>();
    let mut regex = String::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' => regex.push_str(".*"),
            '?' => regex.push('.'),
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    let mut body = &chars[i + 1..end];
                    regex.push('[');
                    if body.first() == Some(&'!') {
                        regex.push('^');
                        body = &body[1..];
                    }
                    for c in body {
                        // everything but ranges is literal inside a glob class
                        if matches!(c, '\\' | '[' | ']' | '^' | '&' | '~') {
                            regex.push('\\');
                        }
                        regex.push(*c);
                    }
                    regex.push(']');
                    i = end;
                }
                None => regex.push_str("\\["),
            },
            c => regex.push_str(&regex::escape(&c.to_string())),
        }
        i += 1;
    }

    regex
}

/// Index of the `]` closing the class opened at `start`, if any. A `]` right
/// after `[` or `[!` is part of the class.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start + 1;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }

    (j..chars.len()).find(|&k| chars[k] == ']')
}
