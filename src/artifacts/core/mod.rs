//! Shared output plumbing
//!
//! Long output (`log`) goes through the `minus` pager when stdout is an
//! interactive terminal and `NO_PAGER` is unset; otherwise it is written
//! straight to stdout.

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Environment variable disabling the pager when set to anything
pub const NO_PAGER_ENV: &str = "NO_PAGER";

/// Whether command output should be paged
pub fn should_page() -> bool {
    std::env::var_os(NO_PAGER_ENV).is_none() && io::stdout().is_terminal()
}

/// Adapts a `minus::Pager` to `std::io::Write`
///
/// ```ignore
/// let pager = Pager::new();
/// let mut writer = PagerWriter::new(pager.clone());
/// writeln!(writer, "commit ...")?;
/// minus::page_all(pager)?;
/// ```
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
