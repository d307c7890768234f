//! Single-file extraction from a decoded archive.

use super::Archive;
use super::entries::Entries;
use crate::Result;
use crate::format::entry::TarEntry;
use crate::format::text;

/// The synthetic top-level directory registry tarballs wrap their
/// contents in.
const PACKAGE_PREFIX: &str = "package/";

impl Archive {
    /// Returns the content of the first entry matching `path` as text.
    ///
    /// Entry names are compared after stripping the leading `package/`
    /// directory; names outside it are compared whole. Content is
    /// decoded one byte per character — never as UTF-8 — so binary
    /// content cannot make extraction fail.
    ///
    /// Returns `Ok(None)` when no entry matches: file-not-found, which
    /// callers must not conflate with an empty file
    /// (`Ok(Some(String::new()))`).
    pub fn extract_text(&self, path: &str) -> Result<Option<String>> {
        extract_from(self.as_bytes(), path)
    }

    /// Returns the first entry whose name matches `path`, content and
    /// all.
    pub fn find(&self, path: &str) -> Result<Option<TarEntry>> {
        find_in(self.as_bytes(), path)
    }
}

/// Walks `data` and returns the first matching entry's content as text.
pub(crate) fn extract_from(data: &[u8], path: &str) -> Result<Option<String>> {
    Ok(find_in(data, path)?.map(|entry| text::latin1_string(&entry.content)))
}

fn find_in(data: &[u8], path: &str) -> Result<Option<TarEntry>> {
    for entry in Entries::new(data) {
        let entry = entry?;
        if strip_package_prefix(&entry.name) == path {
            return Ok(Some(entry));
        }
    }
    Ok(None)
}

fn strip_package_prefix(name: &str) -> &str {
    name.strip_prefix(PACKAGE_PREFIX).unwrap_or(name)
}
