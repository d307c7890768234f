//! Error types for tarball decoding.
//!
//! This module provides the [`Error`] enum which represents all possible
//! failure modes when decoding a registry tarball, along with a convenient
//! [`Result<T>`] type alias.
//!
//! All fallible operations in this crate return `Result<T, Error>`. Note
//! that a requested file missing from the archive is **not** an error:
//! [`extract_file`] and [`Archive::extract_text`] return `Ok(None)` for
//! that outcome, so it can never be conflated with an empty file or a
//! corrupt archive.
//!
//! ```rust,no_run
//! use untgz::{Archive, Error};
//!
//! fn fetch(raw: &[u8]) -> untgz::Result<String> {
//!     match Archive::decode(raw) {
//!         Ok(archive) => Ok(archive
//!             .extract_text("package.json")?
//!             .unwrap_or_default()),
//!         Err(Error::Decompression { offset, reason }) => {
//!             eprintln!("bad gzip member at byte {offset:#x}: {reason}");
//!             Err(Error::Decompression { offset, reason })
//!         }
//!         Err(e) => Err(e),
//!     }
//! }
//! ```
//!
//! [`extract_file`]: crate::extract_file
//! [`Archive::extract_text`]: crate::Archive::extract_text

use std::io;

/// The main error type for tarball decoding operations.
///
/// Every variant is fatal: the decode that raised it produced no partial
/// result, and nothing is retried internally.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An I/O error occurred in the reader plumbing underneath the
    /// decompressor.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A gzip member is malformed.
    ///
    /// Registry tarballs are concatenations of independently-terminated
    /// gzip members; a bad magic number, deflate stream, or trailer in
    /// any one of them aborts the whole decode. The offset is where the
    /// failing member starts in the raw input.
    #[error("malformed gzip member at offset {offset:#x}: {reason}")]
    Decompression {
        /// Byte offset of the failing member in the raw input.
        offset: usize,
        /// A description of what the decoder rejected.
        reason: String,
    },

    /// A PAX extended-header record does not have the
    /// `"<length> <key>=<value>\n"` shape.
    #[error("invalid PAX record: {0}")]
    PaxFormat(String),

    /// A read ran past the end of the decoded buffer.
    ///
    /// Truncated archives are treated as fatal rather than decoded
    /// best-effort: a fixed-width header read or a content read that
    /// does not fit in the remaining bytes fails with this variant
    /// instead of returning partial or zero-filled data.
    #[error("read of {requested} bytes at offset {offset} exceeds buffer of {len} bytes")]
    OutOfBounds {
        /// The cursor position where the read started.
        offset: usize,
        /// How many bytes the read wanted.
        requested: usize,
        /// The total buffer length.
        len: usize,
    },

    /// A PAX header block contains an invalid UTF-8 sequence.
    ///
    /// Only extended-header blocks are decoded as UTF-8; header fields
    /// and extracted content use the byte-per-character path, which
    /// cannot raise this.
    #[error("UTF-8 decode failed: {0}")]
    Decode(String),
}

impl Error {
    /// Returns true for errors that indicate a damaged or forged
    /// archive, as opposed to environmental failures.
    pub fn is_corruption(&self) -> bool {
        matches!(
            self,
            Self::Decompression { .. } | Self::PaxFormat(_) | Self::OutOfBounds { .. } | Self::Decode(_)
        )
    }
}

/// A specialized `Result` type for tarball decoding operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corruption_classification() {
        assert!(
            Error::OutOfBounds {
                offset: 512,
                requested: 100,
                len: 600
            }
            .is_corruption()
        );
        assert!(Error::PaxFormat("no newline".into()).is_corruption());
        assert!(!Error::Io(io::Error::other("disk fell over")).is_corruption());
    }

    #[test]
    fn display_includes_context() {
        let err = Error::Decompression {
            offset: 0x20,
            reason: "invalid gzip header".into(),
        };
        let text = err.to_string();
        assert!(text.contains("0x20"));
        assert!(text.contains("invalid gzip header"));
    }
}
