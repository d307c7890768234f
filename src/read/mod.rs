//! Archive reading API.
//!
//! This module provides the public surface for reading decoded archives:
//! [`Archive`] owns the decompressed TAR buffer, [`Entries`] walks its
//! members, and the extraction methods pull one file out by path.
//!
//! # Example
//!
//! ```rust,no_run
//! use untgz::Archive;
//!
//! # fn main() -> untgz::Result<()> {
//! let raw = std::fs::read("left-pad-1.3.0.tgz")?;
//! let archive = Archive::decode(&raw)?;
//!
//! for entry in archive.entries() {
//!     let entry = entry?;
//!     println!("{}: {} bytes", entry.name, entry.size);
//! }
//! # Ok(())
//! # }
//! ```

mod entries;
mod extraction;

pub use entries::Entries;
pub(crate) use extraction::extract_from;

use crate::Result;
use crate::codec::gzip;

/// A decoded TAR archive held fully in memory.
///
/// The buffer is immutable once constructed. Every [`entries`] pass gets
/// its own cursor and PAX override state, so independent walks over the
/// same archive never interfere.
///
/// [`entries`]: Archive::entries
pub struct Archive {
    data: Vec<u8>,
}

impl std::fmt::Debug for Archive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Archive")
            .field("len", &self.data.len())
            .finish()
    }
}

impl Archive {
    /// Decompresses a raw, possibly multi-member gzip stream and wraps
    /// the decoded TAR bytes.
    ///
    /// # Errors
    ///
    /// [`Error::Decompression`](crate::Error::Decompression) when any
    /// gzip member is malformed.
    pub fn decode(raw: &[u8]) -> Result<Self> {
        Ok(Self {
            data: gzip::decompress_members(raw)?,
        })
    }

    /// Wraps an already-decoded TAR buffer.
    pub fn from_tar(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// The decoded TAR bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Iterates the archive's entries in on-disk order.
    ///
    /// PAX `g`/`x` header entries are consumed internally — their
    /// overrides are already merged into the entries this iterator
    /// yields.
    pub fn entries(&self) -> Entries<'_> {
        Entries::new(&self.data)
    }
}
