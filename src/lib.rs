//! # untgz
//!
//! Single-file extraction from gzip-compressed package-registry
//! tarballs.
//!
//! Registry tarballs (npm `.tgz` and friends) are TAR archives wrapped
//! in a — possibly multi-member — gzip stream, with every path tucked
//! under a synthetic top-level `package/` directory. This crate decodes
//! that layout entirely in memory: it reassembles the gzip members into
//! one buffer, walks the TAR/USTAR entries with PAX extended-header
//! overrides applied, and hands back one file's content by path.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use untgz::Archive;
//!
//! fn main() -> untgz::Result<()> {
//!     let raw = std::fs::read("left-pad-1.3.0.tgz")?;
//!
//!     let archive = Archive::decode(&raw)?;
//!     match archive.extract_text("package.json")? {
//!         Some(text) => println!("{text}"),
//!         None => eprintln!("no such file in the tarball"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! The two-step split matters when the same archive is probed for
//! several paths: decode once, extract many times. For one-shot use the
//! free functions [`decode_archive`] and [`extract_file`] cover both
//! steps.
//!
//! ## What it is not
//!
//! No archives are written, nothing is decoded incrementally (the whole
//! archive is resident in memory before parsing starts), gzip is the
//! only compression handled, and header checksums are carried but never
//! verified.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T>`], an alias for
//! `std::result::Result<T, Error>`. A missing file is **not** an error:
//! extraction returns `Ok(None)` so not-found can never be mistaken for
//! an empty file. See [`error`] for the full taxonomy.
//!
//! ## Minimum Supported Rust Version (MSRV)
//!
//! This crate requires **Rust 1.85** or later.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod format;
pub mod read;

pub use error::{Error, Result};

// Re-export the reading API at the crate root for convenience
pub use format::entry::{EntryType, TarEntry};
pub use format::pax::{PaxOverrides, PaxValue};
pub use read::{Archive, Entries};

/// Decompresses a raw registry tarball — a possibly multi-member gzip
/// stream — into its TAR bytes.
///
/// # Errors
///
/// [`Error::Decompression`] when any member is malformed; the whole
/// decode aborts.
pub fn decode_archive(raw: &[u8]) -> Result<Vec<u8>> {
    codec::gzip::decompress_members(raw)
}

/// Extracts one file's content from decoded TAR bytes.
///
/// `relative_path` is matched against entry names with the synthetic
/// `package/` directory stripped. Returns `Ok(None)` when no entry
/// matches — file-not-found, distinct from an empty file.
///
/// # Errors
///
/// Any fatal parse error from the entry walk: [`Error::OutOfBounds`],
/// [`Error::PaxFormat`], or [`Error::Decode`].
pub fn extract_file(decoded: &[u8], relative_path: &str) -> Result<Option<String>> {
    read::extract_from(decoded, relative_path)
}
