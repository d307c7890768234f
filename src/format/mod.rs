//! Low-level TAR format parsing.
//!
//! This module holds the pieces the entry iterator is built from: the
//! position-tracked [`cursor::ByteCursor`], the [`entry::TarEntry`]
//! metadata record, the [`pax::PaxOverrides`] extended-header parser, and
//! the [`text`] decoding helpers.

pub mod cursor;
pub mod entry;
pub mod pax;
pub mod text;

/// Size of one TAR block in bytes.
///
/// Every header occupies exactly one block, and content regions are
/// zero-padded so the next header starts on a block boundary.
pub const BLOCK_SIZE: usize = 512;
