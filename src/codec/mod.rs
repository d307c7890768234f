//! Decompression codecs for archive payloads.
//!
//! Registry tarballs only ever arrive gzip-compressed, so [`gzip`] is
//! the single codec here.

pub mod gzip;
