//! Multi-member gzip decoding.
//!
//! A registry tarball is an RFC 1952 gzip stream that may contain
//! several independently-terminated members back to back: producers
//! split output across windowed members but never interleave them, so
//! the logically correct reconstruction is always the concatenation of
//! every member's payload in encounter order.

use std::io::Read;

use flate2::bufread::GzDecoder;

use crate::{Error, Result};

/// Decompresses every gzip member in `data` and concatenates the
/// payloads in order.
///
/// Decoding starts at offset 0 and consumes one member at a time; each
/// member's consumed byte count comes straight from the decoder, and the
/// loop repeats while unconsumed input remains.
///
/// # Errors
///
/// [`Error::Decompression`] when the input is empty or any member has a
/// malformed header, deflate stream, or trailer. The whole decode
/// aborts; no partial output is returned.
pub fn decompress_members(data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Err(Error::Decompression {
            offset: 0,
            reason: "empty gzip stream".into(),
        });
    }

    let mut output = Vec::new();
    let mut members = 0usize;
    let mut remaining = data;

    loop {
        let offset = data.len() - remaining.len();
        let mut decoder = GzDecoder::new(remaining);
        decoder
            .read_to_end(&mut output)
            .map_err(|source| Error::Decompression {
                offset,
                reason: source.to_string(),
            })?;
        members += 1;

        // The bufread decoder consumes exactly one member from the input
        // slice, trailer included; whatever is left belongs to the next.
        remaining = decoder.into_inner();
        if remaining.is_empty() {
            break;
        }
    }

    log::debug!("decoded {members} gzip member(s) into {} bytes", output.len());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    fn compress(data: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn single_member_roundtrip() {
        let raw = compress(b"one lonely member");
        assert_eq!(decompress_members(&raw).unwrap(), b"one lonely member");
    }

    #[test]
    fn members_concatenate_in_order() {
        let mut raw = compress(b"first ");
        raw.extend_from_slice(&compress(b"second "));
        raw.extend_from_slice(&compress(b"third"));
        assert_eq!(decompress_members(&raw).unwrap(), b"first second third");
    }

    #[test]
    fn empty_payload_member_is_valid() {
        let mut raw = compress(b"");
        raw.extend_from_slice(&compress(b"tail"));
        assert_eq!(decompress_members(&raw).unwrap(), b"tail");
    }

    #[test]
    fn empty_input_fails() {
        assert!(matches!(
            decompress_members(b""),
            Err(Error::Decompression { offset: 0, .. })
        ));
    }

    #[test]
    fn garbage_input_fails() {
        let err = decompress_members(b"definitely not a gzip stream").unwrap_err();
        assert!(matches!(err, Error::Decompression { offset: 0, .. }));
    }

    #[test]
    fn trailing_garbage_fails_with_member_offset() {
        let mut raw = compress(b"valid payload");
        let good_len = raw.len();
        raw.extend_from_slice(b"trailing garbage bytes");

        match decompress_members(&raw).unwrap_err() {
            Error::Decompression { offset, .. } => assert_eq!(offset, good_len),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
