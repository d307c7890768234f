//! Text decoding for archive metadata and content.
//!
//! Two decoders live here. PAX extended-header blocks are UTF-8 per
//! POSIX and go through [`decode_utf8`]; everything else — fixed-width
//! header fields and extracted file content — uses the byte-per-character
//! [`latin1_string`] fast path, which cannot fail and therefore cannot
//! reject binary content.

use crate::{Error, Result};

/// Decodes bytes one per character (ISO-8859-1).
///
/// Each byte maps to the Unicode scalar value of the same number, so the
/// original bytes are always recoverable from the result.
pub fn latin1_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Decodes a byte sequence as UTF-8 with explicit sequence validation.
///
/// Multi-byte rules: a lead byte in `0xC2..=0xDF` consumes one
/// continuation byte, `0xE0..=0xEF` two, and `0xF0..=0xF7` three.
/// Decoded codepoints are emitted as native `char` scalar values — this
/// implementation never produces UTF-16 surrogate pairs, since Rust
/// strings are not built from 16-bit code units.
///
/// # Errors
///
/// [`Error::Decode`] when a continuation byte is required but the input
/// ends, when a lead byte matches no recognized range, or when the
/// decoded codepoint exceeds U+10FFFF or lands in the surrogate range
/// (neither is a valid `char`).
pub fn decode_utf8(bytes: &[u8]) -> Result<String> {
    let mut out = String::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        let lead = bytes[i];
        i += 1;

        let (mut codepoint, continuations) = match lead {
            0x00..=0x7F => (u32::from(lead), 0),
            0xC2..=0xDF => (u32::from(lead & 0x1F), 1),
            0xE0..=0xEF => (u32::from(lead & 0x0F), 2),
            0xF0..=0xF7 => (u32::from(lead & 0x07), 3),
            _ => {
                return Err(Error::Decode(format!(
                    "unrecognized lead byte {lead:#04x}"
                )));
            }
        };

        for _ in 0..continuations {
            let Some(&next) = bytes.get(i) else {
                return Err(Error::Decode(format!(
                    "incomplete {}-byte sequence",
                    continuations + 1
                )));
            };
            i += 1;
            codepoint = (codepoint << 6) | u32::from(next & 0x3F);
        }

        if codepoint > 0x10FFFF {
            return Err(Error::Decode(format!(
                "codepoint {codepoint:#x} exceeds U+10FFFF"
            )));
        }
        let ch = char::from_u32(codepoint).ok_or_else(|| {
            Error::Decode(format!(
                "codepoint {codepoint:#x} is not a Unicode scalar value"
            ))
        })?;
        out.push(ch);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin1_maps_every_byte() {
        assert_eq!(latin1_string(b"hello"), "hello");
        assert_eq!(latin1_string(&[0xFF, 0xFE, 0x00]), "\u{FF}\u{FE}\u{0}");
    }

    #[test]
    fn ascii_passes_through() {
        assert_eq!(decode_utf8(b"plain ascii").unwrap(), "plain ascii");
    }

    #[test]
    fn two_and_three_byte_sequences() {
        // U+00E9 (é) and U+20AC (€)
        assert_eq!(decode_utf8(&[0xC3, 0xA9]).unwrap(), "é");
        assert_eq!(decode_utf8(&[0xE2, 0x82, 0xAC]).unwrap(), "€");
    }

    #[test]
    fn four_byte_sequence_is_one_scalar_not_a_surrogate_pair() {
        // U+1F600
        let decoded = decode_utf8(&[0xF0, 0x9F, 0x98, 0x80]).unwrap();
        assert_eq!(decoded.chars().count(), 1);
        assert_eq!(decoded.chars().next(), Some('\u{1F600}'));
    }

    #[test]
    fn truncated_sequence_fails() {
        assert!(matches!(decode_utf8(&[0xE2, 0x82]), Err(Error::Decode(_))));
    }

    #[test]
    fn stray_continuation_byte_fails() {
        assert!(matches!(decode_utf8(&[0x80]), Err(Error::Decode(_))));
    }

    #[test]
    fn codepoint_beyond_unicode_fails() {
        // 0xF7 0xBF 0xBF 0xBF decodes to 0x1FFFFF
        assert!(matches!(
            decode_utf8(&[0xF7, 0xBF, 0xBF, 0xBF]),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn surrogate_codepoint_fails() {
        // 0xED 0xA0 0x80 decodes to 0xD800
        assert!(matches!(
            decode_utf8(&[0xED, 0xA0, 0x80]),
            Err(Error::Decode(_))
        ));
    }
}
