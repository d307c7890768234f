//! Shared test utilities for integration tests.
//!
//! Fixture archives are built in memory, block by block, so every test
//! controls the exact bytes the parser sees.
//!
//! Note: `#![allow(dead_code)]` is required because each integration
//! test file compiles as a separate crate and may only use a subset of
//! these helpers.

#![allow(dead_code)]

use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;

/// Size of one TAR block.
pub const BLOCK: usize = 512;

fn write_field(dest: &mut [u8], value: &[u8]) {
    let n = value.len().min(dest.len());
    dest[..n].copy_from_slice(&value[..n]);
}

/// Builds one classic (pre-POSIX) header block. Numeric fields are
/// rendered the way common producers write them: zero-padded octal,
/// NUL-terminated.
pub fn classic_header(name: &str, type_flag: u8, size: u64) -> Vec<u8> {
    let mut block = vec![0u8; BLOCK];
    write_field(&mut block[0..100], name.as_bytes());
    write_field(&mut block[100..108], b"0000644");
    write_field(&mut block[108..116], b"0000000");
    write_field(&mut block[116..124], b"0000000");
    write_field(&mut block[124..136], format!("{size:011o}").as_bytes());
    write_field(&mut block[136..148], b"00000000000");
    write_field(&mut block[148..156], b"0006044");
    block[156] = type_flag;
    block
}

/// Builds a USTAR header: classic fields plus magic, version, owner
/// names, device numbers, and the name prefix.
pub fn ustar_header(prefix: &str, name: &str, type_flag: u8, size: u64) -> Vec<u8> {
    let mut block = classic_header(name, type_flag, size);
    write_field(&mut block[257..263], b"ustar");
    write_field(&mut block[263..265], b"00");
    write_field(&mut block[265..297], b"wheel");
    write_field(&mut block[297..329], b"staff");
    write_field(&mut block[329..337], b"0000000");
    write_field(&mut block[337..345], b"0000000");
    write_field(&mut block[345..500], prefix.as_bytes());
    block
}

/// A symbolic-link header; symlinks carry no content region.
pub fn symlink_header(name: &str, target: &str) -> Vec<u8> {
    let mut block = classic_header(name, b'2', 0);
    write_field(&mut block[157..257], target.as_bytes());
    block
}

/// Appends the zero padding that brings `content` up to the next block
/// boundary.
pub fn content_blocks(content: &[u8]) -> Vec<u8> {
    let mut out = content.to_vec();
    let spill = content.len() % BLOCK;
    if spill != 0 {
        out.resize(out.len() + BLOCK - spill, 0);
    }
    out
}

/// One regular-file entry: header plus padded content.
pub fn file_entry(name: &str, content: &[u8]) -> Vec<u8> {
    let mut out = classic_header(name, b'0', content.len() as u64);
    out.extend_from_slice(&content_blocks(content));
    out
}

/// The end-of-archive marker real producers emit: two all-zero blocks.
pub fn end_marker() -> Vec<u8> {
    vec![0u8; BLOCK * 2]
}

/// A complete uncompressed TAR archive from (name, content) pairs.
pub fn tar_with_files(files: &[(&str, &[u8])]) -> Vec<u8> {
    let mut out = Vec::new();
    for (name, content) in files {
        out.extend_from_slice(&file_entry(name, content));
    }
    out.extend_from_slice(&end_marker());
    out
}

/// One PAX record with its self-including length prefix.
pub fn pax_record(key: &str, value: &str) -> Vec<u8> {
    // The length counts its own digits, the space, "key=value", and the
    // trailing newline; iterate to the fixed point.
    let payload = key.len() + value.len() + 3;
    let mut total = payload + 1;
    while total != payload + total.to_string().len() {
        total = payload + total.to_string().len();
    }
    format!("{total} {key}={value}\n").into_bytes()
}

/// A `'g'` or `'x'` extended-header entry wrapping the given records.
pub fn pax_entry(type_flag: u8, records: &[u8]) -> Vec<u8> {
    let mut out = classic_header("PaxHeaders.0/x", type_flag, records.len() as u64);
    out.extend_from_slice(&content_blocks(records));
    out
}

/// Compresses `data` as a single gzip member.
pub fn gzip_member(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}
