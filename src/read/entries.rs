//! Forward-only TAR entry iteration.
//!
//! The iterator walks the decoded buffer one 512-byte block at a time:
//! decode a header, branch on the type flag, read or skip the padded
//! content region, merge any pending PAX overrides, yield. Extended
//! header entries (`'g'`/`'x'`) are folded into the entries that follow
//! them and never surface.

use crate::Result;
use crate::format::BLOCK_SIZE;
use crate::format::cursor::ByteCursor;
use crate::format::entry::{EntryType, TarEntry, parse_decimal, parse_octal};
use crate::format::pax::PaxOverrides;

/// Iterator over the entries of a decoded TAR buffer.
///
/// Yields `Result<TarEntry>`: a fatal error (out-of-bounds read, bad PAX
/// record) is yielded once and ends the iteration — there is no partial
/// entry and nothing is retried.
#[derive(Debug)]
pub struct Entries<'a> {
    cursor: ByteCursor<'a>,
    /// Overrides from the most recent `'g'` block; applies to every
    /// entry until a later `'g'` block replaces it.
    global: Option<PaxOverrides>,
    done: bool,
}

impl<'a> Entries<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self {
            cursor: ByteCursor::new(data),
            global: None,
            done: false,
        }
    }

    /// End-of-archive test, checked before every header read: fewer than
    /// 4 bytes remain, or the next 4 bytes read as a little-endian zero.
    ///
    /// This is a simplified marker every registry producer satisfies —
    /// deliberately weaker than the TAR standard's two-all-zero-block
    /// check, which could disagree with it on archives this layout
    /// accepts.
    fn has_next(&self) -> bool {
        self.cursor.remaining() >= 4 && self.cursor.peek_u32_le().is_ok_and(|word| word != 0)
    }

    /// Reads header entries until a real one turns up.
    ///
    /// `'g'`/`'x'` blocks are consumed in a loop rather than by
    /// recursion, so a long run of override blocks cannot grow the
    /// stack. Returns `Ok(None)` when the end marker arrives first.
    fn read_entry(&mut self) -> Result<Option<TarEntry>> {
        let mut pending: Option<PaxOverrides> = None;

        while self.has_next() {
            let header_start = self.cursor.position();
            let data_start = header_start + BLOCK_SIZE;

            let mut entry = self.read_header()?;

            // Header padding inside the 512-byte block is implicit: the
            // content region starts at the next block boundary no matter
            // how much of the header was meaningful.
            self.cursor.set_position(data_start);

            match entry.entry_type {
                EntryType::Regular => {
                    entry.content = self.cursor.read_bytes(entry.size as usize)?;
                }
                EntryType::GlobalExtendedHeader => {
                    let block = self.cursor.read_bytes(entry.size as usize)?;
                    let overrides = PaxOverrides::parse(&block)?;
                    log::debug!("global extended header with {} override(s)", overrides.len());
                    self.global = Some(overrides);
                }
                EntryType::ExtendedHeader => {
                    let block = self.cursor.read_bytes(entry.size as usize)?;
                    // A second x block before any real entry replaces the
                    // first.
                    pending = Some(PaxOverrides::parse(&block)?);
                }
                // Links, directories, specials, and unknown flags carry
                // no readable content; their declared region is skipped.
                _ => {}
            }

            self.skip_to_next_block(data_start, entry.size);

            if entry.entry_type.is_extended_header() {
                continue;
            }

            if let Some(global) = &self.global {
                global.apply(&mut entry);
            }
            // Per-entry overrides are applied second, so they win over
            // global ones on the same field.
            if let Some(local) = pending.take() {
                local.apply(&mut entry);
            }
            return Ok(Some(entry));
        }

        if pending.is_some() {
            log::warn!("discarding a per-entry extended header with no entry after it");
        }
        Ok(None)
    }

    /// Decodes the fixed-width fields of one 512-byte header block, in
    /// on-disk order.
    fn read_header(&mut self) -> Result<TarEntry> {
        let cursor = &mut self.cursor;

        let name = cursor.read_string(100)?;
        let mode = cursor.read_string(8)?;
        let uid = parse_decimal(&cursor.read_string(8)?);
        let gid = parse_decimal(&cursor.read_string(8)?);
        let size = parse_octal(&cursor.read_string(12)?).unwrap_or(0);
        let mtime = parse_octal(&cursor.read_string(12)?);
        let checksum = parse_decimal(&cursor.read_string(8)?);
        let entry_type = EntryType::from_flag(&cursor.read_string(1)?);
        let linkname = cursor.read_string(100)?;
        let ustar_magic = cursor.read_string(6)?;

        let mut entry = TarEntry {
            name,
            mode,
            uid,
            gid,
            size,
            mtime,
            checksum,
            entry_type,
            linkname,
            ustar_magic,
            version: None,
            uname: None,
            gname: None,
            devmajor: None,
            devminor: None,
            prefix: None,
            content: Vec::new(),
        };

        if entry.ustar_magic.contains("ustar") {
            entry.version = Some(cursor.read_string(2)?);
            entry.uname = Some(cursor.read_string(32)?);
            entry.gname = Some(cursor.read_string(32)?);
            entry.devmajor = parse_decimal(&cursor.read_string(8)?);
            entry.devminor = parse_decimal(&cursor.read_string(8)?);
            let prefix = cursor.read_string(155)?;
            if !prefix.is_empty() {
                entry.name = format!("{}/{}", prefix, entry.name);
            }
            entry.prefix = Some(prefix);
        }

        Ok(entry)
    }

    /// Positions the cursor at the first block boundary past the content
    /// region; content is zero-padded up to a multiple of the block
    /// size.
    fn skip_to_next_block(&mut self, data_start: usize, size: u64) {
        let mut data_end = data_start + size as usize;
        let spill = size as usize % BLOCK_SIZE;
        if spill != 0 {
            data_end += BLOCK_SIZE - spill;
        }
        self.cursor.set_position(data_end);
    }
}

impl Iterator for Entries<'_> {
    type Item = Result<TarEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_entry() {
            Ok(Some(entry)) => Some(Ok(entry)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer_has_no_entries() {
        assert!(Entries::new(&[]).next().is_none());
    }

    #[test]
    fn zero_block_has_no_entries() {
        let block = vec![0u8; BLOCK_SIZE];
        assert!(Entries::new(&block).next().is_none());
    }

    #[test]
    fn iteration_stays_done_after_the_end() {
        let mut entries = Entries::new(&[]);
        assert!(entries.next().is_none());
        assert!(entries.next().is_none());
    }
}
