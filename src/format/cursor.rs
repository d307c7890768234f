//! Sequential byte cursor over a decoded archive buffer.

use crate::format::text;
use crate::{Error, Result};

/// A position-tracked reader over an immutable byte buffer.
///
/// The cursor only ever moves forward during a decode pass, and it is
/// owned exclusively by one pass — two walks over the same buffer get
/// two independent cursors.
///
/// Reads that would run past the end of the buffer fail with
/// [`Error::OutOfBounds`] rather than returning partial or zero-filled
/// data, so a truncated archive surfaces as a hard error at the exact
/// read that overran.
pub struct ByteCursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl std::fmt::Debug for ByteCursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteCursor")
            .field("position", &self.position)
            .field("len", &self.data.len())
            .finish()
    }
}

impl<'a> ByteCursor<'a> {
    /// Creates a cursor positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Total buffer length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true when the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current byte offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves the cursor to an absolute offset.
    ///
    /// The offset may point past the end of the buffer; the overrun is
    /// reported by the next read instead.
    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Advances the cursor by `count` bytes without reading them.
    pub fn skip(&mut self, count: usize) {
        self.position = self.position.saturating_add(count);
    }

    /// Bytes between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Takes the next `count` bytes and advances.
    fn take(&mut self, count: usize) -> Result<&'a [u8]> {
        let end = self
            .position
            .checked_add(count)
            .filter(|&end| end <= self.data.len())
            .ok_or(Error::OutOfBounds {
                offset: self.position,
                requested: count,
                len: self.data.len(),
            })?;
        let slice = &self.data[self.position..end];
        self.position = end;
        Ok(slice)
    }

    /// Reads `count` bytes as single-byte characters, stopping at the
    /// first NUL. The cursor advances the full `count` bytes either way.
    pub fn read_string(&mut self, count: usize) -> Result<String> {
        let raw = self.take(count)?;
        let terminated = match raw.iter().position(|&b| b == 0) {
            Some(nul) => &raw[..nul],
            None => raw,
        };
        Ok(text::latin1_string(terminated))
    }

    /// Returns an owned copy of the next `count` bytes and advances.
    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        Ok(self.take(count)?.to_vec())
    }

    /// Reads 4 bytes as a little-endian unsigned integer without
    /// advancing the cursor.
    pub fn peek_u32_le(&self) -> Result<u32> {
        let end = self
            .position
            .checked_add(4)
            .filter(|&end| end <= self.data.len())
            .ok_or(Error::OutOfBounds {
                offset: self.position,
                requested: 4,
                len: self.data.len(),
            })?;
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&self.data[self.position..end]);
        Ok(u32::from_le_bytes(bytes))
    }
}
