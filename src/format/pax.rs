//! PAX extended-header records.
//!
//! An extended header block is a sequence of records, each of the form
//! `"<length> <key>=<value>\n"` where `<length>` is the decimal byte
//! length of the whole record, its own digits included. The records in a
//! `'g'` block apply to every entry until a later `'g'` block replaces
//! them; the records in an `'x'` block apply to the single entry that
//! follows.

use crate::format::entry::{TarEntry, parse_decimal};
use crate::format::text;
use crate::{Error, Result};

/// One parsed override value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaxValue {
    /// Free-form text. Fractional numerics stay text so no precision is
    /// lost.
    Text(String),
    /// All-digit values are coerced to integers.
    Integer(u64),
    /// An empty value; removes the target field when applied.
    Absent,
}

impl PaxValue {
    fn classify(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::Absent;
        }
        if raw.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = raw.parse::<u64>() {
                return Self::Integer(n);
            }
        }
        Self::Text(raw.to_string())
    }
}

/// The ordered override set parsed from one extended-header block.
///
/// Archive order is preserved: when the same key appears twice,
/// application walks the list front to back, so the later record wins.
#[derive(Debug, Clone, Default)]
pub struct PaxOverrides {
    records: Vec<(String, PaxValue)>,
}

impl PaxOverrides {
    /// Parses the raw bytes of one extended-header block.
    ///
    /// # Errors
    ///
    /// [`Error::PaxFormat`] when a record does not match the expected
    /// shape — no space after the length, a non-numeric length, a length
    /// that runs past the block, a missing `=` or trailing newline, or a
    /// newline embedded in the value. [`Error::Decode`] when a record is
    /// not valid UTF-8.
    pub fn parse(block: &[u8]) -> Result<Self> {
        let mut records = Vec::new();
        let mut rest = block;

        while !rest.is_empty() {
            let space = rest
                .iter()
                .position(|&b| b == b' ')
                .ok_or_else(|| Error::PaxFormat("record has no length delimiter".into()))?;
            let length = parse_decimal(&text::decode_utf8(&rest[..space])?)
                .ok_or_else(|| Error::PaxFormat("record length is not a decimal number".into()))?
                as usize;
            if length > rest.len() {
                return Err(Error::PaxFormat(format!(
                    "record length {length} runs past the header block"
                )));
            }

            let record = text::decode_utf8(&rest[..length])?;
            let (key, value) = split_record(&record)?;
            records.push((key.to_string(), PaxValue::classify(value)));

            rest = &rest[length..];
        }

        Ok(Self { records })
    }

    /// Number of records in the set.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when the block carried no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates the overrides in archive order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PaxValue)> {
        self.records.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Applies every override to `entry`, in archive order.
    ///
    /// `path` targets the entry's `name` and `linkpath` its `linkname`;
    /// an [`PaxValue::Absent`] value clears the target field. Keys with
    /// no corresponding header field are ignored.
    pub fn apply(&self, entry: &mut TarEntry) {
        for (key, value) in &self.records {
            apply_record(entry, key, value);
        }
    }
}

fn apply_record(entry: &mut TarEntry, key: &str, value: &PaxValue) {
    match key {
        // `path` overrides the name assembled from the header block,
        // USTAR prefix included.
        "path" => set_text(&mut entry.name, value),
        "linkpath" => set_text(&mut entry.linkname, value),
        "uid" => set_number(&mut entry.uid, value),
        "gid" => set_number(&mut entry.gid, value),
        "mtime" => set_number(&mut entry.mtime, value),
        "uname" => set_optional_text(&mut entry.uname, value),
        "gname" => set_optional_text(&mut entry.gname, value),
        "size" => {
            if let PaxValue::Integer(n) = value {
                entry.size = *n;
            }
        }
        _ => {}
    }
}

fn set_text(slot: &mut String, value: &PaxValue) {
    match value {
        PaxValue::Text(s) => *slot = s.clone(),
        PaxValue::Integer(n) => *slot = n.to_string(),
        PaxValue::Absent => slot.clear(),
    }
}

fn set_optional_text(slot: &mut Option<String>, value: &PaxValue) {
    match value {
        PaxValue::Text(s) => *slot = Some(s.clone()),
        PaxValue::Integer(n) => *slot = Some(n.to_string()),
        PaxValue::Absent => *slot = None,
    }
}

/// Only integral values land in numeric fields; text values (fractional
/// timestamps and the like) leave the header value in place.
fn set_number(slot: &mut Option<u64>, value: &PaxValue) {
    match value {
        PaxValue::Integer(n) => *slot = Some(*n),
        PaxValue::Text(_) => {}
        PaxValue::Absent => *slot = None,
    }
}

/// Validates one record against the shape `"<digits> <key>=<value>\n"`
/// and returns the key and value slices. The value must not contain a
/// newline; the key must be non-empty and free of `=`.
fn split_record(record: &str) -> Result<(&str, &str)> {
    let malformed = || Error::PaxFormat(format!("malformed record {record:?}"));

    let body = record.strip_suffix('\n').ok_or_else(malformed)?;
    let (length, pair) = body.split_once(' ').ok_or_else(malformed)?;
    if length.is_empty() || !length.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let (key, value) = pair.split_once('=').ok_or_else(malformed)?;
    if key.is_empty() || value.contains('\n') {
        return Err(malformed());
    }
    Ok((key, value))
}
