//! TAR entry metadata.

/// Entry type flag from a TAR header.
///
/// The flag is stored as a single character. [`Regular`] covers both the
/// POSIX `'0'` flag and the pre-POSIX NUL flag, which reads back as an
/// empty field.
///
/// [`Regular`]: EntryType::Regular
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// A regular file; the only type whose content region is read.
    Regular,
    /// A hard link to another archived file.
    HardLink,
    /// A symbolic link; the target lives in `linkname`.
    Symlink,
    /// A character special device.
    CharSpecial,
    /// A block special device.
    BlockSpecial,
    /// A directory.
    Directory,
    /// A FIFO special file.
    Fifo,
    /// Reserved by POSIX.
    Reserved,
    /// A global PAX extended header (`'g'`); consumed by the iterator,
    /// never yielded.
    GlobalExtendedHeader,
    /// A per-entry PAX extended header (`'x'`); consumed by the
    /// iterator, never yielded.
    ExtendedHeader,
    /// Any flag this parser does not recognize. The content region is
    /// skipped, not read.
    Unknown(char),
}

impl EntryType {
    /// Maps the one-character flag field to an entry type.
    pub fn from_flag(flag: &str) -> Self {
        match flag {
            "0" | "" => Self::Regular,
            "1" => Self::HardLink,
            "2" => Self::Symlink,
            "3" => Self::CharSpecial,
            "4" => Self::BlockSpecial,
            "5" => Self::Directory,
            "6" => Self::Fifo,
            "7" => Self::Reserved,
            "g" => Self::GlobalExtendedHeader,
            "x" => Self::ExtendedHeader,
            other => Self::Unknown(other.chars().next().unwrap_or('\0')),
        }
    }

    /// True for the `g`/`x` override-carrying entries.
    pub fn is_extended_header(self) -> bool {
        matches!(self, Self::GlobalExtendedHeader | Self::ExtendedHeader)
    }
}

/// One archive member's metadata plus content.
///
/// An entry is constructed fresh for each iteration step and is fully
/// populated — USTAR prefix concatenation and PAX overrides included —
/// before the iterator hands it out.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct TarEntry {
    /// The entry's path inside the archive.
    ///
    /// For USTAR headers with a non-empty name prefix this is
    /// `prefix + "/" + name`; a PAX `path` override replaces the whole
    /// thing.
    pub name: String,
    /// Permission bits as the octal text stored in the header. The
    /// field is carried verbatim, never numerically interpreted.
    pub mode: String,
    /// Owner user id. `None` when the field is blank or unparsable, or
    /// after a PAX null-delete.
    pub uid: Option<u64>,
    /// Owner group id; same conventions as `uid`.
    pub gid: Option<u64>,
    /// Content length in bytes, excluding block padding.
    pub size: u64,
    /// Modification time in seconds, parsed from octal text.
    pub mtime: Option<u64>,
    /// Header checksum as stored (decimal text). Never validated.
    pub checksum: Option<u64>,
    /// The type flag.
    pub entry_type: EntryType,
    /// Link target for hard and symbolic links.
    pub linkname: String,
    /// The magic field; USTAR extension fields are present when it
    /// contains `"ustar"`.
    pub ustar_magic: String,
    /// USTAR version field. `None` for classic headers.
    pub version: Option<String>,
    /// Owner user name (USTAR only).
    pub uname: Option<String>,
    /// Owner group name (USTAR only).
    pub gname: Option<String>,
    /// Device major number (USTAR only).
    pub devmajor: Option<u64>,
    /// Device minor number (USTAR only).
    pub devminor: Option<u64>,
    /// Name prefix as stored (USTAR only). Already folded into `name`.
    pub prefix: Option<String>,
    /// Raw content bytes. Empty for every entry type except regular
    /// files; `content.len() == size` for those.
    pub content: Vec<u8>,
}

impl TarEntry {
    /// Returns true if this entry is a regular file.
    pub fn is_file(&self) -> bool {
        self.entry_type == EntryType::Regular
    }
}

/// Parses a decimal numeric field the way header producers write them:
/// leading whitespace skipped, digits taken until the first non-digit.
///
/// Returns `None` when nothing numeric is present or the value
/// overflows. The decimal radix is intentional for `uid`, `gid`,
/// `checksum`, and the device numbers; only `size` and `mtime` are
/// octal.
pub(crate) fn parse_decimal(field: &str) -> Option<u64> {
    parse_radix(field, 10)
}

/// Parses an octal numeric field (`size`, `mtime`).
pub(crate) fn parse_octal(field: &str) -> Option<u64> {
    parse_radix(field, 8)
}

fn parse_radix(field: &str, radix: u32) -> Option<u64> {
    let trimmed = field.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(trimmed.len());
    let digits = &trimmed[..end];
    if digits.is_empty() {
        return None;
    }
    u64::from_str_radix(digits, radix).ok()
}
