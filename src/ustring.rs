//! An owning, NUL-terminated string of shape-valid UTF-8 bytes.

use alloc::vec::Vec;

use crate::decode::utf8_to_utf32_vec;
use crate::scan::{utf8_scan, Utf8Scan};

/// An owned byte buffer holding a well-formed UTF-8 prefix, with cached
/// codepoint and byte counts.
///
/// Construction scans the input once and keeps only the longest well-formed
/// prefix; anything after the first malformed byte (or NUL) is dropped. The
/// buffer is always NUL-terminated, the counts are always consistent with the
/// buffer, and cloning performs a fresh allocation — a `UString` has exactly
/// one owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UString {
    /// Valid prefix bytes plus a trailing NUL.
    bytes: Vec<u8>,
    /// Cached codepoint count.
    length: usize,
    /// Cached validated byte count, excluding the NUL.
    size: usize,
}

impl UString {
    /// Construct an empty string (a lone NUL byte, both counts zero).
    #[must_use]
    pub fn new() -> Self {
        Self {
            bytes: alloc::vec![0],
            length: 0,
            size: 0,
        }
    }

    /// Scan `text` and copy its longest well-formed UTF-8 prefix.
    #[must_use]
    pub fn from_bytes(text: &[u8]) -> Self {
        let scan = utf8_scan(text, None);

        let mut bytes = Vec::with_capacity(scan.bytes + 1);
        bytes.extend_from_slice(&text[..scan.bytes]);
        bytes.push(0);

        Self {
            bytes,
            length: scan.chars,
            size: scan.bytes,
        }
    }

    /// The cached codepoint count.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// The cached validated byte count, excluding the trailing NUL.
    #[inline]
    #[must_use]
    pub const fn byte_len(&self) -> usize {
        self.size
    }

    /// Returns `true` iff the string holds no codepoints.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The validated bytes, without the trailing NUL.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.size]
    }

    /// The validated bytes including the trailing NUL.
    #[inline]
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes
    }

    /// Borrow the contents as `&str` when they are strict UTF-8.
    ///
    /// Shape-valid bytes may encode surrogates or overlong forms; those
    /// return `None`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(self.as_bytes()).ok()
    }

    /// Decode the contents to UTF-32, terminator codepoint included.
    #[must_use]
    pub fn to_utf32(&self) -> Vec<u32> {
        utf8_to_utf32_vec(self.as_bytes())
    }

    /// Re-scan the owned buffer.
    ///
    /// Always stops at [`crate::ScanStop::Terminator`] with counts equal to
    /// the cached ones; useful for consistency checks.
    #[must_use]
    pub fn scan(&self) -> Utf8Scan {
        utf8_scan(&self.bytes, None)
    }
}

impl Default for UString {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for UString {
    fn from(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }
}

impl From<&[u8]> for UString {
    fn from(text: &[u8]) -> Self {
        Self::from_bytes(text)
    }
}

impl AsRef<[u8]> for UString {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
