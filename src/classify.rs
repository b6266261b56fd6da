//! Leading-byte classification for UTF-8 codepoints.

/// Largest rune value encodable in a four-byte UTF-8 sequence.
///
/// Shape validation admits the full 21-bit range, which is a superset of the
/// assigned Unicode range (U+10FFFF).
pub const MAX_RUNE: u32 = 0x001f_ffff;

pub(crate) const ONE_BYTE_MASK: u8 = 0x80;
pub(crate) const ONE_BYTE_BITS: u8 = 0x00;
pub(crate) const TWO_BYTE_MASK: u8 = 0xe0;
pub(crate) const TWO_BYTE_BITS: u8 = 0xc0;
pub(crate) const THREE_BYTE_MASK: u8 = 0xf0;
pub(crate) const THREE_BYTE_BITS: u8 = 0xe0;
pub(crate) const FOUR_BYTE_MASK: u8 = 0xf8;
pub(crate) const FOUR_BYTE_BITS: u8 = 0xf0;
pub(crate) const CONTINUATION_MASK: u8 = 0xc0;
pub(crate) const CONTINUATION_BITS: u8 = 0x80;

/// Returns the encoded length (1..=4) implied by a UTF-8 leading byte.
///
/// Returns `None` if `byte` matches none of the four leading-byte patterns,
/// e.g. a stray continuation byte (`10xxxxxx`) or a `11111xxx` byte.
#[inline]
#[must_use]
pub const fn codepoint_size(byte: u8) -> Option<usize> {
    if byte & ONE_BYTE_MASK == ONE_BYTE_BITS {
        return Some(1);
    }

    if byte & TWO_BYTE_MASK == TWO_BYTE_BITS {
        return Some(2);
    }

    if byte & THREE_BYTE_MASK == THREE_BYTE_BITS {
        return Some(3);
    }

    if byte & FOUR_BYTE_MASK == FOUR_BYTE_BITS {
        return Some(4);
    }

    None
}

/// Returns `true` iff `byte` matches the continuation pattern `10xxxxxx`.
#[inline]
pub(crate) const fn is_continuation(byte: u8) -> bool {
    byte & CONTINUATION_MASK == CONTINUATION_BITS
}
