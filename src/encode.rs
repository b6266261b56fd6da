//! UTF-32 to UTF-8 re-encoding.

use alloc::vec::Vec;

use crate::classify::{
    CONTINUATION_BITS, FOUR_BYTE_BITS, MAX_RUNE, THREE_BYTE_BITS, TWO_BYTE_BITS,
};
use crate::error::{ErrorCode, RuneError};

const SIX_BITS: u32 = 0x3f;

/// Encode the runes of `text` (up to the first zero rune or the end of the
/// slice) into UTF-8 bytes.
///
/// The output carries no trailing NUL; the vector's length is the byte count.
/// Decoding well-formed UTF-8 and re-encoding the result reproduces the
/// original bytes exactly.
///
/// # Errors
///
/// Returns [`ErrorCode::RuneOutOfRange`] at the offending rune's index if a
/// rune exceeds [`MAX_RUNE`], the four-byte encoding ceiling.
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
#[allow(clippy::cast_possible_truncation)]
pub fn utf32_to_utf8(text: &[u32]) -> Result<Vec<u8>, RuneError> {
    let mut out = Vec::new();

    for (n, &rune) in text.iter().enumerate() {
        if rune == 0 {
            break;
        }

        if rune <= 0x7f {
            out.push(rune as u8);
        } else if rune <= 0x07ff {
            out.push(TWO_BYTE_BITS | (rune >> 6) as u8);
            out.push(continuation(rune));
        } else if rune <= 0xffff {
            out.push(THREE_BYTE_BITS | (rune >> 12) as u8);
            out.push(continuation(rune >> 6));
            out.push(continuation(rune));
        } else if rune <= MAX_RUNE {
            out.push(FOUR_BYTE_BITS | (rune >> 18) as u8);
            out.push(continuation(rune >> 12));
            out.push(continuation(rune >> 6));
            out.push(continuation(rune));
        } else {
            return Err(RuneError::new(ErrorCode::RuneOutOfRange, n));
        }
    }

    Ok(out)
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn continuation(bits: u32) -> u8 {
    CONTINUATION_BITS | (bits & SIX_BITS) as u8
}
