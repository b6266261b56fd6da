//! UTF-8 to UTF-32 decoding.

use crate::classify::{
    codepoint_size, CONTINUATION_MASK, FOUR_BYTE_MASK, ONE_BYTE_MASK, THREE_BYTE_MASK,
    TWO_BYTE_MASK,
};
use crate::error::{ErrorCode, RuneError};
use crate::scan::utf8_length;

/// Decode the longest well-formed UTF-8 prefix of `text` into `buffer` as
/// UTF-32, writing a zero terminator codepoint after the decoded runes.
///
/// The prefix is sized with an unbounded [`crate::utf8_scan`]; `buffer` must
/// hold at least that codepoint count plus one slot for the terminator.
/// Returns the count of decoded codepoints, excluding the terminator.
///
/// # Errors
///
/// Returns [`ErrorCode::OutputBufferTooSmall`] (offset 0) if `buffer` is too
/// small; nothing is written in that case. Returns
/// [`ErrorCode::InvalidLeadingByte`] if the decode walk meets a byte the
/// sizing scan did not validate — both walks share one validation rule, so
/// this cannot happen for an unchanged input.
pub fn utf8_to_utf32(text: &[u8], buffer: &mut [u32]) -> Result<usize, RuneError> {
    let chars = utf8_length(text);

    if buffer.len() < chars + 1 {
        return Err(RuneError::new(ErrorCode::OutputBufferTooSmall, 0));
    }

    decode_prefix(text, chars, buffer)?;
    buffer[chars] = 0;
    Ok(chars)
}

/// Decode the longest well-formed UTF-8 prefix of `text` into a new vector,
/// terminator codepoint included.
///
/// The vector's last element is always `0`, so it interoperates with
/// [`crate::utf32_length`].
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
#[must_use]
pub fn utf8_to_utf32_vec(text: &[u8]) -> alloc::vec::Vec<u32> {
    let chars = utf8_length(text);
    let mut out = alloc::vec![0_u32; chars + 1];

    let decoded = decode_prefix(text, chars, &mut out);
    debug_assert!(decoded.is_ok(), "sizing scan already validated the prefix");

    out
}

/// Materialize `chars` codepoints from the validated prefix of `text`.
///
/// The leading byte's low bits land in the high bits of the rune; each
/// continuation byte contributes its low six bits below them.
fn decode_prefix(text: &[u8], chars: usize, out: &mut [u32]) -> Result<(), RuneError> {
    let mut pos = 0;

    for slot in out.iter_mut().take(chars) {
        let lead = text[pos];
        let size = codepoint_size(lead)
            .ok_or_else(|| RuneError::new(ErrorCode::InvalidLeadingByte, pos))?;

        let mut rune = u32::from(lead & lead_payload_mask(size));
        for n in 1..size {
            rune = rune << 6 | u32::from(text[pos + n] & !CONTINUATION_MASK);
        }

        *slot = rune;
        pos += size;
    }

    Ok(())
}

const fn lead_payload_mask(size: usize) -> u8 {
    match size {
        1 => !ONE_BYTE_MASK,
        2 => !TWO_BYTE_MASK,
        3 => !THREE_BYTE_MASK,
        _ => !FOUR_BYTE_MASK,
    }
}
