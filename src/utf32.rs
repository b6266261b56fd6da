//! Fixed-width codepoint (UTF-32) length scanning.
//!
//! No validation is needed here: any non-zero 32-bit value counts as a rune.

/// Count the runes in `text` before the first zero rune, the cap, or the end
/// of the slice, whichever comes first. `None` means unbounded.
#[must_use]
pub fn utf32_scan(text: &[u32], max_runes: Option<usize>) -> usize {
    let upto = max_runes.map_or(text.len(), |cap| cap.min(text.len()));
    text[..upto]
        .iter()
        .position(|&rune| rune == 0)
        .unwrap_or(upto)
}

/// Count the runes in `text` before the first zero rune.
///
/// Equivalent to `utf32_scan(text, None)`.
#[inline]
#[must_use]
pub fn utf32_length(text: &[u32]) -> usize {
    utf32_scan(text, None)
}
