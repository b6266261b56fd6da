//! Validating UTF-8 prefix scanner.
//!
//! The scanner never fails: malformed input ends the recognized-valid prefix
//! and the result records the reason. The counts are the contract; the stop
//! reason is advisory diagnostics and must not drive control flow.

use crate::classify::{codepoint_size, is_continuation};

/// The reason a UTF-8 scan stopped.
///
/// Advisory only: correct callers decide success from the counts in
/// [`Utf8Scan`], never from this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScanStop {
    /// A NUL terminator byte was reached.
    Terminator,
    /// The end of the input slice was reached at a codepoint boundary.
    EndOfInput,
    /// The next codepoint would not fit entirely within the byte cap.
    ByteLimit,
    /// A byte expected to start a codepoint matches no leading-byte pattern.
    BadLeadingByte,
    /// A byte inside a multi-byte codepoint is not a continuation byte.
    BadContinuationByte,
    /// The input ends (NUL or slice end) inside a multi-byte codepoint.
    TruncatedCodepoint,
}

/// Result of a UTF-8 prefix scan.
///
/// The two counts are always consistent: `bytes` is the exact prefix length
/// whose decoding yields exactly `chars` codepoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf8Scan {
    /// Count of well-formed codepoints in the valid prefix.
    pub chars: usize,
    /// Count of bytes the valid prefix occupies.
    pub bytes: usize,
    /// Why the scan stopped.
    pub stop: ScanStop,
}

impl Utf8Scan {
    /// Returns `true` iff the scan ended at a terminator, the end of input,
    /// or the byte cap, i.e. without encountering a malformed byte.
    #[inline]
    #[must_use]
    pub const fn is_clean(self) -> bool {
        matches!(
            self.stop,
            ScanStop::Terminator | ScanStop::EndOfInput | ScanStop::ByteLimit
        )
    }
}

/// Scan `text` for its longest well-formed UTF-8 prefix.
///
/// The scan stops at the first NUL byte, at the end of the slice, at the
/// first malformed byte, or once `max_bytes` is exhausted, whichever comes
/// first. `max_bytes` is an exclusive upper bound on bytes consumed: a
/// codepoint is counted only if its whole encoding fits within the cap, so
/// `result.bytes <= max_bytes` always holds and no codepoint is partially
/// consumed. `None` means unbounded.
#[must_use]
pub fn utf8_scan(text: &[u8], max_bytes: Option<usize>) -> Utf8Scan {
    #[cfg(feature = "simdutf8")]
    if max_bytes.is_none() {
        if let Some(scan) = strict_fast_path(text) {
            return scan;
        }
    }

    scalar_scan(text, max_bytes)
}

/// Count the codepoints in the longest well-formed UTF-8 prefix of `text`.
///
/// Equivalent to `utf8_scan(text, None).chars`.
#[inline]
#[must_use]
pub fn utf8_length(text: &[u8]) -> usize {
    utf8_scan(text, None).chars
}

fn scalar_scan(text: &[u8], max_bytes: Option<usize>) -> Utf8Scan {
    let mut pos = 0;
    let mut chars = 0;

    let stop = loop {
        let Some(&lead) = text.get(pos) else {
            break ScanStop::EndOfInput;
        };

        if lead == 0 {
            break ScanStop::Terminator;
        }

        let Some(size) = codepoint_size(lead) else {
            break ScanStop::BadLeadingByte;
        };

        if let Some(cap) = max_bytes {
            if pos + size > cap {
                break ScanStop::ByteLimit;
            }
        }

        if let Some(stop) = check_continuations(text, pos, size) {
            break stop;
        }

        pos += size;
        chars += 1;

        if let Some(cap) = max_bytes {
            if pos >= cap {
                break ScanStop::ByteLimit;
            }
        }
    };

    Utf8Scan {
        chars,
        bytes: pos,
        stop,
    }
}

fn check_continuations(text: &[u8], pos: usize, size: usize) -> Option<ScanStop> {
    for n in 1..size {
        match text.get(pos + n) {
            // NUL (or slice end) in the middle of the codepoint.
            None | Some(&0) => return Some(ScanStop::TruncatedCodepoint),
            Some(&b) if !is_continuation(b) => return Some(ScanStop::BadContinuationByte),
            Some(_) => {}
        }
    }

    None
}

/// Whole-buffer fast path: strict UTF-8 is a subset of shape-valid UTF-8, so
/// a successful SIMD validation lets us count codepoints by counting
/// non-continuation bytes. Any failure falls back to the scalar walk.
#[cfg(feature = "simdutf8")]
fn strict_fast_path(text: &[u8]) -> Option<Utf8Scan> {
    let (prefix, stop) = match text.iter().position(|&b| b == 0) {
        Some(nul) => (&text[..nul], ScanStop::Terminator),
        None => (text, ScanStop::EndOfInput),
    };

    if simdutf8::basic::from_utf8(prefix).is_err() {
        return None;
    }

    let chars = prefix.iter().filter(|&&b| !is_continuation(b)).count();
    Some(Utf8Scan {
        chars,
        bytes: prefix.len(),
        stop,
    })
}
