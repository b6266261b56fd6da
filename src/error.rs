use core::fmt;

/// A structured error code identifying the reason an operation was rejected.
///
/// This enum is intentionally stable and string-free to support `no_std` and
/// to remain hot-path friendly. Only the decoder and encoder produce errors;
/// scanning reports malformed input through [`crate::ScanStop`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorCode {
    /// Output buffer cannot hold the decoded codepoints plus the terminator.
    OutputBufferTooSmall,
    /// A byte expected to start a codepoint matches no leading-byte pattern.
    InvalidLeadingByte,
    /// A rune exceeds the four-byte UTF-8 encoding ceiling.
    RuneOutOfRange,
}

/// A decoding or encoding error with a stable code and a position.
///
/// For [`ErrorCode::OutputBufferTooSmall`] the offset is `0`. For byte-level
/// errors `offset` is a byte index into the input; for rune-level errors it
/// is a rune index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuneError {
    /// The error code.
    pub code: ErrorCode,
    /// Position in the input where the error was detected.
    pub offset: usize,
}

impl RuneError {
    /// Construct an error at `offset`.
    #[inline]
    #[must_use]
    pub const fn new(code: ErrorCode, offset: usize) -> Self {
        Self { code, offset }
    }
}

impl fmt::Display for RuneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.code {
            ErrorCode::OutputBufferTooSmall => "output buffer too small",
            ErrorCode::InvalidLeadingByte => "invalid UTF-8 leading byte",
            ErrorCode::RuneOutOfRange => "rune exceeds the 4-byte UTF-8 range",
        };

        write!(f, "unicode conversion failed at {}: {msg}", self.offset)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RuneError {}
