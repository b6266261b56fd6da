//! # rune-scan
//!
//! Strict UTF-8 prefix scanning, codepoint counting, and UTF-32 decoding.
//!
//! ## Design principles
//!
//! - **Malformed input is not an error.**
//!   Scanning never fails: an invalid or truncated tail simply ends the
//!   recognized-valid prefix, and the scan result says how many codepoints and
//!   bytes that prefix holds, plus *why* it ended ([`ScanStop`]).
//! - **Hot-path scanning is allocation-free.**
//!   [`utf8_scan`] and [`utf8_to_utf32`] work entirely on caller-owned
//!   buffers; the core never allocates and never retains a reference.
//! - **Shape validation only.**
//!   A codepoint is accepted when its encoding shape is well-formed: a
//!   recognized leading byte followed by the declared number of continuation
//!   bytes. Surrogates, overlong forms, and values above U+10FFFF are *not*
//!   rejected; callers needing strict Unicode semantics should layer that on
//!   top.
//!
//! ## Termination convention
//!
//! Byte input is conventionally NUL-terminated; a zero byte ends the scan.
//! Because Rust slices carry their length, the end of the slice acts as an
//! implicit terminator as well. UTF-32 output produced by the decoder is
//! zero-codepoint terminated.
//!
//! ## Feature flags
//!
//! - `std` *(default)*: implements `std::error::Error` for [`RuneError`].
//! - `alloc` *(default)*: enables the owned [`UString`] wrapper and the
//!   `Vec`-producing decode/encode helpers.
//! - `serde`: enables serde conversions for [`UString`].
//! - `simdutf8`: enables a SIMD-accelerated fast path for unbounded scans of
//!   strict UTF-8 input (falls back to the scalar walk otherwise).
//!
//! ## `no_std`
//!
//! The crate is `no_std` compatible. Scanning and buffer-based decoding work
//! without `alloc`; owned APIs require `alloc` and an allocator.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod classify;
mod decode;
mod error;
mod scan;
#[cfg(feature = "serde")]
mod serde_impl;
mod utf32;

#[cfg(feature = "alloc")]
mod encode;
#[cfg(feature = "alloc")]
mod ustring;

pub use crate::classify::{codepoint_size, MAX_RUNE};
pub use crate::decode::utf8_to_utf32;
pub use crate::error::{ErrorCode, RuneError};
pub use crate::scan::{utf8_length, utf8_scan, ScanStop, Utf8Scan};
pub use crate::utf32::{utf32_length, utf32_scan};

#[cfg(feature = "alloc")]
pub use crate::decode::utf8_to_utf32_vec;
#[cfg(feature = "alloc")]
pub use crate::encode::utf32_to_utf8;
#[cfg(feature = "alloc")]
pub use crate::ustring::UString;
