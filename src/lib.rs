//! # utf8codec
//!
//! Allocation-free UTF-8 primitives for string types that own their buffers.
//!
//! Every operation is a pure function over a borrowed byte slice: nothing is
//! allocated and no state is kept between calls.
//!
//! ## Quick Start
//!
//! ```
//! use utf8codec::{backtrack, decode_length, encode, encode_length, is_valid, next};
//!
//! // Classify and encode
//! assert_eq!(decode_length(0xE2), Some(3));
//! let mut buf = [0u8; 4];
//! let len = encode(0x20AC, &mut buf);
//! assert_eq!(len, encode_length(0x20AC));
//! assert_eq!(&buf[..len], "€".as_bytes());
//!
//! // Strict validation rejects a truncated sequence...
//! assert!(!is_valid(&buf[..2]));
//!
//! // ...lenient decoding substitutes U+FFFD and moves one byte
//! assert_eq!(next(&buf[..2], 0), Some(('\u{FFFD}', 1)));
//!
//! // Backtracking reports how much of the sequence is missing
//! let found = backtrack(&buf[..2], 2, 0);
//! assert_eq!((found.offset, found.missing), (0, 1));
//! ```
//!
//! ## Features
//!
//! - `std` (default) - `std::error::Error` for [`Utf8Error`]; disable for `no_std`
//! - `serde` - Serialize/deserialize validation errors
//! - `cli` - The `utf8codec` command-line tool

// Use no_std unless std feature is enabled or we're in test mode
#![cfg_attr(not(any(test, feature = "std")), no_std)]

/// UTF-8 classification, encoding, decoding, validation and backtracking.
pub mod utf8;

// =============================================================================
// Public re-exports
// =============================================================================

pub use utf8::{
    backtrack, chars_lossy, decode_code_point, decode_length, decode_sequence, encode,
    encode_code_point, encode_length, is_continuation_byte, is_lead_byte, is_scalar_value,
    is_valid, next, truncation_point, validate_utf8, Backtrack, Utf8Chars, Utf8Error,
    Utf8ErrorKind, MAX_CODE_POINT, REPLACEMENT_CHARACTER,
};
