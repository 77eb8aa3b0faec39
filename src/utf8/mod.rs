//! UTF-8 codec primitives.
//!
//! UTF-8 is a variable-width encoding that uses 1-4 bytes per character:
//!
//! | Bytes | First byte    | Continuation bytes | Code point range     |
//! |-------|---------------|-------------------|----------------------|
//! | 1     | `0xxxxxxx`    | -                 | U+0000 - U+007F      |
//! | 2     | `110xxxxx`    | `10xxxxxx`        | U+0080 - U+07FF      |
//! | 3     | `1110xxxx`    | `10xxxxxx` × 2    | U+0800 - U+FFFF      |
//! | 4     | `11110xxx`    | `10xxxxxx` × 3    | U+10000 - U+10FFFF   |
//!
//! - [`classify`] - lead byte to sequence length
//! - [`encode`](mod@encode) - code point to bytes
//! - [`decode`] - bytes to code points, strict or with U+FFFD substitution
//! - [`validate`] - all-or-nothing well-formedness checks
//! - [`backtrack`](mod@backtrack) - sequence boundaries found by scanning backward

pub mod backtrack;
pub mod classify;
pub mod decode;
pub mod encode;
pub mod error;
pub mod validate;

pub use backtrack::{backtrack, truncation_point, Backtrack};
pub use classify::{decode_length, is_continuation_byte, is_lead_byte, LEAD_LENGTH_TABLE};
pub use decode::{
    chars_lossy, decode_code_point, decode_sequence, next, Utf8Chars, REPLACEMENT_CHARACTER,
};
pub use encode::{encode, encode_code_point, encode_length, is_scalar_value, MAX_CODE_POINT};
pub use error::{Utf8Error, Utf8ErrorKind};
pub use validate::{is_valid, validate_utf8};
