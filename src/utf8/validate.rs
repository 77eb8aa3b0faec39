//! Strict UTF-8 validation.
//!
//! [`is_valid`] answers well-formed or not. [`validate_utf8`] runs the same
//! scan and reports the first failure with its byte offset, line, column and
//! [`Utf8ErrorKind`].
//!
//! Both reject, without substitution:
//! 1. **Invalid lead bytes**: 0x80-0xBF, 0xC0, 0xC1 and 0xF5-0xFF where a lead byte is expected
//! 2. **Invalid continuation bytes**: Non-continuation bytes where continuation expected
//! 3. **Truncated sequences**: Multi-byte sequence cut off at the end bound
//! 4. **Overlong encodings**: Using more bytes than necessary
//! 5. **Surrogate code points**: U+D800-U+DFFF
//! 6. **Out of range**: Code points above U+10FFFF

use super::classify::is_continuation_byte;
use super::decode::decode_sequence;
use super::error::{Utf8Error, Utf8ErrorKind};

/// Check that `input` is entirely well-formed UTF-8.
///
/// # Examples
///
/// ```
/// use utf8codec::is_valid;
///
/// assert!(is_valid(b""));
/// assert!(is_valid("日本語 🎉".as_bytes()));
/// assert!(!is_valid(&[0xE2, 0x82]));
/// ```
#[inline]
pub fn is_valid(input: &[u8]) -> bool {
    let mut pos = 0;
    while pos < input.len() {
        match decode_sequence(input, pos) {
            Ok((_, len)) => pos += len,
            Err(_) => return false,
        }
    }
    true
}

/// Validate that the input is valid UTF-8.
///
/// Returns `Ok(())` if the input is valid UTF-8, or an `Err(Utf8Error)` with
/// detailed information about the first validation error.
///
/// # Examples
///
/// ```
/// use utf8codec::{validate_utf8, Utf8ErrorKind};
///
/// assert!(validate_utf8("émoji: 🎉".as_bytes()).is_ok());
///
/// let err = validate_utf8(b"line one\nbad \x80").unwrap_err();
/// assert_eq!(err.kind, Utf8ErrorKind::InvalidLeadByte);
/// assert_eq!((err.offset, err.line, err.column), (13, 2, 5));
/// ```
pub fn validate_utf8(input: &[u8]) -> Result<(), Utf8Error> {
    let mut pos = 0;
    let mut line = 1;
    let mut line_start = 0;

    while pos < input.len() {
        match decode_sequence(input, pos) {
            Ok((ch, len)) => {
                pos += len;
                if ch == '\n' {
                    line += 1;
                    line_start = pos;
                }
            }
            Err(kind) => {
                let offset = error_offset(input, pos, kind);
                return Err(Utf8Error {
                    offset,
                    line,
                    column: offset - line_start + 1,
                    kind,
                });
            }
        }
    }

    Ok(())
}

/// Offset of the byte to blame for `kind` in the sequence starting at `pos`.
///
/// Continuation errors point at the offending byte; everything else points
/// at the lead byte.
fn error_offset(input: &[u8], pos: usize, kind: Utf8ErrorKind) -> usize {
    match kind {
        Utf8ErrorKind::InvalidContinuationByte => input[pos + 1..]
            .iter()
            .position(|&b| !is_continuation_byte(b))
            .map_or(pos, |i| pos + 1 + i),
        _ => pos,
    }
}
