//! Decoding UTF-8 sequences into code points.
//!
//! Two modes share one sequence decoder:
//!
//! - [`decode_sequence`] is strict and reports why a sequence is malformed.
//! - [`next`] is lenient: any malformed sequence yields U+FFFD and advances
//!   the cursor by exactly one byte, so a scan over arbitrary bytes always
//!   makes progress.

use core::iter::FusedIterator;

use super::classify::{decode_length, is_continuation_byte};
use super::encode::MAX_CODE_POINT;
use super::error::Utf8ErrorKind;

/// U+FFFD, substituted for malformed input by [`next`].
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// Smallest code point that needs a sequence of the given length.
const MIN_CODE_POINT: [u32; 5] = [0, 0, 0x80, 0x800, 0x10000];

/// Payload bits kept from the lead byte of a sequence of the given length.
const LEAD_PAYLOAD_MASK: [u8; 5] = [0, 0x7F, 0x1F, 0x0F, 0x07];

/// Strictly decode the sequence starting at `bytes[pos]`.
///
/// On success returns the code point and the sequence length. No byte at or
/// past `bytes.len()` is read; a sequence that would extend past the end is
/// reported as [`Utf8ErrorKind::TruncatedAtBoundary`].
///
/// # Panics
///
/// Panics if `pos >= bytes.len()`.
///
/// # Examples
///
/// ```
/// use utf8codec::{decode_sequence, Utf8ErrorKind};
///
/// assert_eq!(decode_sequence("€".as_bytes(), 0), Ok(('€', 3)));
/// assert_eq!(
///     decode_sequence(&[0xE2, 0x82], 0),
///     Err(Utf8ErrorKind::TruncatedAtBoundary)
/// );
/// ```
#[inline]
pub fn decode_sequence(bytes: &[u8], pos: usize) -> Result<(char, usize), Utf8ErrorKind> {
    let lead = bytes[pos];

    // ASCII fast path
    if lead < 0x80 {
        return Ok((lead as char, 1));
    }

    let len = decode_length(lead).ok_or(Utf8ErrorKind::InvalidLeadByte)?;
    let available = &bytes[pos + 1..bytes.len().min(pos + len)];

    // A wrong continuation byte within reach takes precedence over truncation
    let mut cp = (lead & LEAD_PAYLOAD_MASK[len]) as u32;
    for &byte in available {
        if !is_continuation_byte(byte) {
            return Err(Utf8ErrorKind::InvalidContinuationByte);
        }
        cp = (cp << 6) | (byte & 0x3F) as u32;
    }
    if available.len() + 1 < len {
        return Err(Utf8ErrorKind::TruncatedAtBoundary);
    }

    if cp < MIN_CODE_POINT[len] {
        return Err(Utf8ErrorKind::OverlongEncoding);
    }
    if (0xD800..=0xDFFF).contains(&cp) {
        return Err(Utf8ErrorKind::SurrogateCodepoint);
    }
    if cp > MAX_CODE_POINT {
        return Err(Utf8ErrorKind::CodepointOutOfRange);
    }

    let ch = char::from_u32(cp).ok_or(Utf8ErrorKind::CodepointOutOfRange)?;
    Ok((ch, len))
}

/// Decode one code point starting at `pos`, substituting U+FFFD for malformed input.
///
/// Returns `None` when `pos` is at (or past) the end of `bytes`. Otherwise
/// returns the decoded character and the offset just past it. A malformed
/// sequence of any kind yields [`REPLACEMENT_CHARACTER`] and `pos + 1`.
///
/// # Examples
///
/// ```
/// use utf8codec::{next, REPLACEMENT_CHARACTER};
///
/// let euro = "€".as_bytes();
/// assert_eq!(next(euro, 0), Some(('€', 3)));
/// assert_eq!(next(euro, 3), None);
///
/// // Truncated: advance a single byte
/// assert_eq!(next(&[0xE2, 0x82], 0), Some((REPLACEMENT_CHARACTER, 1)));
/// ```
#[inline]
pub fn next(bytes: &[u8], pos: usize) -> Option<(char, usize)> {
    if pos >= bytes.len() {
        return None;
    }
    match decode_sequence(bytes, pos) {
        Ok((ch, len)) => Some((ch, pos + len)),
        Err(_) => Some((REPLACEMENT_CHARACTER, pos + 1)),
    }
}

/// Decode a UTF-8 code point from the front of a byte slice.
///
/// Returns `None` if the input is empty or starts with a malformed sequence.
/// On success, returns the decoded code point and the number of bytes consumed.
///
/// # Examples
///
/// ```
/// use utf8codec::decode_code_point;
///
/// assert_eq!(decode_code_point(b"A"), Some(('A' as u32, 1)));
/// assert_eq!(decode_code_point("日".as_bytes()), Some((0x65E5, 3)));
/// assert_eq!(decode_code_point(b""), None);
/// ```
pub fn decode_code_point(input: &[u8]) -> Option<(u32, usize)> {
    if input.is_empty() {
        return None;
    }
    decode_sequence(input, 0)
        .ok()
        .map(|(ch, len)| (ch as u32, len))
}

/// Lenient character iterator over a byte slice.
///
/// Created by [`chars_lossy`]. Each item is produced by [`next`], so
/// malformed bytes come out as U+FFFD one byte at a time.
#[derive(Debug, Clone)]
pub struct Utf8Chars<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Utf8Chars<'a> {
    /// Byte offset of the next character to be decoded.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// The bytes not yet decoded.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }
}

impl Iterator for Utf8Chars<'_> {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char> {
        let (ch, pos) = next(self.bytes, self.pos)?;
        self.pos = pos;
        Some(ch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bytes.len() - self.pos;
        (remaining.div_ceil(4), Some(remaining))
    }
}

impl FusedIterator for Utf8Chars<'_> {}

/// Iterate over the characters of `bytes`, replacing malformed input with U+FFFD.
///
/// # Examples
///
/// ```
/// use utf8codec::chars_lossy;
///
/// let decoded: String = chars_lossy(b"caf\xC3\xA9 \xFF!").collect();
/// assert_eq!(decoded, "café \u{FFFD}!");
/// ```
#[inline]
pub fn chars_lossy(bytes: &[u8]) -> Utf8Chars<'_> {
    Utf8Chars { bytes, pos: 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Strict decoding
    // =========================================================================

    mod strict {
        use super::*;

        #[test]
        fn decode_ascii() {
            assert_eq!(decode_code_point(b"A"), Some((0x41, 1)));
            assert_eq!(decode_code_point(b"\x00"), Some((0x00, 1)));
            assert_eq!(decode_code_point(b"\x7F"), Some((0x7F, 1)));
        }

        #[test]
        fn decode_2byte() {
            assert_eq!(decode_code_point(&[0xC2, 0x80]), Some((0x80, 2)));
            assert_eq!(decode_code_point(&[0xDF, 0xBF]), Some((0x7FF, 2)));
            assert_eq!(decode_code_point("é".as_bytes()), Some((0xE9, 2)));
        }

        #[test]
        fn decode_3byte() {
            assert_eq!(decode_code_point(&[0xE0, 0xA0, 0x80]), Some((0x800, 3)));
            assert_eq!(decode_code_point("€".as_bytes()), Some((0x20AC, 3)));
            assert_eq!(decode_code_point(&[0xEF, 0xBF, 0xBF]), Some((0xFFFF, 3)));
        }

        #[test]
        fn decode_4byte() {
            assert_eq!(
                decode_code_point(&[0xF0, 0x90, 0x80, 0x80]),
                Some((0x10000, 4))
            );
            assert_eq!(
                decode_code_point(&[0xF4, 0x8F, 0xBF, 0xBF]),
                Some((0x10FFFF, 4))
            );
            assert_eq!(decode_code_point("🎉".as_bytes()), Some((0x1F389, 4)));
        }

        #[test]
        fn decodes_only_first_sequence() {
            assert_eq!(decode_code_point("ab".as_bytes()), Some((0x61, 1)));
            assert_eq!(decode_code_point("日本".as_bytes()), Some((0x65E5, 3)));
        }

        #[test]
        fn error_kinds() {
            let cases: &[(&[u8], Utf8ErrorKind)] = &[
                (&[0x80], Utf8ErrorKind::InvalidLeadByte),
                (&[0xBF], Utf8ErrorKind::InvalidLeadByte),
                (&[0xC0, 0x80], Utf8ErrorKind::InvalidLeadByte),
                (&[0xC1, 0xBF], Utf8ErrorKind::InvalidLeadByte),
                (&[0xF5, 0x80, 0x80, 0x80], Utf8ErrorKind::InvalidLeadByte),
                (&[0xFF], Utf8ErrorKind::InvalidLeadByte),
                (&[0xC2, 0x41], Utf8ErrorKind::InvalidContinuationByte),
                (&[0xE2, 0x82, 0x41], Utf8ErrorKind::InvalidContinuationByte),
                (&[0xF0, 0x90, 0x80, 0xC2], Utf8ErrorKind::InvalidContinuationByte),
                (&[0xC2], Utf8ErrorKind::TruncatedAtBoundary),
                (&[0xE2, 0x82], Utf8ErrorKind::TruncatedAtBoundary),
                (&[0xF0, 0x90, 0x80], Utf8ErrorKind::TruncatedAtBoundary),
                (&[0xE0, 0x80, 0x80], Utf8ErrorKind::OverlongEncoding),
                (&[0xE0, 0x9F, 0xBF], Utf8ErrorKind::OverlongEncoding),
                (&[0xF0, 0x8F, 0xBF, 0xBF], Utf8ErrorKind::OverlongEncoding),
                (&[0xED, 0xA0, 0x80], Utf8ErrorKind::SurrogateCodepoint),
                (&[0xED, 0xBF, 0xBF], Utf8ErrorKind::SurrogateCodepoint),
                (&[0xF4, 0x90, 0x80, 0x80], Utf8ErrorKind::CodepointOutOfRange),
                (&[0xF4, 0xBF, 0xBF, 0xBF], Utf8ErrorKind::CodepointOutOfRange),
            ];
            for &(bytes, kind) in cases {
                assert_eq!(decode_sequence(bytes, 0), Err(kind), "{:02X?}", bytes);
            }
        }

        #[test]
        fn bad_continuation_beats_truncation() {
            // Only two bytes available, but the second is not a continuation
            assert_eq!(
                decode_sequence(&[0xE2, 0x41], 0),
                Err(Utf8ErrorKind::InvalidContinuationByte)
            );
        }

        #[test]
        fn respects_position() {
            let bytes = b"a\xE2\x82\xACb";
            assert_eq!(decode_sequence(bytes, 1), Ok(('€', 3)));
            assert_eq!(decode_sequence(bytes, 4), Ok(('b', 1)));
            assert_eq!(
                decode_sequence(bytes, 2),
                Err(Utf8ErrorKind::InvalidLeadByte)
            );
        }

        #[test]
        fn surrogate_neighbours_are_valid() {
            assert_eq!(decode_code_point(&[0xED, 0x9F, 0xBF]), Some((0xD7FF, 3)));
            assert_eq!(decode_code_point(&[0xEE, 0x80, 0x80]), Some((0xE000, 3)));
        }
    }

    // =========================================================================
    // Lenient decoding
    // =========================================================================

    mod lenient {
        use super::*;

        #[test]
        fn end_of_input() {
            assert_eq!(next(b"", 0), None);
            assert_eq!(next(b"abc", 3), None);
        }

        #[test]
        fn cursor_past_end_is_end_of_input() {
            assert_eq!(next(b"ab", 5), None);
            assert_eq!(next(b"", usize::MAX), None);
        }

        #[test]
        fn well_formed_advances_full_length() {
            let text = "A é 日 🎉";
            let bytes = text.as_bytes();
            let mut pos = 0;
            let mut decoded = Vec::new();
            while let Some((ch, after)) = next(bytes, pos) {
                assert_eq!(after - pos, ch.len_utf8());
                decoded.push(ch);
                pos = after;
            }
            assert_eq!(pos, bytes.len());
            assert_eq!(decoded, text.chars().collect::<Vec<_>>());
        }

        #[test]
        fn truncated_euro_advances_one_byte() {
            let bytes = [0xE2, 0x82];
            assert_eq!(next(&bytes, 0), Some((REPLACEMENT_CHARACTER, 1)));
            assert_eq!(next(&bytes, 1), Some((REPLACEMENT_CHARACTER, 2)));
            assert_eq!(next(&bytes, 2), None);
        }

        #[test]
        fn every_error_kind_advances_one_byte() {
            let inputs: &[&[u8]] = &[
                &[0x80, 0x80],
                &[0xC0, 0xAF],
                &[0xC2, 0x41],
                &[0xE0, 0x80, 0x80],
                &[0xED, 0xA0, 0x80],
                &[0xF4, 0x90, 0x80, 0x80],
                &[0xF0, 0x90, 0x80],
            ];
            for bytes in inputs {
                assert_eq!(
                    next(bytes, 0),
                    Some((REPLACEMENT_CHARACTER, 1)),
                    "{:02X?}",
                    bytes
                );
            }
        }

        #[test]
        fn resynchronises_after_garbage() {
            let bytes = b"\xE2\x82A\xFFB";
            let decoded: Vec<char> = chars_lossy(bytes).collect();
            assert_eq!(
                decoded,
                vec![
                    REPLACEMENT_CHARACTER,
                    REPLACEMENT_CHARACTER,
                    'A',
                    REPLACEMENT_CHARACTER,
                    'B'
                ]
            );
        }

        #[test]
        fn never_stalls_on_any_byte() {
            for byte in 0u8..=255 {
                let bytes = [byte; 8];
                let mut pos = 0;
                let mut steps = 0;
                while let Some((_, after)) = next(&bytes, pos) {
                    assert!(after > pos);
                    assert!(after <= bytes.len());
                    pos = after;
                    steps += 1;
                }
                assert!(steps <= bytes.len());
            }
        }

        #[test]
        fn agrees_with_from_utf8_lossy() {
            let inputs: &[&[u8]] = &[
                b"plain ascii",
                "日本語 🎉".as_bytes(),
                b"\xC3\xA9\xC3",
                b"\xF0\x9F\x8E\x89\xF0\x9F",
                b"a\x80b\xBFc",
            ];
            for bytes in inputs {
                let ours: String = chars_lossy(bytes).collect();
                let expected_valid = String::from_utf8_lossy(bytes).replace('\u{FFFD}', "");
                assert_eq!(ours.replace('\u{FFFD}', ""), expected_valid);
            }
        }
    }

    mod iterator {
        use super::*;

        #[test]
        fn tracks_offset() {
            let mut chars = chars_lossy("a€b".as_bytes());
            assert_eq!(chars.offset(), 0);
            assert_eq!(chars.next(), Some('a'));
            assert_eq!(chars.offset(), 1);
            assert_eq!(chars.next(), Some('€'));
            assert_eq!(chars.offset(), 4);
            assert_eq!(chars.as_bytes(), b"b");
            assert_eq!(chars.next(), Some('b'));
            assert_eq!(chars.next(), None);
            assert_eq!(chars.next(), None);
        }

        #[test]
        fn size_hint_bounds() {
            let chars = chars_lossy("日本".as_bytes());
            assert_eq!(chars.size_hint(), (2, Some(6)));
            assert_eq!(chars.count(), 2);
        }
    }
}
