//! Finding sequence boundaries by scanning backward.
//!
//! A buffer filled from a stream can end in the middle of a multi-byte
//! sequence. [`backtrack`] walks back from the last byte of interest to the
//! byte that starts its sequence and reports how many bytes are still
//! missing. [`truncation_point`] turns that into the longest prefix that
//! does not split a code point.

use super::classify::{decode_length, is_continuation_byte};

/// Result of [`backtrack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backtrack {
    /// Offset of the byte that starts the sequence containing `start`.
    pub offset: usize,
    /// Number of bytes past `start` still needed to complete the sequence.
    pub missing: usize,
    /// False when the walk reached `min` without finding a byte that can
    /// start a sequence. `offset` is then `min` and `missing` is 0.
    pub resolved: bool,
}

impl Backtrack {
    /// True if the sequence at `offset` is complete within the window.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.resolved && self.missing == 0
    }
}

/// Find the start of the sequence that the byte at `start` belongs to.
///
/// `start` is the last byte of the window and `min` its inclusive lower
/// bound. A `start` at or past `bytes.len()` is clamped to the final byte,
/// so only bytes actually present count as available. No byte below `min`
/// is read.
///
/// The walk steps back over continuation bytes. Any other byte stops it:
/// a valid lead contributes its expected length, while a byte that cannot
/// lead (`0xC0`, `0xC1`, `0xF5..=0xFF`) counts as a complete one-byte unit.
///
/// # Panics
///
/// Panics if `min > start`.
///
/// # Examples
///
/// ```
/// use utf8codec::backtrack;
///
/// // Complete euro sign
/// let found = backtrack(&[0xE2, 0x82, 0xAC], 2, 0);
/// assert_eq!((found.offset, found.missing), (0, 0));
///
/// // Euro sign missing its last byte
/// let found = backtrack(&[0xE2, 0x82], 2, 0);
/// assert_eq!((found.offset, found.missing), (0, 1));
/// ```
pub fn backtrack(bytes: &[u8], start: usize, min: usize) -> Backtrack {
    assert!(min <= start, "backtrack lower bound is above start");

    let unresolved = Backtrack {
        offset: min,
        missing: 0,
        resolved: false,
    };
    if min >= bytes.len() {
        return unresolved;
    }

    let last = start.min(bytes.len() - 1);
    let mut pos = last;
    while pos > min && is_continuation_byte(bytes[pos]) {
        pos -= 1;
    }

    let lead = bytes[pos];
    if is_continuation_byte(lead) {
        return unresolved;
    }

    let expected = decode_length(lead).unwrap_or(1);
    let available = last - pos + 1;
    Backtrack {
        offset: pos,
        missing: expected.saturating_sub(available),
        resolved: true,
    }
}

/// Length of the longest prefix of `bytes` that does not end inside an
/// incomplete multi-byte sequence.
///
/// Malformed bytes are not trimmed; only a trailing sequence that more
/// input could still complete is cut off.
///
/// # Examples
///
/// ```
/// use utf8codec::truncation_point;
///
/// assert_eq!(truncation_point(b"abc"), 3);
/// assert_eq!(truncation_point(b"ab\xE2\x82"), 2);
/// assert_eq!(truncation_point("ab€".as_bytes()), 5);
/// ```
pub fn truncation_point(bytes: &[u8]) -> usize {
    let Some(last) = bytes.len().checked_sub(1) else {
        return 0;
    };
    let found = backtrack(bytes, last, 0);
    if found.missing == 0 {
        bytes.len()
    } else {
        found.offset
    }
}
