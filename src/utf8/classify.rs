//! Lead-byte classification.
//!
//! The `LEAD_LENGTH_TABLE` maps every byte value to the total length of the
//! UTF-8 sequence it starts, or 0 if the byte can never start a well-formed
//! sequence.
//!
//! | Lead byte     | Length | Notes                                    |
//! |---------------|--------|------------------------------------------|
//! | `0x00..=0x7F` | 1      | ASCII                                    |
//! | `0x80..=0xBF` | 0      | continuation bytes                       |
//! | `0xC0..=0xC1` | 0      | would only encode overlong ASCII         |
//! | `0xC2..=0xDF` | 2      |                                          |
//! | `0xE0..=0xEF` | 3      |                                          |
//! | `0xF0..=0xF4` | 4      |                                          |
//! | `0xF5..=0xFF` | 0      | would only encode values above U+10FFFF  |

/// Sequence length for each lead byte, 0 for bytes that cannot lead.
///
/// Table size: 256 bytes
pub const LEAD_LENGTH_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut byte = 0usize;
    while byte < 256 {
        table[byte] = match byte {
            0x00..=0x7F => 1,
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => 0,
        };
        byte += 1;
    }
    table
};

/// Get the expected sequence length from a lead byte.
///
/// Returns `None` for bytes that cannot start a well-formed sequence:
/// continuation bytes (`0x80..=0xBF`), `0xC0`, `0xC1` and `0xF5..=0xFF`.
///
/// # Examples
///
/// ```
/// use utf8codec::decode_length;
///
/// assert_eq!(decode_length(b'A'), Some(1));
/// assert_eq!(decode_length(0xE2), Some(3));
/// assert_eq!(decode_length(0x82), None);
/// ```
#[inline]
pub const fn decode_length(lead_byte: u8) -> Option<usize> {
    match LEAD_LENGTH_TABLE[lead_byte as usize] {
        0 => None,
        len => Some(len as usize),
    }
}

/// Check if a byte is a valid UTF-8 continuation byte (0x80-0xBF).
#[inline(always)]
pub const fn is_continuation_byte(byte: u8) -> bool {
    (byte & 0xC0) == 0x80
}

/// Check if a byte can start a well-formed sequence.
#[inline(always)]
pub const fn is_lead_byte(byte: u8) -> bool {
    LEAD_LENGTH_TABLE[byte as usize] != 0
}
