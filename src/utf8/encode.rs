//! Code point to UTF-8 encoding.
//!
//! The encoder always produces the shortest form:
//!
//! | Code point range     | Bytes | Layout                                  |
//! |----------------------|-------|-----------------------------------------|
//! | U+0000 - U+007F      | 1     | `0xxxxxxx`                              |
//! | U+0080 - U+07FF      | 2     | `110xxxxx 10xxxxxx`                     |
//! | U+0800 - U+FFFF      | 3     | `1110xxxx 10xxxxxx 10xxxxxx`            |
//! | U+10000 - U+10FFFF   | 4     | `11110xxx 10xxxxxx 10xxxxxx 10xxxxxx`   |
//!
//! Passing a surrogate or a value above U+10FFFF to [`encode_length`] or
//! [`encode`] is a contract violation and panics. Use [`is_scalar_value`] or
//! [`encode_code_point`] when the input has not been checked.

/// Largest Unicode code point.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Check whether `cp` is a Unicode scalar value: at most U+10FFFF and not a surrogate.
#[inline(always)]
pub const fn is_scalar_value(cp: u32) -> bool {
    cp <= MAX_CODE_POINT && !(cp >= 0xD800 && cp <= 0xDFFF)
}

/// Number of bytes needed to encode `cp`.
///
/// # Panics
///
/// Panics if `cp` is not a Unicode scalar value.
///
/// # Examples
///
/// ```
/// use utf8codec::encode_length;
///
/// assert_eq!(encode_length(0x41), 1);
/// assert_eq!(encode_length(0xE9), 2);
/// assert_eq!(encode_length(0x20AC), 3);
/// assert_eq!(encode_length(0x1F389), 4);
/// ```
#[inline]
pub const fn encode_length(cp: u32) -> usize {
    assert!(is_scalar_value(cp), "code point is not a Unicode scalar value");
    if cp < 0x80 {
        1
    } else if cp < 0x800 {
        2
    } else if cp < 0x10000 {
        3
    } else {
        4
    }
}

/// Encode `cp` into the front of `out`, returning the number of bytes written.
///
/// Exactly [`encode_length(cp)`](encode_length) bytes are written; the rest
/// of `out` is left untouched.
///
/// # Panics
///
/// Panics if `cp` is not a Unicode scalar value, or if `out` is shorter than
/// `encode_length(cp)`.
///
/// # Examples
///
/// ```
/// use utf8codec::encode;
///
/// let mut buf = [0u8; 4];
/// let len = encode(0x20AC, &mut buf);
/// assert_eq!(&buf[..len], &[0xE2, 0x82, 0xAC]);
/// ```
#[inline]
pub fn encode(cp: u32, out: &mut [u8]) -> usize {
    let len = encode_length(cp);
    match len {
        1 => {
            out[0] = cp as u8;
        }
        2 => {
            let out = &mut out[..2];
            out[0] = 0xC0 | ((cp >> 6) as u8);
            out[1] = 0x80 | ((cp & 0x3F) as u8);
        }
        3 => {
            let out = &mut out[..3];
            out[0] = 0xE0 | ((cp >> 12) as u8);
            out[1] = 0x80 | (((cp >> 6) & 0x3F) as u8);
            out[2] = 0x80 | ((cp & 0x3F) as u8);
        }
        _ => {
            let out = &mut out[..4];
            out[0] = 0xF0 | ((cp >> 18) as u8);
            out[1] = 0x80 | (((cp >> 12) & 0x3F) as u8);
            out[2] = 0x80 | (((cp >> 6) & 0x3F) as u8);
            out[3] = 0x80 | ((cp & 0x3F) as u8);
        }
    }
    len
}

/// Encode a Unicode code point as UTF-8.
///
/// Returns `None` if the code point is invalid (surrogate or > U+10FFFF).
/// On success, returns the UTF-8 bytes and the number of bytes used.
///
/// # Examples
///
/// ```
/// use utf8codec::encode_code_point;
///
/// let (bytes, len) = encode_code_point(0x1F389).unwrap();
/// assert_eq!(&bytes[..len], "🎉".as_bytes());
///
/// assert!(encode_code_point(0xD800).is_none());
/// assert!(encode_code_point(0x110000).is_none());
/// ```
pub fn encode_code_point(cp: u32) -> Option<([u8; 4], usize)> {
    if !is_scalar_value(cp) {
        return None;
    }
    let mut buf = [0u8; 4];
    let len = encode(cp, &mut buf);
    Some((buf, len))
}
