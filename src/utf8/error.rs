//! Error types for strict UTF-8 decoding and validation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Error information for UTF-8 validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Utf8Error {
    /// The byte offset where the error occurred (0-indexed).
    pub offset: usize,
    /// The line number where the error occurred (1-indexed).
    pub line: usize,
    /// The column (byte position within the line, 1-indexed).
    pub column: usize,
    /// The kind of UTF-8 error.
    pub kind: Utf8ErrorKind,
}

impl core::fmt::Display for Utf8Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} at byte {}, line {}, column {}",
            self.kind, self.offset, self.line, self.column
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Utf8Error {}

/// The specific way a byte sequence fails to be well-formed UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Utf8ErrorKind {
    /// A byte that cannot start a sequence appeared where a lead byte was
    /// expected: a continuation byte (0x80-0xBF), 0xC0, 0xC1 or 0xF5-0xFF.
    InvalidLeadByte,

    /// A byte outside the range 0x80-0xBF appeared where a continuation byte was expected.
    InvalidContinuationByte,

    /// A multi-byte sequence needs more bytes than remain before the end bound.
    TruncatedAtBoundary,

    /// A character was encoded using more bytes than necessary.
    /// For example, encoding U+07FF as `E0 9F BF` instead of `DF BF`.
    OverlongEncoding,

    /// A surrogate code point (U+D800-U+DFFF) was encoded.
    SurrogateCodepoint,

    /// A code point above U+10FFFF was encoded.
    CodepointOutOfRange,
}

impl Utf8ErrorKind {
    /// A short hint on what well-formed input looks like.
    pub const fn hint(self) -> &'static str {
        match self {
            Self::InvalidLeadByte => "bytes 0x80-0xBF are continuation bytes",
            Self::InvalidContinuationByte => "expected byte 0x80-0xBF",
            Self::TruncatedAtBoundary => "input ends inside a multi-byte sequence",
            Self::OverlongEncoding => "use shortest possible encoding",
            Self::SurrogateCodepoint => "U+D800-U+DFFF are reserved for UTF-16",
            Self::CodepointOutOfRange => "maximum is U+10FFFF",
        }
    }
}

impl core::fmt::Display for Utf8ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLeadByte => write!(f, "invalid UTF-8 lead byte"),
            Self::InvalidContinuationByte => write!(f, "invalid UTF-8 continuation byte"),
            Self::TruncatedAtBoundary => write!(f, "truncated UTF-8 sequence"),
            Self::OverlongEncoding => write!(f, "overlong UTF-8 encoding"),
            Self::SurrogateCodepoint => write!(f, "surrogate code point in UTF-8"),
            Self::CodepointOutOfRange => write!(f, "code point above U+10FFFF"),
        }
    }
}
