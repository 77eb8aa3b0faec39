//! Synthetic UTF-8 text for testing and benchmarking the codec.
//!
//! Well-formed patterns are assembled code point by code point with the
//! crate's own encoder; the `corrupt` pattern then damages mixed text the
//! way truncated or mis-decoded input tends to look.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use utf8codec::{encode, encode_length, is_scalar_value};

/// Pattern types for UTF-8 text generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf8Pattern {
    /// Printable ASCII with newlines (single-byte sequences)
    Ascii,
    /// Latin-1 Supplement and Latin Extended-A (2-byte sequences)
    Latin,
    /// CJK Unified Ideographs (3-byte sequences)
    Cjk,
    /// Emoji (4-byte sequences)
    Emoji,
    /// Uniform mix of all sequence lengths (1-4 bytes)
    Mixed,
    /// Mixed text with malformed bytes injected
    Corrupt,
}

/// Code point ranges drawn from for each well-formed pattern.
fn ranges(pattern: Utf8Pattern) -> &'static [(u32, u32)] {
    match pattern {
        Utf8Pattern::Ascii => &[(0x20, 0x7E)],
        Utf8Pattern::Latin => &[(0xC0, 0x17F)],
        Utf8Pattern::Cjk => &[(0x4E00, 0x9FFF)],
        Utf8Pattern::Emoji => &[(0x1F300, 0x1F5FF), (0x1F600, 0x1F64F)],
        Utf8Pattern::Mixed | Utf8Pattern::Corrupt => &[
            (0x20, 0x7E),
            (0xC0, 0x17F),
            (0x4E00, 0x9FFF),
            (0x1F300, 0x1F64F),
        ],
    }
}

/// Malformed fragments spliced in by [`Utf8Pattern::Corrupt`].
const DAMAGE: &[&[u8]] = &[
    &[0x80],                   // stray continuation
    &[0xC0, 0xAF],             // overlong '/'
    &[0xE2, 0x82],             // truncated euro sign
    &[0xED, 0xA0, 0x80],       // surrogate
    &[0xF4, 0x90, 0x80, 0x80], // above U+10FFFF
    &[0xFF],                   // never valid
];

/// Generate UTF-8 text of exactly `target_size` bytes.
///
/// Well-formed patterns pad with spaces rather than split a sequence, so
/// their output always validates. A fixed `seed` makes output reproducible.
pub fn generate_utf8(target_size: usize, pattern: Utf8Pattern, seed: Option<u64>) -> Vec<u8> {
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let ranges = ranges(pattern);
    let mut result = Vec::with_capacity(target_size);
    let mut line_len = 0;

    while result.len() < target_size {
        if pattern == Utf8Pattern::Corrupt && rng.gen_ratio(1, 32) {
            let damage = DAMAGE[rng.gen_range(0..DAMAGE.len())];
            let take = damage.len().min(target_size - result.len());
            result.extend_from_slice(&damage[..take]);
            continue;
        }

        if line_len >= 72 {
            result.push(b'\n');
            line_len = 0;
            continue;
        }

        let (lo, hi) = ranges[rng.gen_range(0..ranges.len())];
        let cp = rng.gen_range(lo..=hi);
        debug_assert!(is_scalar_value(cp));

        if result.len() + encode_length(cp) > target_size {
            result.resize(target_size, b' ');
            break;
        }

        let mut buf = [0u8; 4];
        let len = encode(cp, &mut buf);
        result.extend_from_slice(&buf[..len]);
        line_len += 1;
    }

    result
}
