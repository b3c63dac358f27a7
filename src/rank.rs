//! Branch-free in-word rank via SWAR population count.
//!
//! "SWAR" (SIMD Within A Register) treats a `u64` as eight parallel byte
//! lanes: adjacent bit-pairs are summed into 2-bit fields, then nibbles,
//! then bytes, and a final multiply-and-shift adds all byte lanes together.
//! No loops, no branches — a fixed sequence of bitwise and arithmetic ops.
//!
//! The constants are the classic Hamming-weight masks:
//!
//! ```text
//! M1  = 0101...  selects every other bit
//! M2  = 0011...  selects every other bit-pair
//! M4  = 00001111...  selects every other nibble
//! H01 = 0x0101...    multiplying by it sums all byte lanes into the top byte
//! ```

/// Selects the low bit of each 2-bit field.
const M1: u64 = 0x5555_5555_5555_5555;
/// Selects the low pair of each 4-bit field.
const M2: u64 = 0x3333_3333_3333_3333;
/// Selects the low nibble of each byte.
const M4: u64 = 0x0f0f_0f0f_0f0f_0f0f;
/// One in each byte lane; `x * H01 >> 56` sums the lanes.
const H01: u64 = 0x0101_0101_0101_0101;

/// Count the set bits of `word` at positions strictly below `bit_pos`.
///
/// `bit_pos` may be any value in `[0, 64]`: `0` always returns 0 and `64`
/// counts the whole word. The mask is computed in `u128` so that the
/// `bit_pos == 64` case needs no branch (`1u64 << 64` would overflow).
///
/// ```
/// use compacted::rank::rank_before;
///
/// assert_eq!(rank_before(0b1011, 0), 0);
/// assert_eq!(rank_before(0b1011, 1), 1);
/// assert_eq!(rank_before(0b1011, 2), 2);
/// assert_eq!(rank_before(0b1011, 4), 3);
/// assert_eq!(rank_before(u64::MAX, 64), 64);
/// ```
#[inline(always)]
pub fn rank_before(word: u64, bit_pos: u32) -> u32 {
    debug_assert!(bit_pos <= 64, "bit_pos {bit_pos} out of range [0, 64]");

    let mut n = word & (((1u128 << bit_pos) - 1) as u64);

    n -= (n >> 1) & M1; // each 2-bit field holds its own popcount
    n = (n & M2) + ((n >> 2) & M2); // each 4-bit field
    n = (n + (n >> 4)) & M4; // each byte

    (n.wrapping_mul(H01) >> 56) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Per-bit oracle for `rank_before`.
    fn rank_naive(word: u64, bit_pos: u32) -> u32 {
        (0..bit_pos).filter(|&b| word & (1u64 << b) != 0).count() as u32
    }

    #[test]
    fn test_rank_before_documented_cases() {
        // From the original algorithm's own doc table for n = 3 (...011).
        assert_eq!(rank_before(3, 0), 0);
        assert_eq!(rank_before(3, 1), 1);
        assert_eq!(rank_before(3, 2), 2);
        assert_eq!(rank_before(3, 3), 2);
    }

    #[test]
    fn test_rank_before_boundary_positions() {
        assert_eq!(rank_before(u64::MAX, 0), 0);
        assert_eq!(rank_before(u64::MAX, 1), 1);
        assert_eq!(rank_before(u64::MAX, 63), 63);
        assert_eq!(rank_before(u64::MAX, 64), 64);
        assert_eq!(rank_before(0, 64), 0);
        assert_eq!(rank_before(1u64 << 63, 63), 0);
        assert_eq!(rank_before(1u64 << 63, 64), 1);
    }

    #[test]
    fn test_rank_before_matches_oracle_on_patterns() {
        let words = [
            0u64,
            u64::MAX,
            0x5555_5555_5555_5555,
            0xAAAA_AAAA_AAAA_AAAA,
            0x0123_4567_89AB_CDEF,
            0x8000_0000_0000_0001,
            0xFFFF_0000_0000_FFFF,
        ];
        for &w in &words {
            for p in 0..=64 {
                assert_eq!(rank_before(w, p), rank_naive(w, p), "word={w:#x} pos={p}");
            }
        }
    }
}
