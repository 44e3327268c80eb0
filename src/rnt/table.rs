//! Word table addressed as one continuous bit string.
//!
//! Bit 0 is the most significant bit of word 0, bit 64 the most significant
//! bit of word 1, and so on. Reads that start near the end of the
//! addressable range spill into the margin words stored past it, so
//! a field never wraps mid-read.

use num_bigint::BigUint;

use super::seed_table::SEED_WORDS;
use crate::utils::bits::{low_mask, low_u64};

const WORD_BITS: u64 = 64;

/// Bit-addressable table of 64-bit words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitTable {
    words: Vec<u64>,
    bit_size: u64,
    bit_index_mask: u64,
    bits_in_mask: u32,
}

impl BitTable {
    /// Copies the built-in seed words, addressing the first
    /// `addressable_bytes` of them.
    pub fn from_seed(addressable_bytes: usize) -> Self {
        Self::from_words(SEED_WORDS.to_vec(), addressable_bytes)
    }

    /// Wraps `words`, addressing the first `addressable_bytes` of them.
    ///
    /// `addressable_bytes` must be a power of two; callers validate it.
    pub fn from_words(words: Vec<u64>, addressable_bytes: usize) -> Self {
        let bit_size = addressable_bytes as u64 * 8;
        let bit_index_mask = bit_size - 1;
        BitTable {
            words,
            bit_size,
            bit_index_mask,
            bits_in_mask: bit_index_mask.count_ones(),
        }
    }

    /// All stored words, margin included.
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Number of addressable bits.
    pub fn bit_size(&self) -> u64 {
        self.bit_size
    }

    /// `bit_size - 1`.
    pub fn bit_index_mask(&self) -> u64 {
        self.bit_index_mask
    }

    /// Width of [`bit_index_mask`](Self::bit_index_mask) in bits.
    pub fn bits_in_mask(&self) -> u32 {
        self.bits_in_mask
    }

    /// Reduces an arbitrarily large index into the addressable range.
    pub fn wrap_index(&self, index: &BigUint) -> u64 {
        low_u64(index) & self.bit_index_mask
    }

    fn word(&self, index: u64) -> u64 {
        self.words[(index % self.words.len() as u64) as usize]
    }

    /// Extracts `field_width` contiguous bits starting at `bit_index`.
    ///
    /// The index is wrapped with the table mask first. The first bit read
    /// becomes the most significant bit of the result.
    ///
    /// # Parameters
    /// - `bit_index`: Starting bit, any value.
    /// - `field_width`: Number of bits to read.
    ///
    /// # Returns
    /// A value below `2^field_width`.
    pub fn bit_string(&self, bit_index: u64, field_width: u32) -> BigUint {
        if field_width == 0 {
            return BigUint::default();
        }
        let index = bit_index & self.bit_index_mask;
        let first_word = index / WORD_BITS;
        let offset = index % WORD_BITS;
        let end = offset + u64::from(field_width);
        let words_needed = end.div_ceil(WORD_BITS);

        if words_needed <= 2 {
            // Fast path: the field lies inside a 128-bit window.
            let hi = u128::from(self.word(first_word));
            let lo = if words_needed == 2 {
                u128::from(self.word(first_word + 1))
            } else {
                0
            };
            let window = (hi << 64) | lo;
            let field = window >> (128 - end);
            let mask = if field_width >= 128 {
                u128::MAX
            } else {
                (1u128 << field_width) - 1
            };
            return BigUint::from(field & mask);
        }

        let mut window = BigUint::default();
        for k in 0..words_needed {
            window = (window << 64u32) | BigUint::from(self.word(first_word + k));
        }
        let total = words_needed * WORD_BITS;
        (window >> (total - end)) & low_mask(field_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> BitTable {
        BitTable::from_seed(4096)
    }

    #[test]
    fn test_seed_table_geometry() {
        let t = table();
        assert_eq!(t.bit_size(), 32768);
        assert_eq!(t.bit_index_mask(), 0x7FFF);
        assert_eq!(t.bits_in_mask(), 15);
        assert_eq!(t.words().len(), SEED_WORDS.len());
    }

    #[test]
    fn test_aligned_64_bit_reads_match_words() {
        let t = table();
        for i in 0..512u64 {
            assert_eq!(t.bit_string(i * 64, 64), BigUint::from(t.words()[i as usize]));
        }
    }

    #[test]
    fn test_single_bit_reads() {
        let t = table();
        let w = t.words()[3];
        for bit in 0..64u64 {
            let expected = (w >> (63 - bit)) & 1;
            assert_eq!(t.bit_string(3 * 64 + bit, 1), BigUint::from(expected));
        }
    }

    #[test]
    fn test_read_crossing_one_boundary() {
        let t = table();
        let (a, b) = (t.words()[10], t.words()[11]);
        let expected = ((a & 0xFFFF_FFFF) << 32) | (b >> 32);
        assert_eq!(t.bit_string(10 * 64 + 32, 64), BigUint::from(expected));
    }

    #[test]
    fn test_128_bit_read_spanning_three_words() {
        let t = table();
        let (a, b, c) = (t.words()[20], t.words()[21], t.words()[22]);
        let expected = (BigUint::from(a & 0xFFFF_FFFF) << 96u32)
            | (BigUint::from(b) << 32u32)
            | BigUint::from(c >> 32);
        assert_eq!(t.bit_string(20 * 64 + 32, 128), expected);
    }

    #[test]
    fn test_index_wraps_with_mask() {
        let t = table();
        assert_eq!(t.bit_string(32768 + 128, 64), t.bit_string(128, 64));
    }

    #[test]
    fn test_read_near_end_uses_margin() {
        let t = table();
        let last = t.bit_index_mask();
        let expected = ((t.words()[511] & 1) << 63) | (t.words()[512] >> 1);
        assert_eq!(t.bit_string(last, 64), BigUint::from(expected));
    }

    #[test]
    fn test_wrap_index_of_big_value() {
        let t = table();
        let big = (BigUint::from(u64::MAX) << 70u32) + BigUint::from(0x1_2345u32);
        assert_eq!(t.wrap_index(&big), 0x1_2345 & 0x7FFF);
    }

    #[test]
    fn test_zero_width_read() {
        assert_eq!(table().bit_string(5, 0), BigUint::default());
    }
}
