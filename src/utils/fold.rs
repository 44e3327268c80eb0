//! Integer folding: reduce an oversized integer to exactly N bits.
//!
//! Four interchangeable algorithms combine successive N-bit chunks of the
//! input, least-significant first. [`FoldInteger`] rotates through them so
//! a caller never knows which one shaped a given value.
//!
//! | Algorithm        | Chunk combine              | Window              |
//! |------------------|----------------------------|---------------------|
//! | `Xor`            | XOR                        | fixed               |
//! | `XorShrinking`   | XOR                        | shrinks to 4 bits   |
//! | `XorAdd`         | XOR if acc odd, else ADD   | fixed               |
//! | `XorAddShrinking`| XOR if acc odd, else ADD   | shrinks to 4 bits   |

use num_bigint::BigUint;
use num_traits::Zero;

use super::bits::{low_mask, power_of_two};

/// Smallest chunk width the shrinking variants will reduce to.
const MIN_SHRINK_WIDTH: u32 = 4;

/// The four fold algorithms, in rotation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldAlgorithm {
    Xor,
    XorShrinking,
    XorAdd,
    XorAddShrinking,
}

impl FoldAlgorithm {
    /// Rotation order used by [`FoldInteger`].
    pub const ALL: [FoldAlgorithm; 4] = [
        FoldAlgorithm::Xor,
        FoldAlgorithm::XorShrinking,
        FoldAlgorithm::XorAdd,
        FoldAlgorithm::XorAddShrinking,
    ];

    /// Folds `value` to `width` bits with this algorithm.
    ///
    /// Pure: the result depends only on `(self, value, width)`. The first
    /// chunk always uses the full width; shrinking variants narrow the
    /// shift distance (never the mask) on later chunks.
    ///
    /// # Parameters
    /// - `value`: The integer to fold.
    /// - `width`: Target width in bits.
    ///
    /// # Returns
    /// A value strictly below `2^width`.
    pub fn apply(self, value: &BigUint, width: u32) -> BigUint {
        if width == 0 {
            return BigUint::zero();
        }
        let mask = low_mask(width);
        let mut shift = width;
        let mut out = value & &mask;
        let mut rest = value >> shift;

        match self {
            FoldAlgorithm::Xor => {
                while !rest.is_zero() {
                    out ^= &rest & &mask;
                    rest >>= shift;
                }
                out
            }
            FoldAlgorithm::XorShrinking => {
                while !rest.is_zero() {
                    out ^= &rest & &mask;
                    rest >>= shift;
                    if shift > MIN_SHRINK_WIDTH {
                        shift -= 1;
                    }
                }
                out
            }
            FoldAlgorithm::XorAdd => {
                while !rest.is_zero() {
                    combine_xor_add(&mut out, &rest & &mask);
                    rest >>= shift;
                }
                out & mask
            }
            FoldAlgorithm::XorAddShrinking => {
                while !rest.is_zero() {
                    if shift > MIN_SHRINK_WIDTH {
                        shift -= 1;
                    }
                    combine_xor_add(&mut out, &rest & &mask);
                    rest >>= shift;
                }
                out & mask
            }
        }
    }
}

/// XOR the chunk in when the accumulator is odd, add it otherwise.
fn combine_xor_add(out: &mut BigUint, chunk: BigUint) {
    if out.bit(0) {
        *out ^= chunk;
    } else {
        *out += chunk;
    }
}

/// Round-robin fold selector.
///
/// Each instance keeps its own rotation index, so two owners folding the
/// same values in the same order get identical results.
#[derive(Debug, Clone, Default)]
pub struct FoldInteger {
    next_fold_index: usize,
}

impl FoldInteger {
    /// Creates a selector positioned at the first algorithm.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next algorithm in rotation and advances the selector.
    fn next_algorithm(&mut self) -> FoldAlgorithm {
        let algorithm = FoldAlgorithm::ALL[self.next_fold_index];
        self.next_fold_index = (self.next_fold_index + 1) % FoldAlgorithm::ALL.len();
        algorithm
    }

    /// Folds `value` to `width` bits.
    ///
    /// Values that already fit are returned unchanged and do not advance
    /// the rotation.
    ///
    /// # Parameters
    /// - `value`: The integer to fold.
    /// - `width`: Target width in bits.
    ///
    /// # Returns
    /// A value strictly below `2^width`.
    ///
    /// # Examples
    ///
    /// ```
    /// use evocrypt::utils::fold::FoldInteger;
    /// use num_bigint::BigUint;
    ///
    /// let mut fold = FoldInteger::new();
    /// let wide = BigUint::from(u64::MAX);
    /// assert!(fold.fold_it(&wide, 16) < BigUint::from(1u32 << 16));
    /// assert_eq!(fold.fold_it(&BigUint::from(9u32), 16), BigUint::from(9u32));
    /// ```
    pub fn fold_it(&mut self, value: &BigUint, width: u32) -> BigUint {
        if *value < power_of_two(width) {
            return value.clone();
        }
        self.next_algorithm().apply(value, width)
    }
}
