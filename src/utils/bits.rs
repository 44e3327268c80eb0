//! Bit-width helpers for arbitrary-precision integers.
//!
//! Every layer of the engine works on `BigUint` values that are masked to
//! an explicit width after arithmetic instead of relying on fixed-width
//! wraparound. These helpers keep that masking uniform.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Returns `2^width - 1`.
///
/// # Parameters
/// - `width`: Number of low bits set in the mask.
///
/// # Returns
/// The all-ones mask of `width` bits (zero for `width == 0`).
pub fn low_mask(width: u32) -> BigUint {
    (BigUint::one() << width) - BigUint::one()
}

/// Returns `2^width`.
pub fn power_of_two(width: u32) -> BigUint {
    BigUint::one() << width
}

/// Truncates `value` to its low `width` bits.
pub fn mask_to(value: &BigUint, width: u32) -> BigUint {
    value & low_mask(width)
}

/// Returns the least-significant 64-bit limb of `value`.
pub fn low_u64(value: &BigUint) -> u64 {
    value.iter_u64_digits().next().unwrap_or(0)
}

/// XORs together every 64-bit chunk of `value`.
///
/// Used to shorten wide hashes into something that fits a file name.
pub fn xor_fold_u64(value: &BigUint) -> u64 {
    value.iter_u64_digits().fold(0, |acc, digit| acc ^ digit)
}

/// Reports whether `value` is 0 or all-ones at `width` bits.
pub fn is_degenerate(value: &BigUint, width: u32) -> bool {
    value.is_zero() || *value == low_mask(width)
}
