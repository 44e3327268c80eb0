//! Primality testing and nearest-prime search over `BigUint`.
//!
//! Generator constants are primes so that multipliers, additions and
//! carries drawn for different generators share no small factors. Both
//! ends of a link must derive the same constants, so the Miller-Rabin
//! witnesses are fixed rather than random.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

use crate::error::{EvoCryptError, Result};

/// Maximum number of candidates probed before a search gives up.
pub const PRIME_SEARCH_WINDOW: u64 = 1 << 20;

/// Small primes used for trial division and as Miller-Rabin witnesses.
#[rustfmt::skip]
const SMALL_PRIMES: [u32; 54] = [
      2,   3,   5,   7,  11,  13,  17,  19,  23,  29,  31,  37,  41,  43,
     47,  53,  59,  61,  67,  71,  73,  79,  83,  89,  97, 101, 103, 107,
    109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181,
    191, 193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251,
];

/// Number of leading [`SMALL_PRIMES`] used as witnesses.
///
/// The first 13 already make the test exact below 3.3 * 10^24.
const WITNESS_COUNT: usize = 24;

/// Miller-Rabin primality test with fixed witnesses.
///
/// # Parameters
/// - `n`: The candidate.
///
/// # Returns
/// `true` if `n` is prime (exact for small inputs, overwhelmingly likely
/// for large ones), `false` otherwise.
///
/// # Examples
///
/// ```
/// use evocrypt::utils::primes::is_prime;
/// use num_bigint::BigUint;
///
/// assert!(is_prime(&BigUint::from(7919u32)));
/// assert!(!is_prime(&BigUint::from(7917u32)));
/// ```
pub fn is_prime(n: &BigUint) -> bool {
    let two = BigUint::from(2u32);
    if *n < two {
        return false;
    }

    for &p in SMALL_PRIMES.iter() {
        let p = BigUint::from(p);
        if *n == p {
            return true;
        }
        if (n % &p).is_zero() {
            return false;
        }
    }

    // n - 1 = d * 2^r with d odd
    let one = BigUint::one();
    let n_minus_1 = n - &one;
    let r = n_minus_1.trailing_zeros().unwrap_or(0);
    let d = &n_minus_1 >> r;

    'witness: for &a in SMALL_PRIMES.iter().take(WITNESS_COUNT) {
        let a = BigUint::from(a);
        let mut x = a.modpow(&d, n);
        if x == one || x == n_minus_1 {
            continue 'witness;
        }
        for _ in 1..r {
            x = x.modpow(&two, n);
            if x == n_minus_1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Returns the smallest prime greater than or equal to `n`.
///
/// # Errors
/// Returns [`EvoCryptError::PrimeSearchExhausted`] if no prime lies within
/// [`PRIME_SEARCH_WINDOW`] candidates.
pub fn next_higher_prime(n: &BigUint) -> Result<BigUint> {
    let two = BigUint::from(2u32);
    if *n <= two {
        return Ok(two);
    }
    let mut candidate = n.clone();
    if candidate.is_even() {
        candidate += 1u32;
    }
    for _ in 0..PRIME_SEARCH_WINDOW {
        if is_prime(&candidate) {
            return Ok(candidate);
        }
        candidate += 2u32;
    }
    Err(EvoCryptError::PrimeSearchExhausted {
        window: PRIME_SEARCH_WINDOW,
    })
}

/// Returns the largest prime less than or equal to `n`.
///
/// # Errors
/// Returns [`EvoCryptError::PrimeSearchExhausted`] if `n < 2` or no prime
/// lies within [`PRIME_SEARCH_WINDOW`] candidates.
pub fn next_lower_prime(n: &BigUint) -> Result<BigUint> {
    let exhausted = EvoCryptError::PrimeSearchExhausted {
        window: PRIME_SEARCH_WINDOW,
    };
    match n.to_u32() {
        Some(0) | Some(1) => return Err(exhausted),
        Some(2) => return Ok(BigUint::from(2u32)),
        _ => {}
    }
    let mut candidate = n.clone();
    if candidate.is_even() {
        candidate -= 1u32;
    }
    for _ in 0..PRIME_SEARCH_WINDOW {
        if is_prime(&candidate) {
            return Ok(candidate);
        }
        if candidate <= BigUint::from(3u32) {
            return Ok(BigUint::from(2u32));
        }
        candidate -= 2u32;
    }
    Err(exhausted)
}
