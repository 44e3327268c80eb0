//! Per-generator constant tuples.
//!
//! A [`ConstantGenerator`] turns the entropy table into a lazy sequence of
//! `(multiplier, addition, lag, increment)` tuples. Multipliers start in
//! the upper 90% of the integer range and additions in the lower 10%;
//! every draw re-primes all three and then walks them apart by the
//! increment, so tuples built from one sequence never coincide.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::trace;

use crate::error::Result;
use crate::hashes::HashFamily;
use crate::rnt::EntropyTable;
use crate::utils::bits::{low_u64, power_of_two};
use crate::utils::fold::FoldInteger;
use crate::utils::primes::next_higher_prime;

/// Depth of the hash that mixes the sequence's starting entropy.
const CONSTANT_HASH_DEPTH: usize = 31;

/// Constants that make one lagged generator instance unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConstants {
    pub multiplier: BigUint,
    pub addition: BigUint,
    pub lag: u64,
    pub increment: BigUint,
}

fn abs_diff(a: &BigUint, b: &BigUint) -> BigUint {
    if a >= b {
        a - b
    } else {
        b - a
    }
}

/// Lazy, deterministic sequence of [`GeneratorConstants`].
///
/// As an [`Iterator`] it yields exactly `count` tuples; [`draw`](Self::draw)
/// keeps going past that.
#[derive(Debug, Clone)]
pub struct ConstantGenerator {
    multiplier: BigUint,
    addition: BigUint,
    lag: u64,
    increment: BigUint,
    entropy: BigUint,
    drawn: usize,
    remaining: usize,
}

impl ConstantGenerator {
    /// Derives the starting bounds from the table.
    ///
    /// # Parameters
    /// - `rnt`: Bootstrapped entropy table.
    /// - `integer_width`: Width of the generators the constants are for.
    /// - `count`: Number of tuples the iterator yields.
    ///
    /// # Errors
    /// Returns [`EvoCryptError::PrimeSearchExhausted`](crate::error::EvoCryptError::PrimeSearchExhausted)
    /// if a prime search runs past its window.
    pub fn new(rnt: &mut EntropyTable, integer_width: u32, count: usize) -> Result<Self> {
        let mut fold = FoldInteger::new();
        let mut hash = HashFamily::new(rnt, integer_width, CONSTANT_HASH_DEPTH).next_hash(rnt);
        let password_hash = rnt.password_hash().clone();
        hash.update_str(&format!("{}{}{:#x}", count, integer_width, password_hash), rnt);

        let mut entropy = fold.fold_it(&hash.intdigest(), integer_width) ^ &password_hash;
        if entropy.is_zero() {
            entropy = BigUint::one();
        }
        let max_integer = power_of_two(integer_width);
        while entropy < max_integer {
            let prime = next_higher_prime(&entropy)?;
            entropy *= prime;
        }
        let prime = next_higher_prime(&entropy)?;
        entropy *= prime;

        let multiplier = &entropy % (&max_integer * 9u32 / 10u32);
        let addition = &entropy % (&max_integer / 10u32);
        let increment = &multiplier * 3u32 / 10u32 / count.max(1);

        Ok(ConstantGenerator {
            multiplier,
            addition,
            lag: 1,
            increment,
            entropy,
            drawn: 0,
            remaining: count,
        })
    }

    /// Produces the next tuple regardless of the iterator budget.
    ///
    /// # Errors
    /// Propagates prime-search exhaustion.
    pub fn draw(&mut self) -> Result<GeneratorConstants> {
        if self.drawn > 0 {
            let weave = BigUint::from(low_u64(&self.entropy) & 0xFFF);
            self.increment = abs_diff(&self.increment, &weave);
            self.multiplier = abs_diff(&self.multiplier, &self.increment);
            self.addition += &self.increment;
            self.lag += 2;
        }

        self.multiplier = next_higher_prime(&self.multiplier)?;
        self.addition = next_higher_prime(&self.addition)?;
        self.increment = next_higher_prime(&self.increment)?;
        self.entropy = next_higher_prime(&((&self.entropy + &self.increment) >> 4u32))?;
        self.drawn += 1;

        trace!(drawn = self.drawn, lag = self.lag, "generator constants drawn");
        Ok(GeneratorConstants {
            multiplier: self.multiplier.clone(),
            addition: self.addition.clone(),
            lag: self.lag,
            increment: self.increment.clone(),
        })
    }
}

impl Iterator for ConstantGenerator {
    type Item = Result<GeneratorConstants>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.draw())
    }
}
