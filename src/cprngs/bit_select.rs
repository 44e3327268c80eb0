//! Bit-selection composites: `LcgCrypto` and `PrngCrypto`.
//!
//! For every output bit, the last generator picks a bit position and the
//! next source generator in rotation supplies the bit at that position.
//! `LcgCrypto` uses only `Lcg` sources; `PrngCrypto` mixes every base
//! generator kind.

use num_bigint::BigUint;
use num_traits::Zero;
use tracing::debug;

use super::{check_request, checked_count, CompositeVariant, CryptoPrng};
use crate::config::Profile;
use crate::constants::ConstantGenerator;
use crate::error::{EvoCryptError, Result};
use crate::prngs::{Lcg, Prng, PrngFamily};
use crate::rnt::EntropyTable;
use crate::utils::bits::low_u64;

/// Spin-forward steps are the password hash modulo this.
const SPIN_MODULUS: u32 = 64;

/// One selector plus `n - 1` round-robin bit sources.
struct BitSelector {
    generators: Vec<Box<dyn Prng>>,
    next_index: usize,
}

impl BitSelector {
    /// Spins every generator forward by `password_hash % 64` steps.
    fn new(mut generators: Vec<Box<dyn Prng>>, rnt: &EntropyTable) -> Self {
        let spin = low_u64(&(rnt.password_hash() % SPIN_MODULUS)) as u32;
        for generator in generators.iter_mut() {
            generator.advance(spin);
        }
        BitSelector {
            generators,
            next_index: 0,
        }
    }

    /// Every step flips bits of the same `bit_width`-bit accumulator, so the
    /// closing fold to `bit_width` is the identity and is not applied.
    fn next(&mut self, bit_width: u32, steps: u32) -> Result<BigUint> {
        check_request(bit_width, steps)?;
        if !bit_width.is_power_of_two() {
            return Err(EvoCryptError::UnsupportedWidth {
                width: bit_width,
                reason: "bit selection needs a power-of-two width",
            });
        }
        let selection_mask = u64::from(bit_width - 1);
        let selector = self.generators.len() - 1;

        let mut acc = BigUint::zero();
        for _ in 0..steps {
            for bit_index in 0..u64::from(bit_width) {
                let selected = low_u64(&self.generators[selector].next(bit_width, 1)?) & selection_mask;
                let value = self.generators[self.next_index].next(bit_width, 1)?;
                self.next_index = (self.next_index + 1) % selector;
                if value.bit(selected) {
                    let flipped = !acc.bit(bit_index);
                    acc.set_bit(bit_index, flipped);
                }
            }
        }
        Ok(acc)
    }
}

// ───────────────────────────── LcgCrypto ────────────────────────────

/// Bit selection over `n` lagged LCGs, each with its own constants.
pub struct LcgCrypto {
    engine: BitSelector,
}

impl LcgCrypto {
    /// Draws `n` constant tuples and builds one `Lcg` per tuple.
    ///
    /// # Errors
    /// - [`EvoCryptError::InvalidConfig`] for profiles with fewer than two
    ///   generators.
    /// - Prime-search failures from the constant sequence.
    pub fn new(rnt: &mut EntropyTable, profile: Profile) -> Result<Self> {
        let count = checked_count(&profile, 2)?;
        let constants = ConstantGenerator::new(rnt, profile.integer_width, count)?;
        let mut generators: Vec<Box<dyn Prng>> = Vec::with_capacity(count);
        for tuple in constants {
            generators.push(Box::new(Lcg::new(rnt, profile.integer_width, profile.depth, tuple?)));
        }
        debug!(
            generators = count,
            integer_width = profile.integer_width,
            depth = profile.depth,
            "lcg_crypto built"
        );
        Ok(LcgCrypto {
            engine: BitSelector::new(generators, rnt),
        })
    }
}

impl CryptoPrng for LcgCrypto {
    fn variant(&self) -> CompositeVariant {
        CompositeVariant::Lcg
    }

    fn next(&mut self, bit_width: u32, steps: u32) -> Result<BigUint> {
        self.engine.next(bit_width, steps)
    }
}

// ──────────────────────────── PrngCrypto ────────────────────────────

/// Bit selection over a mixed ensemble from [`PrngFamily`].
pub struct PrngCrypto {
    engine: BitSelector,
    kinds: Vec<&'static str>,
}

impl PrngCrypto {
    /// Builds `n` generators round-robin from a scrambled family.
    ///
    /// # Errors
    /// Same as [`LcgCrypto::new`], plus base generator construction
    /// failures.
    pub fn new(rnt: &mut EntropyTable, profile: Profile) -> Result<Self> {
        let count = checked_count(&profile, 2)?;
        let mut family = PrngFamily::new(rnt, profile.integer_width, profile.depth, count)?;
        let mut generators = Vec::with_capacity(count);
        for _ in 0..count {
            generators.push(family.next_prng(rnt)?);
        }
        let kinds = generators.iter().map(|g| g.name()).collect();
        debug!(
            generators = count,
            integer_width = profile.integer_width,
            "prng_crypto built"
        );
        Ok(PrngCrypto {
            engine: BitSelector::new(generators, rnt),
            kinds,
        })
    }

    /// Names of the sub-generators, selector last.
    pub fn generator_names(&self) -> &[&'static str] {
        &self.kinds
    }
}

impl CryptoPrng for PrngCrypto {
    fn variant(&self) -> CompositeVariant {
        CompositeVariant::Prngs
    }

    fn next(&mut self, bit_width: u32, steps: u32) -> Result<BigUint> {
        self.engine.next(bit_width, steps)
    }
}
