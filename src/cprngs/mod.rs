//! Composite crypto generators: the keystream engine.
//!
//! Each composite owns its sub-generators outright. Nothing is shared
//! between two composites, so a send-direction and a receive-direction
//! instance can never leak keystream into each other.
//!
//! ```text
//!            ┌────────────── selector (last generator) ──────────────┐
//!            │ low log2(bit_width) bits pick a bit position          │
//!            ▼                                                       │
//! gen[0] ─► value ─► bit[sel] ─► XOR into acc[bit_index]             │
//! gen[1] ─► value ─► bit[sel] ─► XOR into acc[bit_index + 1]  ◄──────┘
//!   ...       (round-robin over gen[0..n-1])
//! ```

pub mod bit_select;
pub mod hash_crypto;

use num_bigint::BigUint;

use crate::config::Profile;
use crate::error::{EvoCryptError, Result};
use crate::rnt::EntropyTable;
use crate::utils::bits::low_u64;

pub use bit_select::{LcgCrypto, PrngCrypto};
pub use hash_crypto::HashCrypto;

/// A keystream generator.
///
/// `encrypt` and `decrypt` are the same XOR; they invert each other only
/// between two instances built from identical seed material and driven
/// in lockstep.
pub trait CryptoPrng: Send {
    fn variant(&self) -> CompositeVariant;

    /// Returns the next value below `2^bit_width`.
    ///
    /// # Errors
    /// - [`EvoCryptError::InvalidConfig`] when `steps` is zero.
    /// - [`EvoCryptError::UnsupportedWidth`] for widths this variant
    ///   cannot produce.
    /// - [`EvoCryptError::DegenerateOutput`] from a sub-generator.
    fn next(&mut self, bit_width: u32, steps: u32) -> Result<BigUint>;

    /// XORs every byte with the low byte of `next(8, steps)`.
    fn encrypt(&mut self, plaintext: &[u8], steps: u32) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(plaintext.len());
        for &byte in plaintext {
            let key = low_u64(&self.next(8, steps)?) as u8;
            out.push(byte ^ key);
        }
        Ok(out)
    }

    /// Inverse of [`encrypt`](Self::encrypt) on a matching instance.
    fn decrypt(&mut self, ciphertext: &[u8], steps: u32) -> Result<Vec<u8>> {
        self.encrypt(ciphertext, steps)
    }
}

/// Registry of composite variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompositeVariant {
    Lcg,
    Hash,
    Prngs,
}

impl CompositeVariant {
    pub const ALL: [CompositeVariant; 3] = [
        CompositeVariant::Lcg,
        CompositeVariant::Hash,
        CompositeVariant::Prngs,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CompositeVariant::Lcg => "lcg_crypto",
            CompositeVariant::Hash => "hash_crypto",
            CompositeVariant::Prngs => "prng_crypto",
        }
    }

    /// Builds a composite of this variant from the shared table.
    ///
    /// # Errors
    /// Propagates construction failures of the variant.
    pub fn build(self, rnt: &mut EntropyTable, profile: Profile) -> Result<Box<dyn CryptoPrng>> {
        Ok(match self {
            CompositeVariant::Lcg => Box::new(LcgCrypto::new(rnt, profile)?),
            CompositeVariant::Hash => Box::new(HashCrypto::new(rnt, profile)?),
            CompositeVariant::Prngs => Box::new(PrngCrypto::new(rnt, profile)?),
        })
    }
}

/// Rejects a zero step count and a zero width.
pub(crate) fn check_request(bit_width: u32, steps: u32) -> Result<()> {
    if steps == 0 {
        return Err(EvoCryptError::InvalidConfig(
            "steps must be at least 1".to_string(),
        ));
    }
    if bit_width == 0 {
        return Err(EvoCryptError::UnsupportedWidth {
            width: 0,
            reason: "bit width must be at least 1",
        });
    }
    Ok(())
}

/// Number of generators a composite is built with.
pub(crate) fn checked_count(profile: &Profile, min: usize) -> Result<usize> {
    if profile.generator_count < min {
        return Err(EvoCryptError::InvalidConfig(format!(
            "composite needs at least {} generators, profile has {}",
            min, profile.generator_count
        )));
    }
    Ok(profile.generator_count)
}
