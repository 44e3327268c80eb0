//! Hash-driven composite.
//!
//! One instance of each MixHash rule shares a single `n`-slot vector.
//! Each step reads two slots, adds a table draw, folds the sum to 32 bits
//! and feeds it to the next rule in rotation; the resulting digest is
//! XORed back into the vector and into the output.

use num_bigint::BigUint;
use num_traits::Zero;
use tracing::debug;

use super::{check_request, checked_count, CompositeVariant, CryptoPrng};
use crate::config::Profile;
use crate::error::{EvoCryptError, Result};
use crate::hashes::{absorb, digest_of, update_bytes_of, HashFamily, HashVariant};
use crate::rnt::EntropyTable;
use crate::utils::bits::{low_u64, mask_to};

/// Offsets of the two slots read per step.
const READ_OFFSETS: (usize, usize) = (3, 11);

/// Width and step count of the construction-time spin.
const SPIN_WIDTH: u32 = 64;
const SPIN_MODULUS: u32 = 64;

/// Folds a wide value into a small value of about 32 bits, XORing each
/// 32-bit chunk in when the remaining value is odd and adding it otherwise.
/// The add branch may carry past bit 31.
fn fold_to_u32_chunks(mut value: BigUint) -> u64 {
    let mut folded = 0u64;
    while !value.is_zero() {
        let chunk = low_u64(&value) & 0xFFFF_FFFF;
        if value.bit(0) {
            folded ^= chunk;
        } else {
            folded += chunk;
        }
        value >>= 32u32;
    }
    folded
}

/// Shared-vector hash composite.
pub struct HashCrypto {
    rnt: EntropyTable,
    rules: Vec<(HashVariant, usize)>,
    vector: Vec<BigUint>,
    write_slot: usize,
    integer_width: u32,
}

impl HashCrypto {
    /// Builds one hash per rule over an `n`-slot vector, primes the vector
    /// with every rule, and spins `password_hash % 64` steps.
    ///
    /// The composite keeps its own copy of the table for the per-step
    /// draws, taken once construction is done with the shared one.
    ///
    /// # Errors
    /// Returns [`EvoCryptError::InvalidConfig`] for an empty profile.
    pub fn new(rnt: &mut EntropyTable, profile: Profile) -> Result<Self> {
        let count = checked_count(&profile, 1)?;
        let integer_width = profile.integer_width;
        let mut family = HashFamily::new(rnt, integer_width, count);

        let mut shared: Option<Vec<BigUint>> = None;
        let mut rules = Vec::with_capacity(HashVariant::ALL.len());
        for _ in 0..HashVariant::ALL.len() {
            let (variant, vector, cursor) = family.next_hash(rnt).into_parts();
            if shared.is_none() {
                shared = Some(vector);
            }
            rules.push((variant, cursor));
        }
        let mut vector = shared.unwrap_or_default();

        let password_hash = rnt.password_hash().clone();
        for (i, (variant, cursor)) in rules.iter_mut().enumerate() {
            let seed = &password_hash * i + i;
            absorb(*variant, &mut vector, cursor, &update_bytes_of(&seed), integer_width, rnt);
        }

        let mut crypto = HashCrypto {
            rnt: rnt.clone(),
            rules,
            vector,
            write_slot: (count + 1) % count,
            integer_width,
        };
        let spin = low_u64(&(&password_hash % SPIN_MODULUS)) as u32;
        crypto.generate(SPIN_WIDTH, spin);
        debug!(slots = count, integer_width, spin, "hash_crypto built");
        Ok(crypto)
    }

    /// Runs `steps` hash steps and returns their XOR masked to `bit_width`.
    fn generate(&mut self, bit_width: u32, steps: u32) -> BigUint {
        let n = self.vector.len();
        let (first, second) = READ_OFFSETS;
        let mut out = BigUint::zero();
        for i in 0..steps as usize {
            let v0 = (self.write_slot + i + first) % n;
            let v1 = (self.write_slot + i + second) % n;
            let draw = self.rnt.next_random_value(&self.vector[v1], self.integer_width);
            let update = &self.vector[v0] + draw;
            let folded = BigUint::from(fold_to_u32_chunks(update));

            let rule = i % self.rules.len();
            let (variant, cursor) = &mut self.rules[rule];
            absorb(
                *variant,
                &mut self.vector,
                cursor,
                &update_bytes_of(&folded),
                self.integer_width,
                &mut self.rnt,
            );

            let digest = digest_of(&self.vector);
            self.vector[self.write_slot] ^= &digest;
            out ^= digest;
        }
        mask_to(&out, bit_width)
    }

    /// The shared slot vector.
    pub fn vector(&self) -> &[BigUint] {
        &self.vector
    }
}

impl CryptoPrng for HashCrypto {
    fn variant(&self) -> CompositeVariant {
        CompositeVariant::Hash
    }

    fn next(&mut self, bit_width: u32, steps: u32) -> Result<BigUint> {
        check_request(bit_width, steps)?;
        if bit_width > self.integer_width {
            return Err(EvoCryptError::UnsupportedWidth {
                width: bit_width,
                reason: "wider than the hash slots",
            });
        }
        Ok(self.generate(bit_width, steps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ParanoiaLevel, SystemType};

    fn rnt() -> EntropyTable {
        EntropyTable::new(
            4096,
            ParanoiaLevel::new(1).unwrap(),
            SystemType::Cellphone,
            "correct horse battery staple",
        )
        .unwrap()
    }

    fn profile() -> Profile {
        Profile::lookup(SystemType::Cellphone, ParanoiaLevel::new(1).unwrap()).unwrap()
    }

    #[test]
    fn test_fold_to_u32_chunks() {
        assert_eq!(fold_to_u32_chunks(BigUint::zero()), 0);
        // Odd: XOR low chunk 0x3; remaining 0x2 is even: add 0x2.
        let v = (BigUint::from(2u32) << 32u32) + 3u32;
        assert_eq!(fold_to_u32_chunks(v), 0x3 + 0x2);
    }

    #[test]
    fn test_fold_to_u32_chunks_add_carries() {
        let v = (BigUint::from(0xFFFF_FFFEu32) << 32u32) | BigUint::from(0xFFFF_FFFEu32);
        assert_eq!(fold_to_u32_chunks(v), 0x1_FFFF_FFFC);
    }

    #[test]
    fn test_vector_has_one_slot_per_generator() {
        let mut t = rnt();
        let crypto = HashCrypto::new(&mut t, profile()).unwrap();
        assert_eq!(crypto.vector().len(), 11);
        assert!(crypto.vector().iter().all(|v| v.bits() <= 64));
    }

    #[test]
    fn test_rejects_width_beyond_slots() {
        let mut t = rnt();
        let mut crypto = HashCrypto::new(&mut t, profile()).unwrap();
        assert!(matches!(
            crypto.next(128, 1),
            Err(EvoCryptError::UnsupportedWidth { width: 128, .. })
        ));
        assert!(crypto.next(64, 1).unwrap().bits() <= 64);
        assert!(crypto.next(12, 2).unwrap().bits() <= 12);
    }

    #[test]
    fn test_deterministic() {
        let mut a = rnt();
        let mut b = rnt();
        let mut ca = HashCrypto::new(&mut a, profile()).unwrap();
        let mut cb = HashCrypto::new(&mut b, profile()).unwrap();
        for _ in 0..10 {
            assert_eq!(ca.next(32, 2).unwrap(), cb.next(32, 2).unwrap());
        }
    }
}
