//! MMIX-constant congruential generators.
//!
//! Both run the Knuth MMIX recurrence `s = 6364136223846793005 * s +
//! 1442695040888963407` on `integer_width`-bit seeds. `KnuthNewLib` adds a
//! second seed with increment 1 (the NewLib/Musl pairing) whose high
//! halves are spliced into the output.

use num_bigint::BigUint;
use num_traits::Zero;

use super::{scaled_steps, Prng};
use crate::rnt::EntropyTable;
use crate::utils::bits::{low_mask, low_u64};
use crate::utils::fold::FoldInteger;

const MMIX_MULTIPLIER: u64 = 6_364_136_223_846_793_005;
const MMIX_INCREMENT: u64 = 1_442_695_040_888_963_407;

/// Recurrence steps run right after seeding.
const WARMUP_STEPS: u32 = 40;

fn mmix(seed: &BigUint, increment: u64) -> BigUint {
    seed * MMIX_MULTIPLIER + increment
}

// ──────────────────────────── KnuthMmix ─────────────────────────────

/// Single-seed MMIX generator, XOR-accumulated.
#[derive(Debug, Clone)]
pub struct KnuthMmix {
    seed: BigUint,
    mask: BigUint,
    rounds: u32,
    fold: FoldInteger,
}

impl KnuthMmix {
    pub fn new(rnt: &mut EntropyTable, integer_width: u32) -> Self {
        let password_hash = rnt.password_hash().clone();
        let seed = rnt.next_random_value(&password_hash, integer_width);
        let mut prng = KnuthMmix {
            seed,
            mask: low_mask(integer_width),
            rounds: rnt.paranoia_level().rounds() as u32,
            fold: FoldInteger::new(),
        };
        prng.advance(WARMUP_STEPS);
        prng
    }
}

impl Prng for KnuthMmix {
    fn name(&self) -> &'static str {
        "knuth_mmix"
    }

    fn accumulate(&mut self, acc: &mut BigUint, _bit_width: u32, steps: u32) {
        for _ in 0..scaled_steps(steps, self.rounds) {
            self.seed = mmix(&self.seed, MMIX_INCREMENT);
            *acc ^= &self.seed;
        }
        *acc ^= &self.seed << 32u32;
        self.seed &= &self.mask;
    }

    fn finish(&mut self, acc: &BigUint, bit_width: u32) -> BigUint {
        self.fold.fold_it(acc, bit_width)
    }

    fn advance(&mut self, steps: u32) {
        for _ in 0..scaled_steps(steps, self.rounds) {
            self.seed = mmix(&self.seed, MMIX_INCREMENT) & &self.mask;
        }
    }
}

// ─────────────────────────── KnuthNewLib ────────────────────────────

/// Two-seed MMIX generator; the second seed uses increment 1 and is
/// stepped twice per output word.
#[derive(Debug, Clone)]
pub struct KnuthNewLib {
    seed0: BigUint,
    seed1: BigUint,
    mask: BigUint,
    rounds: u32,
    fold: FoldInteger,
}

impl KnuthNewLib {
    pub fn new(rnt: &mut EntropyTable, integer_width: u32) -> Self {
        let password_hash = rnt.password_hash().clone();
        let seed0 = rnt.next_random_value(&password_hash, integer_width);
        let seed1 = rnt.next_random_value(&password_hash, integer_width);
        let mut prng = KnuthNewLib {
            seed0,
            seed1,
            mask: low_mask(integer_width),
            rounds: rnt.paranoia_level().rounds() as u32,
            fold: FoldInteger::new(),
        };
        prng.advance(WARMUP_STEPS);
        prng
    }

    /// Bits 32..64 of the second seed.
    fn seed1_high(&self) -> u64 {
        low_u64(&self.seed1) >> 32
    }
}

impl Prng for KnuthNewLib {
    fn name(&self) -> &'static str {
        "knuth_newlib"
    }

    fn accumulate(&mut self, acc: &mut BigUint, _bit_width: u32, steps: u32) {
        for _ in 0..scaled_steps(steps, self.rounds) {
            self.seed0 = mmix(&self.seed0, MMIX_INCREMENT);
            self.seed1 = mmix(&self.seed1, 1);
            *acc ^= &self.seed0;
            *acc ^= BigUint::from(self.seed1_high());
            *acc <<= 32u32;
            self.seed1 = mmix(&self.seed1, 1);
            *acc += self.seed1_high();

            self.seed0 &= &self.mask;
            self.seed1 &= &self.mask;
        }
    }

    fn finish(&mut self, acc: &BigUint, bit_width: u32) -> BigUint {
        let mixed = &self.seed0 ^ acc;
        self.fold.fold_it(&mixed, bit_width)
    }

    fn advance(&mut self, steps: u32) {
        let mut scratch = BigUint::zero();
        for _ in 0..steps {
            self.accumulate(&mut scratch, 64, 1);
            scratch = BigUint::zero();
        }
    }
}
