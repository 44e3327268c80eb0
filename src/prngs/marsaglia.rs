//! Marsaglia's long-period generators.
//!
//! `LongPeriod5` is the k=5 xorshift (period about 2^160) on
//! `integer_width`-bit registers. `LongPeriod256` (multiply-with-carry,
//! lag 256) and `Cmwc4096` (complementary multiply-with-carry, lag 4096)
//! keep native 32-bit words and a 64-bit intermediate, as in the
//! published C versions.

use num_bigint::BigUint;

use super::{scaled_steps, Prng};
use crate::error::Result;
use crate::rnt::EntropyTable;
use crate::utils::bits::{low_mask, low_u64};
use crate::utils::fold::FoldInteger;
use crate::utils::primes::next_higher_prime;

/// Initial carries are primes just above `password_hash % CARRY_MODULUS`.
const CARRY_MODULUS: u32 = 809_430_000;

fn initial_carry(rnt: &EntropyTable) -> Result<u64> {
    let start = rnt.password_hash() % CARRY_MODULUS;
    Ok(low_u64(&next_higher_prime(&start)?))
}

// ─────────────────────────── LongPeriod5 ────────────────────────────

/// Five-register xorshift.
#[derive(Debug, Clone)]
pub struct LongPeriod5 {
    x: BigUint,
    y: BigUint,
    z: BigUint,
    w: BigUint,
    v: BigUint,
    mask: BigUint,
    rounds: u32,
    fold: FoldInteger,
}

impl LongPeriod5 {
    pub fn new(rnt: &mut EntropyTable, integer_width: u32) -> Self {
        let password_hash = rnt.password_hash().clone();
        let slice = |shift: u32| (&password_hash >> shift) & low_mask(32);
        let x = rnt.next_random_value(&password_hash, integer_width);
        let y = rnt.next_random_value(&slice(7), integer_width);
        let z = rnt.next_random_value(&slice(13), integer_width);
        let w = rnt.next_random_value(&slice(23), integer_width);
        let v = rnt.next_random_value(&slice(31), integer_width);
        LongPeriod5 {
            x,
            y,
            z,
            w,
            v,
            mask: low_mask(integer_width),
            rounds: rnt.paranoia_level().rounds() as u32,
            fold: FoldInteger::new(),
        }
    }

    fn step(&mut self) {
        let t = &self.x ^ (&self.x >> 7u32);
        self.x = std::mem::replace(&mut self.y, std::mem::take(&mut self.z));
        self.z = std::mem::take(&mut self.w);
        self.w = self.v.clone();
        let v = (&self.v ^ (&self.v << 6u32)) ^ (&t ^ (&t << 13u32));
        self.v = v & &self.mask;
    }
}

impl Prng for LongPeriod5 {
    fn name(&self) -> &'static str {
        "long_period_5"
    }

    fn accumulate(&mut self, acc: &mut BigUint, bit_width: u32, steps: u32) {
        *acc <<= 32u32;
        self.advance(steps);
        let odd = &self.y + &self.y + 1u32;
        *acc ^= (odd * &self.v) & low_mask(bit_width);
    }

    fn finish(&mut self, acc: &BigUint, bit_width: u32) -> BigUint {
        self.fold.fold_it(acc, bit_width)
    }

    fn advance(&mut self, steps: u32) {
        for _ in 0..scaled_steps(steps, self.rounds) {
            self.step();
        }
    }
}

// ────────────────────────── LongPeriod256 ───────────────────────────

const MWC256_MULTIPLIER: u64 = 809_430_660;
const MWC256_LAG: usize = 256;

/// Multiply-with-carry with a 256-word lag.
#[derive(Debug, Clone)]
pub struct LongPeriod256 {
    q: Vec<u32>,
    carry: u64,
    index: usize,
    rounds: u32,
    fold: FoldInteger,
}

impl LongPeriod256 {
    /// # Errors
    /// Propagates prime-search exhaustion for the initial carry.
    pub fn new(rnt: &mut EntropyTable) -> Result<Self> {
        let mut entropy = rnt.password_hash().clone();
        let mut q = Vec::with_capacity(MWC256_LAG);
        for _ in 0..MWC256_LAG {
            entropy = rnt.next_random_value(&entropy, 32);
            entropy ^= rnt.next_random_value(&entropy, 32);
            q.push(low_u64(&entropy) as u32);
        }
        Ok(LongPeriod256 {
            q,
            carry: initial_carry(rnt)?,
            index: MWC256_LAG - 1,
            rounds: rnt.paranoia_level().rounds() as u32,
            fold: FoldInteger::new(),
        })
    }

    fn step(&mut self) -> u32 {
        self.index = (self.index + 1) % MWC256_LAG;
        let t = MWC256_MULTIPLIER * u64::from(self.q[self.index]) + self.carry;
        self.carry = t >> 32;
        self.q[self.index] = t as u32;
        self.q[self.index]
    }
}

impl Prng for LongPeriod256 {
    fn name(&self) -> &'static str {
        "long_period_256"
    }

    fn accumulate(&mut self, acc: &mut BigUint, _bit_width: u32, steps: u32) {
        *acc <<= 32u32;
        for _ in 0..scaled_steps(steps, self.rounds) {
            *acc += self.step();
        }
    }

    fn finish(&mut self, acc: &BigUint, bit_width: u32) -> BigUint {
        self.fold.fold_it(acc, bit_width)
    }

    fn advance(&mut self, steps: u32) {
        for _ in 0..scaled_steps(steps, self.rounds) {
            self.step();
        }
    }
}

// ──────────────────────────── Cmwc4096 ──────────────────────────────

const CMWC_MULTIPLIER: u64 = 18_782;
const CMWC_R: u32 = 0xFFFF_FFFE;
const CMWC_LAG: usize = 4096;

/// Complementary multiply-with-carry with a 4096-word lag.
#[derive(Debug, Clone)]
pub struct Cmwc4096 {
    q: Vec<u32>,
    carry: u64,
    index: usize,
    rounds: u32,
    fold: FoldInteger,
}

impl Cmwc4096 {
    /// # Errors
    /// Propagates prime-search exhaustion for the initial carry.
    pub fn new(rnt: &mut EntropyTable) -> Result<Self> {
        let mut entropy = rnt.password_hash().clone();
        let mut q = Vec::with_capacity(CMWC_LAG);
        for _ in 0..CMWC_LAG {
            let draw = rnt.next_random_value(&entropy, 32);
            entropy += draw;
            q.push(low_u64(&entropy) as u32);
        }
        Ok(Cmwc4096 {
            q,
            carry: initial_carry(rnt)?,
            index: CMWC_LAG - 1,
            rounds: rnt.paranoia_level().rounds() as u32,
            fold: FoldInteger::new(),
        })
    }

    fn step(&mut self) -> u32 {
        self.index = (self.index + 1) & (CMWC_LAG - 1);
        let t = CMWC_MULTIPLIER * u64::from(self.q[self.index]) + self.carry;
        self.carry = t >> 32;
        let carry_low = self.carry as u32;
        let mut x = (t as u32).wrapping_add(carry_low);
        if x < carry_low {
            x = x.wrapping_add(1);
            self.carry += 1;
        }
        self.q[self.index] = CMWC_R.wrapping_sub(x);
        self.q[self.index]
    }
}

impl Prng for Cmwc4096 {
    fn name(&self) -> &'static str {
        "cmwc4096"
    }

    fn accumulate(&mut self, acc: &mut BigUint, _bit_width: u32, steps: u32) {
        *acc <<= 32u32;
        for _ in 0..scaled_steps(steps, self.rounds) {
            *acc += self.step();
        }
    }

    fn finish(&mut self, acc: &BigUint, bit_width: u32) -> BigUint {
        self.fold.fold_it(acc, bit_width)
    }

    fn advance(&mut self, steps: u32) {
        for _ in 0..scaled_steps(steps, self.rounds) {
            self.step();
        }
    }
}
