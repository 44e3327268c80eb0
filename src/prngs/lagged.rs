//! Lagged-vector generators: `Lcg` and `Well512`.
//!
//! Both keep `depth` integers of `integer_width` bits and a cursor, and
//! are parameterized by one [`GeneratorConstants`] tuple. They share the
//! seeding procedure: a hash absorbs the password hash and the constants,
//! then each slot is the running XOR of folded digests taken after the
//! hash has absorbed every earlier slot. Finally the generator is advanced
//! a password-derived number of steps below 1024.

use num_bigint::BigUint;

use super::Prng;
use crate::constants::GeneratorConstants;
use crate::hashes::HashFamily;
use crate::rnt::EntropyTable;
use crate::utils::bits::{low_mask, low_u64};
use crate::utils::fold::FoldInteger;

/// Spin-forward count is reduced modulo this.
const MAX_SPIN: u64 = 1024;

/// Seeded vector and constants shared by both recurrences.
#[derive(Debug, Clone)]
struct LaggedState {
    vector: Vec<BigUint>,
    index: usize,
    multiplier: BigUint,
    addition: BigUint,
    lag: usize,
    mask: BigUint,
    fold: FoldInteger,
}

impl LaggedState {
    /// Seeds the vector and returns it with the spin-forward count.
    fn seed(
        rnt: &mut EntropyTable,
        integer_width: u32,
        depth: usize,
        constants: GeneratorConstants,
    ) -> (Self, u32) {
        let depth = depth.max(1);
        let mut fold = FoldInteger::new();
        let mut hash = HashFamily::new(rnt, integer_width, depth).next_hash(rnt);

        let password_hash = rnt.password_hash().clone();
        hash.update_int(&password_hash, rnt);
        let params = format!("{}{}{}", constants.multiplier, constants.addition, constants.lag);
        hash.update_str(&params, rnt);

        let mut xor = fold.fold_it(&hash.intdigest(), integer_width);
        hash.update_int(&xor, rnt);

        let mut vector: Vec<BigUint> = Vec::with_capacity(depth);
        for _ in 0..depth {
            for earlier in &vector {
                hash.update_str(&earlier.to_string(), rnt);
            }
            xor ^= fold.fold_it(&hash.intdigest(), integer_width);
            vector.push(xor.clone());
        }

        let spin = low_u64(&(&xor & rnt.randint(integer_width))) % MAX_SPIN;
        let state = LaggedState {
            vector,
            index: 0,
            multiplier: constants.multiplier,
            addition: constants.addition,
            lag: (constants.lag % depth as u64) as usize,
            mask: low_mask(integer_width),
            fold,
        };
        (state, spin as u32)
    }

    fn depth(&self) -> usize {
        self.vector.len()
    }

    fn lagged_index(&self) -> usize {
        (self.index + self.lag) % self.depth()
    }
}

// ─────────────────────────────── Lcg ────────────────────────────────

/// Lagged linear congruential generator.
///
/// `v[i] = (v[(i + lag) % depth] * multiplier + addition) & mask`
#[derive(Debug, Clone)]
pub struct Lcg {
    state: LaggedState,
}

impl Lcg {
    /// Seeds a generator and spins it forward.
    ///
    /// # Parameters
    /// - `rnt`: Bootstrapped entropy table.
    /// - `integer_width`: Width of every vector slot in bits.
    /// - `depth`: Number of slots.
    /// - `constants`: This instance's multiplier, addition and lag.
    pub fn new(
        rnt: &mut EntropyTable,
        integer_width: u32,
        depth: usize,
        constants: GeneratorConstants,
    ) -> Self {
        let (state, spin) = LaggedState::seed(rnt, integer_width, depth, constants);
        let mut lcg = Lcg { state };
        lcg.advance(spin);
        lcg
    }

    fn step(&mut self) {
        let s = &mut self.state;
        let lagged = s.lagged_index();
        let next = (&s.vector[lagged] * &s.multiplier + &s.addition) & &s.mask;
        s.vector[s.index] = next;
        s.index = (s.index + 1) % s.depth();
    }

    /// The state vector, every slot below `2^integer_width`.
    pub fn vector(&self) -> &[BigUint] {
        &self.state.vector
    }
}

impl Prng for Lcg {
    fn name(&self) -> &'static str {
        "lcg"
    }

    fn accumulate(&mut self, acc: &mut BigUint, bit_width: u32, steps: u32) {
        *acc <<= 32u32;
        self.advance(steps);
        *acc += &self.state.vector[self.state.index] & low_mask(bit_width);
    }

    fn finish(&mut self, acc: &BigUint, bit_width: u32) -> BigUint {
        self.state.fold.fold_it(acc, bit_width)
    }

    fn advance(&mut self, steps: u32) {
        for _ in 0..steps {
            self.step();
        }
    }
}

// ───────────────────────────── Well512 ──────────────────────────────

/// WELL-style xor/shift recurrence over the lagged vector.
///
/// The multiplier serves as the modulus of the `<< 5` term. Two slots are
/// rewritten per step, the second `lag + 2` positions after the first.
#[derive(Debug, Clone)]
pub struct Well512 {
    state: LaggedState,
}

impl Well512 {
    /// Seeds a generator and spins it forward. See [`Lcg::new`].
    pub fn new(
        rnt: &mut EntropyTable,
        integer_width: u32,
        depth: usize,
        constants: GeneratorConstants,
    ) -> Self {
        let (state, spin) = LaggedState::seed(rnt, integer_width, depth, constants);
        let mut well = Well512 { state };
        well.advance(spin);
        well
    }

    fn step(&mut self) {
        let s = &mut self.state;
        let depth = s.depth();
        let vector_value = s.vector[s.lagged_index()].clone();
        let mut lagged_value = vector_value.clone();

        let b = &vector_value ^ &lagged_value ^ (&vector_value << 16u32) ^ (&lagged_value << 15u32);
        let shifted = &lagged_value >> 11u32;
        lagged_value ^= shifted;

        let old = std::mem::take(&mut s.vector[s.index]);
        s.vector[s.index] = (&b ^ &lagged_value) & &s.mask;
        let d = &old ^ ((&old << 5u32) % &s.multiplier);

        s.index = (s.index + s.lag + 2) % depth;
        let current = &s.vector[s.index];
        let next = current ^ &b ^ &d ^ (current << 2u32) ^ (&b << 18u32) ^ (&lagged_value << 28u32);
        s.vector[s.index] = next & &s.mask;
    }

    /// The state vector, every slot below `2^integer_width`.
    pub fn vector(&self) -> &[BigUint] {
        &self.state.vector
    }
}

impl Prng for Well512 {
    fn name(&self) -> &'static str {
        "well512"
    }

    fn accumulate(&mut self, acc: &mut BigUint, _bit_width: u32, steps: u32) {
        *acc <<= 32u32;
        self.advance(steps);
        *acc += &self.state.vector[self.state.index];
    }

    fn finish(&mut self, acc: &BigUint, bit_width: u32) -> BigUint {
        self.state.fold.fold_it(acc, bit_width)
    }

    fn advance(&mut self, steps: u32) {
        for _ in 0..steps {
            self.step();
        }
    }
}
