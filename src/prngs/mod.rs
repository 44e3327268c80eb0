//! Base generator family.
//!
//! Every generator exposes the same `next(bit_width, steps)` contract so
//! composites can mix them freely. A draw accumulates raw recurrence
//! output until the accumulator holds at least `2 * bit_width` bits, then
//! folds it down to `bit_width`.
//!
//! | Kind            | State                         | Needs constants |
//! |-----------------|-------------------------------|-----------------|
//! | `Lcg`           | lagged vector of `depth` ints | yes             |
//! | `Well512`       | lagged vector of `depth` ints | yes             |
//! | `KnuthMmix`     | one seed                      | no              |
//! | `KnuthNewLib`   | two seeds                     | no              |
//! | `LongPeriod5`   | five xorshift registers       | no              |
//! | `LongPeriod256` | 256 x u32 plus carry          | no              |
//! | `Cmwc4096`      | 4096 x u32 plus carry         | no              |
//! | `Lfsr`          | 32/64-bit Galois register     | no              |

pub mod knuth;
pub mod lagged;
pub mod lfsr;
pub mod marsaglia;

use num_bigint::BigUint;
use num_traits::Zero;
use tracing::{debug, trace};

use crate::constants::ConstantGenerator;
use crate::error::{EvoCryptError, Result};
use crate::rnt::EntropyTable;
use crate::utils::bits::{is_degenerate, power_of_two};

pub use knuth::{KnuthMmix, KnuthNewLib};
pub use lagged::{Lcg, Well512};
pub use lfsr::Lfsr;
pub use marsaglia::{Cmwc4096, LongPeriod256, LongPeriod5};

/// Upper bound on accumulation passes in one draw.
///
/// Recurrences whose state is narrower than `2 * bit_width` stop here and
/// fold what they have.
pub const MAX_ACCUMULATE_PASSES: u32 = 96;

/// Draw attempts before a generator is declared broken.
pub const MAX_DEGENERATE_RETRIES: u32 = 16;

/// Narrower draws hit 0 or all-ones by chance and are emitted as-is.
const DEGENERATE_CHECK_MIN_WIDTH: u32 = 32;

/// Recurrence iterations for `steps` requested steps at `rounds` per step.
///
/// Widened to `u64` so any `u32` step count at any paranoia level is honored
/// in full.
pub(crate) fn scaled_steps(steps: u32, rounds: u32) -> u64 {
    u64::from(steps) * u64::from(rounds)
}

/// A stateful base generator.
///
/// Implementors supply one accumulation pass, the final reduction and a
/// silent advance; [`next`](Prng::next) drives them under the bounded
/// retry policy.
pub trait Prng: Send {
    /// Short lowercase name, used in logs and errors.
    fn name(&self) -> &'static str;

    /// Runs one accumulation pass of `steps` recurrence steps into `acc`.
    fn accumulate(&mut self, acc: &mut BigUint, bit_width: u32, steps: u32);

    /// Reduces a finished accumulator to `bit_width` bits.
    fn finish(&mut self, acc: &BigUint, bit_width: u32) -> BigUint;

    /// Steps the recurrence `steps` times without producing output.
    fn advance(&mut self, steps: u32);

    /// Returns the next value below `2^bit_width`.
    ///
    /// # Parameters
    /// - `bit_width`: Output width in bits.
    /// - `steps`: Recurrence steps per accumulation pass.
    ///
    /// # Errors
    /// Returns [`EvoCryptError::DegenerateOutput`] when every attempt in
    /// the retry budget produced a zero accumulator or, for widths of 32
    /// bits and more, a folded value of 0 or all-ones.
    fn next(&mut self, bit_width: u32, steps: u32) -> Result<BigUint> {
        let target = power_of_two(bit_width.saturating_mul(2));
        for attempt in 0..MAX_DEGENERATE_RETRIES {
            let mut acc = BigUint::zero();
            let mut passes = 0;
            while acc < target && passes < MAX_ACCUMULATE_PASSES {
                self.accumulate(&mut acc, bit_width, steps);
                passes += 1;
            }
            if acc.is_zero() {
                debug!(generator = self.name(), attempt, "zero accumulator, retrying");
                continue;
            }
            let value = self.finish(&acc, bit_width);
            if bit_width >= DEGENERATE_CHECK_MIN_WIDTH && is_degenerate(&value, bit_width) {
                debug!(generator = self.name(), attempt, bit_width, "degenerate output, retrying");
                continue;
            }
            return Ok(value);
        }
        Err(EvoCryptError::DegenerateOutput {
            generator: self.name(),
            retries: MAX_DEGENERATE_RETRIES,
        })
    }
}

// ───────────────────────────── PrngKind ─────────────────────────────

/// Registry of base generator kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrngKind {
    Lcg,
    Well512,
    KnuthMmix,
    KnuthNewLib,
    LongPeriod5,
    LongPeriod256,
    Cmwc4096,
    Lfsr,
}

impl PrngKind {
    pub const ALL: [PrngKind; 8] = [
        PrngKind::Lcg,
        PrngKind::Well512,
        PrngKind::KnuthMmix,
        PrngKind::KnuthNewLib,
        PrngKind::LongPeriod5,
        PrngKind::LongPeriod256,
        PrngKind::Cmwc4096,
        PrngKind::Lfsr,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PrngKind::Lcg => "lcg",
            PrngKind::Well512 => "well512",
            PrngKind::KnuthMmix => "knuth_mmix",
            PrngKind::KnuthNewLib => "knuth_newlib",
            PrngKind::LongPeriod5 => "long_period_5",
            PrngKind::LongPeriod256 => "long_period_256",
            PrngKind::Cmwc4096 => "cmwc4096",
            PrngKind::Lfsr => "lfsr",
        }
    }

    /// Instantiates one generator of this kind.
    ///
    /// `Lcg` and `Well512` pull their next constant tuple from `constants`.
    /// `Lfsr` runs 64 bits wide when `integer_width >= 64`, otherwise 32.
    ///
    /// # Errors
    /// Propagates prime-search and constant-sequence failures.
    pub fn build(
        self,
        rnt: &mut EntropyTable,
        integer_width: u32,
        depth: usize,
        constants: &mut ConstantGenerator,
    ) -> Result<Box<dyn Prng>> {
        let prng: Box<dyn Prng> = match self {
            PrngKind::Lcg => Box::new(Lcg::new(rnt, integer_width, depth, constants.draw()?)),
            PrngKind::Well512 => Box::new(Well512::new(rnt, integer_width, depth, constants.draw()?)),
            PrngKind::KnuthMmix => Box::new(KnuthMmix::new(rnt, integer_width)),
            PrngKind::KnuthNewLib => Box::new(KnuthNewLib::new(rnt, integer_width)),
            PrngKind::LongPeriod5 => Box::new(LongPeriod5::new(rnt, integer_width)),
            PrngKind::LongPeriod256 => Box::new(LongPeriod256::new(rnt)?),
            PrngKind::Cmwc4096 => Box::new(Cmwc4096::new(rnt)?),
            PrngKind::Lfsr => {
                let width = if integer_width >= 64 { 64 } else { 32 };
                Box::new(Lfsr::new(rnt, width)?)
            }
        };
        trace!(kind = self.name(), integer_width, depth, "base generator built");
        Ok(prng)
    }
}

// ──────────────────────────── PrngFamily ────────────────────────────

/// Scrambled round-robin dispenser of base generators.
pub struct PrngFamily {
    kinds: Vec<PrngKind>,
    next_index: usize,
    integer_width: u32,
    depth: usize,
    constants: ConstantGenerator,
}

impl PrngFamily {
    /// Scrambles the kind registry and prepares a constant sequence long
    /// enough for `count` generators.
    ///
    /// # Errors
    /// Propagates [`ConstantGenerator::new`] failures.
    pub fn new(
        rnt: &mut EntropyTable,
        integer_width: u32,
        depth: usize,
        count: usize,
    ) -> Result<Self> {
        let kinds = rnt.scramble_list(&PrngKind::ALL);
        let constants = ConstantGenerator::new(rnt, integer_width, count)?;
        Ok(PrngFamily {
            kinds,
            next_index: 0,
            integer_width,
            depth,
            constants,
        })
    }

    /// The kinds in dispensing order.
    pub fn order(&self) -> &[PrngKind] {
        &self.kinds
    }

    /// Builds the next generator in rotation.
    pub fn next_prng(&mut self, rnt: &mut EntropyTable) -> Result<Box<dyn Prng>> {
        let kind = self.kinds[self.next_index];
        self.next_index = (self.next_index + 1) % self.kinds.len();
        kind.build(rnt, self.integer_width, self.depth, &mut self.constants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ParanoiaLevel, SystemType};
    use crate::utils::fold::FoldInteger;

    fn rnt() -> EntropyTable {
        EntropyTable::new(
            4096,
            ParanoiaLevel::new(1).unwrap(),
            SystemType::Cellphone,
            "correct horse battery staple",
        )
        .unwrap()
    }

    /// Always accumulates zero.
    struct Stuck;

    impl Prng for Stuck {
        fn name(&self) -> &'static str {
            "stuck"
        }

        fn accumulate(&mut self, _acc: &mut BigUint, _bit_width: u32, _steps: u32) {}

        fn finish(&mut self, acc: &BigUint, _bit_width: u32) -> BigUint {
            acc.clone()
        }

        fn advance(&mut self, _steps: u32) {}
    }

    /// Accumulates all-ones, which folds to all-ones at the XOR width.
    struct Saturated {
        fold: FoldInteger,
        passes: u32,
    }

    impl Prng for Saturated {
        fn name(&self) -> &'static str {
            "saturated"
        }

        fn accumulate(&mut self, acc: &mut BigUint, bit_width: u32, _steps: u32) {
            self.passes += 1;
            *acc = crate::utils::bits::low_mask(bit_width);
        }

        fn finish(&mut self, acc: &BigUint, bit_width: u32) -> BigUint {
            self.fold.fold_it(acc, bit_width)
        }

        fn advance(&mut self, _steps: u32) {}
    }

    #[test]
    fn test_scaled_steps_does_not_wrap() {
        let rounds = ParanoiaLevel::new(3).unwrap().rounds() as u32;
        assert_eq!(scaled_steps(u32::MAX, rounds), 3 * u64::from(u32::MAX));
        assert_eq!(scaled_steps(u32::MAX / 2 + 1, rounds), 3 << 31);
        assert_eq!(scaled_steps(0, rounds), 0);
    }

    #[test]
    fn test_zero_accumulator_exhausts_retries() {
        let err = Stuck.next(64, 1).unwrap_err();
        assert_eq!(
            err,
            EvoCryptError::DegenerateOutput {
                generator: "stuck",
                retries: MAX_DEGENERATE_RETRIES
            }
        );
    }

    #[test]
    fn test_all_ones_retried_at_wide_widths() {
        let mut prng = Saturated {
            fold: FoldInteger::new(),
            passes: 0,
        };
        assert!(prng.next(32, 1).is_err());
        assert_eq!(prng.passes, MAX_DEGENERATE_RETRIES * MAX_ACCUMULATE_PASSES);
    }

    #[test]
    fn test_all_ones_emitted_at_narrow_widths() {
        let mut prng = Saturated {
            fold: FoldInteger::new(),
            passes: 0,
        };
        assert_eq!(prng.next(8, 1).unwrap(), BigUint::from(0xFFu32));
    }

    #[test]
    fn test_every_kind_produces_in_range_values() {
        let mut t = rnt();
        let mut constants = ConstantGenerator::new(&mut t, 64, 4).unwrap();
        for kind in PrngKind::ALL {
            let mut prng = kind.build(&mut t, 64, 17, &mut constants).unwrap();
            assert_eq!(prng.name(), kind.name());
            for width in [1u32, 8, 32, 64] {
                let v = prng.next(width, 1).unwrap();
                assert!(v.bits() <= u64::from(width), "{} width {}", kind.name(), width);
            }
        }
    }

    #[test]
    fn test_family_rotates_through_all_kinds() {
        let mut t = rnt();
        let mut family = PrngFamily::new(&mut t, 64, 17, 8).unwrap();
        let mut order = family.order().to_vec();
        order.sort_by_key(|k| k.name());
        let mut all = PrngKind::ALL.to_vec();
        all.sort_by_key(|k| k.name());
        assert_eq!(order, all);

        let names: Vec<&str> = (0..8)
            .map(|_| family.next_prng(&mut t).unwrap().name())
            .collect();
        let expected: Vec<&str> = family.order().iter().map(|k| k.name()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_family_is_deterministic() {
        let mut a = rnt();
        let mut b = rnt();
        let mut fa = PrngFamily::new(&mut a, 64, 17, 4).unwrap();
        let mut fb = PrngFamily::new(&mut b, 64, 17, 4).unwrap();
        assert_eq!(fa.order(), fb.order());
        for _ in 0..3 {
            let mut pa = fa.next_prng(&mut a).unwrap();
            let mut pb = fb.next_prng(&mut b).unwrap();
            for _ in 0..5 {
                assert_eq!(pa.next(64, 1).unwrap(), pb.next(64, 1).unwrap());
            }
        }
    }
}
