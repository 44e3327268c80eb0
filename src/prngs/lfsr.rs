//! Galois linear feedback shift register.
//!
//! Tap sets are quadruples of 1-based bit positions; the register's top
//! bit is always tapped as well. Some tap sets cycle far sooner than a
//! maximal-length register would, so whenever the register returns to its
//! seed the generator moves on to the next tap set and keeps its state.

use num_bigint::BigUint;
use tracing::debug;

use super::{scaled_steps, Prng};
use crate::error::{EvoCryptError, Result};
use crate::rnt::EntropyTable;
use crate::utils::bits::low_u64;
use crate::utils::fold::FoldInteger;

type Taps = (u32, u32, u32, u32);

#[rustfmt::skip]
pub const LFSR_TAPS_32: [Taps; 62] = [
    (18,  2,  7, 13), (13,  3,  4,  9), (24,  3, 11, 12), (10,  4,  2,  6),
    (16,  4,  2, 12), (11,  5,  4,  3), (17,  5,  4,  6), (12,  5, 11,  9),
    (23,  5, 11, 12), (23,  6,  7,  8), (14,  8,  2,  9), (22,  8,  7,  4),
    (21,  8, 11,  4), (10,  9,  8,  2), (22,  9, 11,  9), ( 3, 10,  4, 15),
    (24, 10,  7,  8), (21, 10,  8,  4), (12, 10,  8, 15), (17, 10, 11,  6),
    ( 3, 11,  4, 12), ( 9, 11,  4, 13), ( 9, 11,  7,  4), (11, 12,  4, 10),
    (20, 12,  7, 15), (17, 12, 11, 11), (21, 13,  4, 14), (11, 14,  8,  7),
    ( 6, 14,  8, 13), (20, 15,  7, 13), (12, 16,  2, 10), ( 4, 16,  8,  3),
    (22, 17,  4,  6), (21, 17,  4, 13), (20, 17,  7,  8), (19, 17, 11,  6),
    ( 4, 17, 11,  7), (12, 17, 11, 15), (15, 18,  4,  9), (17, 18,  4, 15),
    (12, 18,  7,  4), (15, 18,  8, 11), ( 6, 18, 11, 13), ( 8, 19,  2,  9),
    (13, 19,  4,  2), ( 5, 19,  8,  3), ( 6, 19,  8, 11), (24, 19, 11,  5),
    ( 6, 20,  2, 10), (13, 20,  4, 10), (24, 21,  2,  7), (14, 21,  8, 13),
    (10, 22,  8, 13), ( 7, 22,  8, 14), (15, 23,  8,  5), ( 9, 23, 11,  4),
    (20, 24,  4,  8), (16, 24,  4, 14), (20, 24,  4, 14), (23, 24,  7,  3),
    (14, 24,  8, 10), (16, 24, 11, 12),
];

#[rustfmt::skip]
pub const LFSR_TAPS_64: [Taps; 8] = [
    (18, 28,  7,  8), (26, 20, 11,  7), (19, 25, 12,  9), (18, 22, 16,  6),
    (18, 22, 16,  6), (30, 28, 17,  9), (17, 28, 18,  6), (12,  8, 22,  9),
];

/// Feedback mask for a tap set in a `width`-bit register.
pub fn tap_mask(taps: Taps, width: u32) -> u64 {
    let (a, b, c, d) = taps;
    [a, b, c, d]
        .iter()
        .fold(1u64 << (width - 1), |mask, &tap| mask | (1u64 << (tap - 1)))
}

/// 32- or 64-bit Galois LFSR with tap rotation on cycle.
#[derive(Debug, Clone)]
pub struct Lfsr {
    width: u32,
    taps: &'static [Taps],
    tap_index: usize,
    tap_mask: u64,
    seed: u64,
    lfsr: u64,
    period: u64,
    rounds: u32,
    fold: FoldInteger,
}

impl Lfsr {
    /// Seeds the register and picks the starting tap set from the
    /// password hash. A zero seed is replaced by 1.
    ///
    /// # Errors
    /// Returns [`EvoCryptError::UnsupportedWidth`] unless `width` is 32 or 64.
    pub fn new(rnt: &mut EntropyTable, width: u32) -> Result<Self> {
        let taps: &'static [Taps] = match width {
            32 => &LFSR_TAPS_32,
            64 => &LFSR_TAPS_64,
            _ => {
                return Err(EvoCryptError::UnsupportedWidth {
                    width,
                    reason: "LFSR registers are 32 or 64 bits wide",
                })
            }
        };
        let password_hash = rnt.password_hash();
        let tap_index = low_u64(&(password_hash % taps.len())) as usize;
        let mask = if width == 64 { u64::MAX } else { (1u64 << width) - 1 };
        let seed = low_u64(password_hash) & mask;
        Ok(Self::with_state(
            width,
            taps,
            tap_index,
            seed,
            rnt.paranoia_level().rounds() as u32,
        ))
    }

    fn with_state(width: u32, taps: &'static [Taps], tap_index: usize, seed: u64, rounds: u32) -> Self {
        let seed = if seed == 0 { 1 } else { seed };
        Lfsr {
            width,
            taps,
            tap_index,
            tap_mask: tap_mask(taps[tap_index], width),
            seed,
            lfsr: seed,
            period: 0,
            rounds,
            fold: FoldInteger::new(),
        }
    }

    /// Index of the tap set currently in use.
    pub fn tap_index(&self) -> usize {
        self.tap_index
    }

    /// Shifts once and returns the bit shifted out.
    fn clock(&mut self) -> u64 {
        self.period += 1;
        let bit = self.lfsr & 1;
        self.lfsr >>= 1;
        if bit == 1 {
            self.lfsr ^= self.tap_mask;
        }
        if self.lfsr == self.seed {
            debug!(
                width = self.width,
                tap_index = self.tap_index,
                period = self.period,
                "LFSR cycled back to its seed, rotating taps"
            );
            self.period = 0;
            self.tap_index = (self.tap_index + 1) % self.taps.len();
            self.tap_mask = tap_mask(self.taps[self.tap_index], self.width);
        }
        bit
    }

    /// Clocks `1 + cycles * paranoia` times and returns the last bit.
    fn next_bit(&mut self, cycles: u32) -> u64 {
        let mut bit = 0;
        for _ in 0..1 + scaled_steps(cycles, self.rounds) {
            bit = self.clock();
        }
        bit
    }
}

impl Prng for Lfsr {
    fn name(&self) -> &'static str {
        "lfsr"
    }

    fn accumulate(&mut self, acc: &mut BigUint, bit_width: u32, steps: u32) {
        *acc <<= 32u32;
        for _ in 0..bit_width {
            *acc <<= 1u32;
            *acc += self.next_bit(steps);
        }
    }

    fn finish(&mut self, acc: &BigUint, bit_width: u32) -> BigUint {
        self.fold.fold_it(acc, bit_width)
    }

    fn advance(&mut self, steps: u32) {
        for _ in 0..scaled_steps(steps, self.rounds) {
            self.clock();
        }
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

    #[test]
    fn test_tap_mask_includes_top_bit() {
        assert_eq!(tap_mask((18, 2, 7, 13), 32), 0x8002_1042);
        assert_eq!(tap_mask((18, 28, 7, 8), 64) >> 63, 1);
    }

    #[test]
    fn test_rejects_other_widths() {
        let mut t = rnt();
        assert!(matches!(
            Lfsr::new(&mut t, 48),
            Err(EvoCryptError::UnsupportedWidth { width: 48, .. })
        ));
    }

    #[test]
    fn test_zero_seed_replaced() {
        let lfsr = Lfsr::with_state(32, &LFSR_TAPS_32, 0, 0, 1);
        assert_eq!(lfsr.seed, 1);
        assert_eq!(lfsr.lfsr, 1);
    }

    #[test]
    fn test_galois_shift() {
        let mut lfsr = Lfsr::with_state(32, &LFSR_TAPS_32, 0, 0b110, 1);
        assert_eq!(lfsr.clock(), 0);
        assert_eq!(lfsr.lfsr, 0b11);
        assert_eq!(lfsr.clock(), 1);
        assert_eq!(lfsr.lfsr, 0b1 ^ 0x8002_1042);
    }

    #[test]
    fn test_cycle_rotates_taps() {
        // State 1 shifts to exactly the tap mask, which is the seed here.
        let mask = tap_mask(LFSR_TAPS_64[7], 64);
        let mut lfsr = Lfsr::with_state(64, &LFSR_TAPS_64, 7, mask, 1);
        lfsr.lfsr = 1;
        lfsr.clock();
        assert_eq!(lfsr.tap_index(), 0);
        assert_eq!(lfsr.tap_mask, tap_mask(LFSR_TAPS_64[0], 64));
        assert_eq!(lfsr.lfsr, mask);
    }

    #[test]
    fn test_output_fits_width() {
        let mut t = rnt();
        for width in [32u32, 64] {
            let mut lfsr = Lfsr::new(&mut t, width).unwrap();
            for bits in [8u32, 32, 64] {
                assert!(lfsr.next(bits, 1).unwrap().bits() <= u64::from(bits));
            }
        }
    }
}
