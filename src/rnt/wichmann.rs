//! Wichmann-Hill generator used for table index selection.
//!
//! Not a keystream source. The entropy table uses it to pick bit indices
//! during the password hash, to advance `randint1` indices and to drive
//! `scramble_list`, so that bootstrap reads do not fall into cycles that
//! the table would otherwise feed back into itself.

use num_bigint::BigUint;

use crate::utils::fold::FoldInteger;

const MIX_0: [f64; 3] = [171.0, 172.0, 170.0];
const MIX_1: [f64; 3] = [177.0, 176.0, 178.0];
const MIX_2: [f64; 3] = [2.0, 35.0, 63.0];
const MODULI: [f64; 3] = [30269.0, 30307.0, 30323.0];

/// Scale applied to the fractional accumulator to produce 32 bits.
const FRACTION_SCALE: f64 = 4_294_967_295.0;

/// Upper bound on 32-bit passes per draw; widths used here need at most a
/// handful.
const MAX_PASSES: usize = 64;

/// Three-seed Wichmann-Hill generator with a folded wide output.
#[derive(Debug, Clone)]
pub struct WichmannHill {
    seeds: [f64; 3],
    fold: FoldInteger,
}

impl WichmannHill {
    /// Creates a generator from three integer seeds.
    pub fn new(seeds: [u64; 3]) -> Self {
        WichmannHill {
            seeds: seeds.map(|s| s as f64),
            fold: FoldInteger::new(),
        }
    }

    /// Returns a value below `2^int_width`.
    ///
    /// Concatenates 32-bit slices of the running fractional sum until the
    /// result reaches `int_width` bits, then folds it down.
    ///
    /// # Parameters
    /// - `steps`: Seed updates per 32-bit slice.
    /// - `int_width`: Output width in bits.
    pub fn next(&mut self, steps: usize, int_width: u32) -> BigUint {
        let desired = BigUint::from(1u32) << int_width;
        let mut temp = 0.0f64;
        let mut value = BigUint::default();

        for _ in 0..MAX_PASSES {
            if value >= desired {
                break;
            }
            for _ in 0..steps {
                for (i, seed) in self.seeds.iter_mut().enumerate() {
                    let mut next =
                        MIX_0[i] * seed.rem_euclid(MIX_1[i]) - MIX_2[i] * (*seed / MIX_1[i]);
                    if next < 0.0 {
                        next += MODULI[i];
                    }
                    temp += next / MODULI[i];
                    *seed = next;
                }
            }
            let slice = (temp.fract() * FRACTION_SCALE).abs() as u64;
            value = (value << 32u32) | BigUint::from(slice);
        }
        self.fold.fold_it(&value, int_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_fits_width() {
        let mut wh = WichmannHill::new([12345, 67890, 13579]);
        for width in [1u32, 8, 15, 32, 64, 100] {
            let v = wh.next(1, width);
            assert!(v.bits() <= u64::from(width), "width {} got {} bits", width, v.bits());
        }
    }

    #[test]
    fn test_deterministic_for_same_seeds() {
        let mut a = WichmannHill::new([1, 2, 3]);
        let mut b = WichmannHill::new([1, 2, 3]);
        for _ in 0..50 {
            assert_eq!(a.next(1, 32), b.next(1, 32));
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = WichmannHill::new([1, 2, 3]);
        let mut b = WichmannHill::new([1, 2, 4]);
        let seq_a: Vec<BigUint> = (0..8).map(|_| a.next(1, 32)).collect();
        let seq_b: Vec<BigUint> = (0..8).map(|_| b.next(1, 32)).collect();
        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn test_spread_over_small_range() {
        let mut wh = WichmannHill::new([271_828, 314_159, 161_803]);
        let mut seen = [false; 16];
        for _ in 0..400 {
            let v = wh.next(1, 32);
            seen[(v.iter_u32_digits().next().unwrap_or(0) % 16) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "some residues never drawn: {:?}", seen);
    }
}
