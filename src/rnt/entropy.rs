//! The entropy table (RNT): passphrase bootstrap and table-backed draws.
//!
//! Construction runs a fixed sequence whose order matters:
//!
//! ```text
//! seed words ──copy──► BitTable (4096 bytes)
//! passphrase ──sum/mix──► WichmannHill seeds
//! passphrase × table ──XOR 64-bit slices──► password_hash
//! password_hash ──slices──► four randint indices
//! MixHash(Hash0, 64, 19) over the table
//! paranoia rounds: randint ─► hash ─► password_hash += digest ─► new_rnt
//! ```
//!
//! After bootstrap the table is only read. `password_hash` never changes.

use num_bigint::BigUint;
use num_traits::Zero;
use tracing::{debug, trace};

use super::table::BitTable;
use super::wichmann::WichmannHill;
use crate::config::{validate_table_bytes, ParanoiaLevel, SystemType, MIN_PASSPHRASE_CHARS, MIN_TABLE_BYTES};
use crate::error::{EvoCryptError, Result};
use crate::hashes::{HashVariant, MixHash};
use crate::utils::bits::{low_u64, mask_to};
use crate::utils::fold::FoldInteger;

/// Words appended past the addressable range by `new_rnt`, enough for a
/// read of the widest integers used anywhere (1024 bits) to never wrap.
const MARGIN_WORDS: usize = 2 * (1024 / 8);

/// `new_rnt` folds a word into its running entropy once per this many words.
const REHASH_INTERVAL: usize = 16;

/// Width and depth of the table's own mixing hash.
const TABLE_HASH_WIDTH: u32 = 64;
const TABLE_HASH_DEPTH: usize = 19;

/// Source of bootstrap randomness for hashes and generators.
///
/// Implemented by the full [`EntropyTable`] and by its inner state while
/// the table's own hash is still being built.
pub trait Entropy {
    /// Returns a value below `2^field_width` drawn from the table.
    fn randint(&mut self, field_width: u32) -> BigUint;

    /// The fixed password hash.
    fn password_hash(&self) -> &BigUint;
}

// ──────────────────────────── RandomCore ────────────────────────────

/// Table, index walkers and password hash: everything except the mixing
/// hash that `next_random_value` drives.
#[derive(Debug, Clone)]
pub(crate) struct RandomCore {
    table: BitTable,
    wichmann: WichmannHill,
    fold: FoldInteger,
    password_hash: BigUint,
    paranoia_level: ParanoiaLevel,
    randint_indices: [u64; 4],
    randint_hash: BigUint,
    randint_calls: u64,
}

impl RandomCore {
    /// Steps 1 to 4 of the bootstrap.
    fn bootstrap(passphrase: &[u64], paranoia_level: ParanoiaLevel) -> Self {
        let table = BitTable::from_seed(MIN_TABLE_BYTES);

        let sum = passphrase.iter().fold(0u64, |acc, &c| acc.wrapping_add(c));
        let first = sum.wrapping_mul(passphrase[1]).wrapping_add(passphrase[3]);
        let second = sum.wrapping_add(passphrase[5]).wrapping_mul(passphrase[7]);
        let third = sum.wrapping_mul(passphrase[2]).wrapping_add(passphrase[4]);

        let mut core = RandomCore {
            table,
            wichmann: WichmannHill::new([first, second, third]),
            fold: FoldInteger::new(),
            password_hash: BigUint::zero(),
            paranoia_level,
            randint_indices: [0; 4],
            randint_hash: BigUint::zero(),
            randint_calls: 0,
        };
        core.hash_passphrase(passphrase);

        let mask = core.table.bit_index_mask();
        let ph = low_u64(&core.password_hash);
        for (k, index) in core.randint_indices.iter_mut().enumerate() {
            *index = (ph >> (16 * k)) & mask;
        }
        core
    }

    /// Walks the passphrase, XOR-accumulating 64-bit table slices at
    /// Wichmann-Hill-driven indices into `password_hash`.
    fn hash_passphrase(&mut self, passphrase: &[u64]) {
        let bits = self.table.bits_in_mask();
        let mut bit_index = BigUint::from(1u32);
        for _ in 0..self.paranoia_level.rounds() {
            for &ch in passphrase {
                let step = &bit_index * ch * self.wichmann.next(1, bits);
                bit_index += step;
                let slice = self.table.bit_string(self.table.wrap_index(&bit_index), 64);
                self.password_hash ^= slice;
            }
        }
    }

    /// Four Wichmann-Hill-advanced indices, combined as `a*b + (c^d)`.
    fn randint1(&mut self, field_width: u32) -> BigUint {
        let bits = self.table.bits_in_mask();
        let mut acc = BigUint::zero();
        for _ in 0..self.paranoia_level.rounds() {
            for index in self.randint_indices.iter_mut() {
                *index = index.wrapping_add(low_u64(&self.wichmann.next(1, bits)));
            }
            let [a, b, c, d] = self.randint_indices.map(|i| self.table.bit_string(i, field_width));
            acc += a * b + (c ^ d);
        }
        self.fold.fold_it(&acc, field_width)
    }

    /// Indirect reads: each index yields a 32-bit slice that is both the
    /// next read position and input to the index update.
    fn randint2(&mut self, field_width: u32) -> BigUint {
        let bits = self.table.bits_in_mask();
        let mask = self.table.bit_index_mask();
        let mut acc = BigUint::zero();
        for cycle in 0..self.paranoia_level.rounds() {
            let slices = self.randint_indices.map(|i| self.table.bit_string(i, 32));
            let targets = slices.clone().map(|s| low_u64(&s) & mask);

            // (own slice, partner slice, randint_hash shift)
            let mixes = [(0, 3, 0), (1, 2, cycle + 3), (2, 1, cycle + 7), (3, 0, cycle + 17)];
            for (k, partner, shift) in mixes {
                let sum = BigUint::from(self.randint_indices[k])
                    + &slices[k]
                    + &slices[partner]
                    + (&self.randint_hash >> shift);
                self.randint_indices[k] = low_u64(&self.fold.fold_it(&sum, bits));
            }

            let [a, b, c, d] = targets.map(|t| self.table.bit_string(t, field_width));
            acc += a * b + (c ^ d);
            self.randint_hash ^= &acc;
        }
        mask_to(&acc, field_width)
    }

    /// Permutes `items` by rejection sampling Wichmann-Hill draws.
    ///
    /// Draws `next(1, 32) % len` until every index has appeared once and
    /// emits items in first-drawn order.
    fn scramble_list<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let len = items.len();
        let mut order: Vec<usize> = Vec::with_capacity(len);
        let mut placed = vec![false; len];
        while order.len() < len {
            let draw = low_u64(&self.wichmann.next(1, 32)) as usize % len;
            if !placed[draw] {
                placed[draw] = true;
                order.push(draw);
            }
        }
        order.into_iter().map(|i| items[i].clone()).collect()
    }
}

impl Entropy for RandomCore {
    fn randint(&mut self, field_width: u32) -> BigUint {
        self.randint_calls += 1;
        if self.randint_calls & 1 == 1 {
            self.randint1(field_width)
        } else {
            self.randint2(field_width)
        }
    }

    fn password_hash(&self) -> &BigUint {
        &self.password_hash
    }
}

// ─────────────────────────── EntropyTable ───────────────────────────

/// Passphrase-derived table of random words plus the draws built on it.
///
/// # Examples
///
/// ```
/// use evocrypt::config::{ParanoiaLevel, SystemType};
/// use evocrypt::rnt::EntropyTable;
///
/// let level = ParanoiaLevel::new(1).unwrap();
/// let a = EntropyTable::new(4096, level, SystemType::Cellphone, "correct horse").unwrap();
/// let b = EntropyTable::new(4096, level, SystemType::Cellphone, "correct horse").unwrap();
/// assert_eq!(a.password_hash(), b.password_hash());
/// ```
#[derive(Debug, Clone)]
pub struct EntropyTable {
    core: RandomCore,
    hash: MixHash,
    system_type: SystemType,
    table_bytes: usize,
}

impl EntropyTable {
    /// Builds and bootstraps a table from a passphrase.
    ///
    /// # Parameters
    /// - `table_bytes`: Final addressable table size (power of two, at least 4096).
    /// - `paranoia_level`: Number of passphrase passes and rebuild rounds.
    /// - `system_type`: Profile key carried for the facade.
    /// - `passphrase`: At least 8 characters.
    ///
    /// # Errors
    /// - [`EvoCryptError::TableSizeNotPowerOfTwo`] or [`EvoCryptError::TableTooSmall`].
    /// - [`EvoCryptError::PassphraseTooShort`].
    pub fn new(
        table_bytes: usize,
        paranoia_level: ParanoiaLevel,
        system_type: SystemType,
        passphrase: &str,
    ) -> Result<Self> {
        validate_table_bytes(table_bytes)?;
        let chars: Vec<u64> = passphrase.chars().map(|c| u64::from(u32::from(c))).collect();
        if chars.len() < MIN_PASSPHRASE_CHARS {
            return Err(EvoCryptError::PassphraseTooShort {
                min: MIN_PASSPHRASE_CHARS,
                actual: chars.len(),
            });
        }

        let mut core = RandomCore::bootstrap(&chars, paranoia_level);
        let hash = MixHash::new(HashVariant::Hash0, &mut core, TABLE_HASH_WIDTH, TABLE_HASH_DEPTH);
        let mut rnt = EntropyTable {
            core,
            hash,
            system_type,
            table_bytes,
        };

        for round in 0..paranoia_level.rounds() {
            let draw = rnt.core.randint(64);
            rnt.hash.update_int(&draw, &mut rnt.core);
            rnt.core.password_hash += rnt.hash.intdigest();
            let seed = rnt.core.password_hash.clone();
            rnt.new_rnt(&seed, table_bytes);
            trace!(round, "entropy table rebuilt");
        }
        debug!(
            table_bytes,
            paranoia_level = paranoia_level.get(),
            system_type = %system_type,
            "entropy table bootstrapped"
        );
        Ok(rnt)
    }

    /// Regenerates the table in place from `entropy`.
    ///
    /// Draws `target_bytes / 8` words plus a read margin with
    /// [`next_random_value`](Self::next_random_value), folding every 16th
    /// word into a fresh hash whose digest becomes the running entropy.
    /// Sizes below 4096 bytes are raised to 4096; `target_bytes` must be a
    /// power of two.
    pub fn new_rnt(&mut self, entropy: &BigUint, target_bytes: usize) {
        let target_bytes = target_bytes.max(MIN_TABLE_BYTES);
        let mut rehash = MixHash::new(HashVariant::Hash0, &mut self.core, TABLE_HASH_WIDTH, TABLE_HASH_DEPTH);
        let word_count = target_bytes / 8 + MARGIN_WORDS;
        let mut entropy = entropy.clone();
        let mut words = Vec::with_capacity(word_count);

        for i in 0..word_count {
            let value = self.next_random_value(&(&entropy + i), 64);
            if i % REHASH_INTERVAL == REHASH_INTERVAL - 1 {
                rehash.update_int(&value, &mut self.core);
                entropy = rehash.intdigest();
            }
            words.push(low_u64(&value));
        }
        self.core.table = BitTable::from_words(words, target_bytes);
    }

    /// Derives a `width`-bit value from `entropy` through the table and the
    /// table's hash.
    ///
    /// Each paranoia round reads `width` bits at `entropy` (masked to the
    /// table), adds them to `entropy`, hashes the result and XORs the digest
    /// into the output.
    pub fn next_random_value(&mut self, entropy: &BigUint, width: u32) -> BigUint {
        let mut entropy = entropy.clone();
        let mut value = BigUint::zero();
        for _ in 0..self.core.paranoia_level.rounds() {
            let index = self.core.table.wrap_index(&entropy);
            entropy += self.core.table.bit_string(index, width);
            self.hash.update_int(&entropy, &mut self.core);
            value ^= self.hash.intdigest();
        }
        mask_to(&value, width)
    }

    /// Returns a value below `2^field_width`, alternating between the two
    /// index-walking algorithms call by call.
    pub fn randint(&mut self, field_width: u32) -> BigUint {
        self.core.randint(field_width)
    }

    /// Permutes `items` with the bootstrap Wichmann-Hill generator.
    pub fn scramble_list<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        self.core.scramble_list(items)
    }

    /// Reads `field_width` bits starting at `bit_index`.
    pub fn bit_string_from_randoms(&self, bit_index: u64, field_width: u32) -> BigUint {
        self.core.table.bit_string(bit_index, field_width)
    }

    /// The fixed password hash.
    pub fn password_hash(&self) -> &BigUint {
        &self.core.password_hash
    }

    /// The underlying bit table.
    pub fn table(&self) -> &BitTable {
        &self.core.table
    }

    pub fn paranoia_level(&self) -> ParanoiaLevel {
        self.core.paranoia_level
    }

    pub fn system_type(&self) -> SystemType {
        self.system_type
    }

    /// Requested addressable size in bytes.
    pub fn table_bytes(&self) -> usize {
        self.table_bytes
    }
}

impl Entropy for EntropyTable {
    fn randint(&mut self, field_width: u32) -> BigUint {
        self.core.randint(field_width)
    }

    fn password_hash(&self) -> &BigUint {
        &self.core.password_hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PASSPHRASE: &str = "correct horse battery staple";

    fn level(l: u8) -> ParanoiaLevel {
        ParanoiaLevel::new(l).unwrap()
    }

    fn rnt() -> EntropyTable {
        EntropyTable::new(4096, level(1), SystemType::Desktop, PASSPHRASE).unwrap()
    }

    #[test]
    fn test_rejects_non_power_of_two() {
        let result = EntropyTable::new(5000, level(1), SystemType::Desktop, PASSPHRASE);
        assert!(matches!(result, Err(EvoCryptError::TableSizeNotPowerOfTwo(5000))));
    }

    #[test]
    fn test_rejects_short_passphrase() {
        let result = EntropyTable::new(4096, level(1), SystemType::Desktop, "short");
        assert!(matches!(
            result,
            Err(EvoCryptError::PassphraseTooShort { min: 8, actual: 5 })
        ));
    }

    #[test]
    fn test_password_hash_nonzero() {
        assert!(!rnt().password_hash().is_zero());
    }

    #[test]
    fn test_table_geometry_after_bootstrap() {
        let t = rnt();
        assert_eq!(t.table().bit_size(), 4096 * 8);
        assert_eq!(t.table().words().len(), 4096 / 8 + MARGIN_WORDS);
        assert_eq!(t.table().bits_in_mask(), 15);
    }

    #[test]
    fn test_table_replaced_during_bootstrap() {
        let t = rnt();
        assert_ne!(&t.table().words()[..512], &super::super::seed_table::SEED_WORDS[..512]);
    }

    #[test]
    fn test_larger_table() {
        let t = EntropyTable::new(8192, level(1), SystemType::Desktop, PASSPHRASE).unwrap();
        assert_eq!(t.table().bit_size(), 8192 * 8);
        assert_eq!(t.table().bits_in_mask(), 16);
        assert_eq!(t.table().words().len(), 8192 / 8 + MARGIN_WORDS);
    }

    #[test]
    fn test_new_rnt_changes_words() {
        let mut t = rnt();
        let before = t.table().words().to_vec();
        let seed = t.password_hash().clone();
        t.new_rnt(&seed, 4096);
        assert_ne!(before, t.table().words());
        assert_eq!(before.len(), t.table().words().len());
    }

    #[test]
    fn test_new_rnt_clamps_small_target() {
        let mut t = rnt();
        t.new_rnt(&BigUint::from(99u32), 1024);
        assert_eq!(t.table().bit_size(), 4096 * 8);
    }

    #[test]
    fn test_randint_fits_width() {
        let mut t = rnt();
        for width in [1u32, 8, 31, 64, 128, 300] {
            for _ in 0..4 {
                assert!(t.randint(width).bits() <= u64::from(width));
            }
        }
    }

    #[test]
    fn test_next_random_value_fits_width() {
        let mut t = rnt();
        let mut entropy = t.password_hash().clone();
        for _ in 0..16 {
            let v = t.next_random_value(&entropy, 32);
            assert!(v.bits() <= 32);
            entropy += v + 1u32;
        }
    }

    #[test]
    fn test_scramble_list_is_permutation() {
        let mut t = rnt();
        let items: Vec<u32> = (0..40).collect();
        let mut scrambled = t.scramble_list(&items);
        assert_eq!(scrambled.len(), items.len());
        scrambled.sort_unstable();
        assert_eq!(scrambled, items);
    }

    #[test]
    fn test_scramble_empty_list() {
        let mut t = rnt();
        let empty: Vec<u8> = Vec::new();
        assert!(t.scramble_list(&empty).is_empty());
    }

    #[test]
    fn test_bit_string_reads_current_table() {
        let t = rnt();
        for i in [0usize, 7, 200, 511] {
            assert_eq!(
                t.bit_string_from_randoms(i as u64 * 64, 64),
                BigUint::from(t.table().words()[i])
            );
        }
    }

    #[test]
    fn test_paranoia_changes_hash() {
        let one = rnt();
        let two = EntropyTable::new(4096, level(2), SystemType::Desktop, PASSPHRASE).unwrap();
        assert_ne!(one.password_hash(), two.password_hash());
    }

    #[test]
    fn test_level_four_table_builds() {
        let t = EntropyTable::new(4096, level(4), SystemType::Cellphone, PASSPHRASE).unwrap();
        assert_eq!(t.paranoia_level().get(), 4);
        assert!(!t.password_hash().is_zero());
    }
}
