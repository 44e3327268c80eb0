//! Property tests for the integer utilities and the entropy table.

use num_bigint::BigUint;
use proptest::prelude::*;

use evocrypt::rnt::BitTable;
use evocrypt::utils::fold::{FoldAlgorithm, FoldInteger};
use evocrypt::utils::primes::{is_prime, next_higher_prime, next_lower_prime};
use evocrypt::{EntropyTable, ParanoiaLevel, SystemType};

fn big_from_bytes(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every fold result fits the requested width.
    #[test]
    fn fold_fits_width(bytes in proptest::collection::vec(any::<u8>(), 0..48), width in 1u32..160) {
        let value = big_from_bytes(&bytes);
        let limit = BigUint::from(1u32) << width;
        for algorithm in FoldAlgorithm::ALL {
            prop_assert!(algorithm.apply(&value, width) < limit);
        }
        let mut fold = FoldInteger::new();
        prop_assert!(fold.fold_it(&value, width) < limit);
    }

    /// Values already inside the width come back unchanged.
    #[test]
    fn fold_keeps_small_values(value in any::<u32>(), extra in 0u32..64) {
        let mut fold = FoldInteger::new();
        let value = BigUint::from(value);
        prop_assert_eq!(fold.fold_it(&value, 32 + extra), value);
    }

    #[test]
    fn next_higher_prime_is_prime_and_not_below(n in 2u64..(1u64 << 48)) {
        let n = BigUint::from(n);
        let p = next_higher_prime(&n).unwrap();
        prop_assert!(p >= n);
        prop_assert!(is_prime(&p));
    }

    #[test]
    fn next_lower_prime_is_prime_and_not_above(n in 3u64..(1u64 << 48)) {
        let n = BigUint::from(n);
        let p = next_lower_prime(&n).unwrap();
        prop_assert!(p <= n);
        prop_assert!(is_prime(&p));
    }

    /// A read never exceeds its width and is unaffected by whole-table offsets.
    #[test]
    fn bit_string_wraps(index in any::<u32>(), width in 1u32..200) {
        let table = BitTable::from_seed(4096);
        let index = u64::from(index);
        let value = table.bit_string(index, width);
        prop_assert!(value.bits() <= u64::from(width));
        prop_assert_eq!(value, table.bit_string(index + table.bit_size(), width));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    /// Scrambling permutes: same multiset, same length.
    #[test]
    fn scramble_is_permutation(len in 0usize..40, suffix in "[a-z]{8,12}") {
        let mut table =
            EntropyTable::new(4096, ParanoiaLevel::new(1).unwrap(), SystemType::Cellphone, &suffix)
                .unwrap();
        let items: Vec<usize> = (0..len).collect();
        let mut scrambled = table.scramble_list(&items);
        prop_assert_eq!(scrambled.len(), len);
        scrambled.sort_unstable();
        prop_assert_eq!(scrambled, items);
    }

    #[test]
    fn randint_fits_width(width in 1u32..256, passphrase in "[a-zA-Z0-9]{8,16}") {
        let mut table =
            EntropyTable::new(4096, ParanoiaLevel::new(1).unwrap(), SystemType::Cellphone, &passphrase)
                .unwrap();
        for _ in 0..4 {
            prop_assert!(table.randint(width).bits() <= u64::from(width));
        }
    }
}
