//! End-to-end keystream tests through the public API.
//!
//! Every scenario here builds two independent facades or tables from the
//! same inputs; nothing is shared between sender and receiver except the
//! passphrase and the profile.

use std::collections::HashSet;

use num_bigint::BigUint;
use tracing_subscriber::EnvFilter;

use evocrypt::cprngs::LcgCrypto;
use evocrypt::utils::bits::low_u64;
use evocrypt::{
    CompositeVariant, CryptoFacade, CryptoPrng, EntropyTable, EvoCryptError, ParanoiaLevel,
    Profile, SystemType,
};

const PASSPHRASE: &str = "correct horse battery staple";
const MESSAGE: &[u8] = b"this is a test case";

fn level(l: u8) -> ParanoiaLevel {
    ParanoiaLevel::new(l).unwrap()
}

/// Routes library logs to the test harness; `RUST_LOG=evocrypt=debug` to see them.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn table(passphrase: &str) -> EntropyTable {
    EntropyTable::new(4096, level(1), SystemType::Cellphone, passphrase).unwrap()
}

// ═══════════════════════════════════════════════════════════════════════
// Round trips
// ═══════════════════════════════════════════════════════════════════════

/// Four messages, each through a fresh composite from matching facades.
#[test]
fn desktop_round_trip_four_composites() {
    init_tracing();
    let mut sender = CryptoFacade::new(PASSPHRASE, SystemType::Desktop, level(1)).unwrap();
    let mut receiver = CryptoFacade::new(PASSPHRASE, SystemType::Desktop, level(1)).unwrap();

    for _ in 0..4 {
        let mut encoder = sender.next().unwrap();
        let mut decoder = receiver.next().unwrap();
        assert_eq!(encoder.variant(), decoder.variant());

        let cipher = encoder.encrypt(MESSAGE, 1).unwrap();
        assert_eq!(cipher.len(), MESSAGE.len());
        assert_ne!(cipher.as_slice(), MESSAGE);
        assert_eq!(decoder.decrypt(&cipher, 1).unwrap(), MESSAGE);
    }
}

/// A long stream split across several calls decrypts in one call.
#[test]
fn chunked_encrypt_matches_single_decrypt() {
    let mut sender = CryptoFacade::new(PASSPHRASE, SystemType::Cellphone, level(1)).unwrap();
    let mut receiver = CryptoFacade::new(PASSPHRASE, SystemType::Cellphone, level(1)).unwrap();
    let mut encoder = sender.next().unwrap();
    let mut decoder = receiver.next().unwrap();

    let plain: Vec<u8> = (0..=255u8).collect();
    let mut cipher = Vec::new();
    for chunk in plain.chunks(37) {
        cipher.extend(encoder.encrypt(chunk, 2).unwrap());
    }
    assert_eq!(decoder.decrypt(&cipher, 2).unwrap(), plain);
}

#[test]
fn every_variant_round_trips() {
    for variant in CompositeVariant::ALL {
        let mut a = CryptoFacade::new(PASSPHRASE, SystemType::Cellphone, level(1)).unwrap();
        let mut b = CryptoFacade::new(PASSPHRASE, SystemType::Cellphone, level(1)).unwrap();
        let mut encoder = a.build(variant).unwrap();
        let mut decoder = b.build(variant).unwrap();
        let cipher = encoder.encrypt(MESSAGE, 1).unwrap();
        assert_eq!(decoder.decrypt(&cipher, 1).unwrap(), MESSAGE, "{}", variant.name());
    }
}

/// Every variant at paranoia levels 1 through 3 for one system type.
fn round_trip_profile_matrix(system_type: SystemType) {
    init_tracing();
    let plain = MESSAGE.repeat(4);
    for l in 1..=3u8 {
        for variant in CompositeVariant::ALL {
            let mut a = CryptoFacade::new(PASSPHRASE, system_type, level(l)).unwrap();
            let mut b = CryptoFacade::new(PASSPHRASE, system_type, level(l)).unwrap();
            let mut encoder = a.build(variant).unwrap();
            let mut decoder = b.build(variant).unwrap();
            let cipher = encoder.encrypt(&plain, 2).unwrap();
            assert_eq!(
                decoder.decrypt(&cipher, 2).unwrap(),
                plain,
                "{} level {} {}",
                system_type,
                l,
                variant.name()
            );
        }
    }
}

#[test]
fn cellphone_round_trips_at_every_level() {
    round_trip_profile_matrix(SystemType::Cellphone);
}

#[test]
fn laptop_round_trips_at_every_level() {
    round_trip_profile_matrix(SystemType::Laptop);
}

#[test]
fn desktop_round_trips_at_every_level() {
    round_trip_profile_matrix(SystemType::Desktop);
}

/// 256 and 512-bit integers; slow outside release builds.
#[test]
#[ignore]
fn big_round_trips_at_every_level() {
    round_trip_profile_matrix(SystemType::Big);
}

#[test]
fn wrong_passphrase_does_not_decrypt() {
    let mut sender = CryptoFacade::new(PASSPHRASE, SystemType::Cellphone, level(1)).unwrap();
    let mut intruder =
        CryptoFacade::new("correct horse battery stapler", SystemType::Cellphone, level(1)).unwrap();
    let cipher = sender.next().unwrap().encrypt(MESSAGE, 1).unwrap();
    assert_ne!(intruder.next().unwrap().decrypt(&cipher, 1).unwrap(), MESSAGE);
}

// ═══════════════════════════════════════════════════════════════════════
// Determinism
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn entropy_tables_are_reproducible() {
    let mut a = table(PASSPHRASE);
    let mut b = table(PASSPHRASE);
    assert_eq!(a.password_hash(), b.password_hash());
    assert_eq!(a.table().words(), b.table().words());
    for width in [1, 8, 33, 64, 200] {
        assert_eq!(a.randint(width), b.randint(width));
    }
    assert_eq!(a.scramble_list(&[1, 2, 3, 4, 5]), b.scramble_list(&[1, 2, 3, 4, 5]));
}

#[test]
fn composites_are_reproducible() {
    let mut a = CryptoFacade::new(PASSPHRASE, SystemType::Cellphone, level(1)).unwrap();
    let mut b = CryptoFacade::new(PASSPHRASE, SystemType::Cellphone, level(1)).unwrap();
    assert_eq!(a.rotation(), b.rotation());
    let mut ca = a.next().unwrap();
    let mut cb = b.next().unwrap();
    for _ in 0..32 {
        assert_eq!(ca.next(32, 1).unwrap(), cb.next(32, 1).unwrap());
    }
}

#[test]
fn paranoia_levels_diverge() {
    let one = table(PASSPHRASE);
    let two = EntropyTable::new(4096, level(2), SystemType::Cellphone, PASSPHRASE).unwrap();
    assert_ne!(one.password_hash(), two.password_hash());
}

// ═══════════════════════════════════════════════════════════════════════
// Table addressing
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn aligned_reads_return_whole_words() {
    let t = table(PASSPHRASE);
    let words = t.table().words();
    for i in 0..16u64 {
        assert_eq!(
            low_u64(&t.bit_string_from_randoms(i * 64, 64)),
            words[i as usize],
            "word {}",
            i
        );
    }
}

#[test]
fn wide_read_spans_three_words() {
    let t = table(PASSPHRASE);
    let words = t.table().words();
    // 128 bits starting 32 bits into word 1: low half of 1, all of 2, high half of 3.
    let got = t.bit_string_from_randoms(96, 128);
    let expected = (u128::from(words[1] & 0xFFFF_FFFF) << 96)
        | (u128::from(words[2]) << 32)
        | u128::from(words[3] >> 32);
    assert_eq!(got, BigUint::from(expected));
}

#[test]
fn reads_wrap_at_table_size() {
    let t = table(PASSPHRASE);
    let size = t.table().bit_size();
    assert_eq!(t.bit_string_from_randoms(size + 64, 64), t.bit_string_from_randoms(64, 64));
}

// ═══════════════════════════════════════════════════════════════════════
// Statistical properties
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn ten_thousand_draws_without_duplicates() {
    init_tracing();
    let mut t = table(PASSPHRASE);
    let profile = Profile::lookup(SystemType::Cellphone, level(1)).unwrap();
    let mut crypto = LcgCrypto::new(&mut t, profile).unwrap();
    let mut seen = HashSet::with_capacity(10_000);
    for i in 0..10_000 {
        let value = low_u64(&crypto.next(64, 1).unwrap());
        assert!(seen.insert(value), "duplicate at draw {}", i);
    }
}

/// One changed character flips roughly half of the password hash bits.
#[test]
fn password_hash_avalanche() {
    let pairs = [
        ("correct horse battery staple", "correct horse battery stapla"),
        ("passphrase-000", "passphrase-001"),
        ("Tr0ub4dor&3xyz", "tr0ub4dor&3xyz"),
    ];
    for (left, right) in pairs {
        let a = low_u64(table(left).password_hash());
        let b = low_u64(table(right).password_hash());
        let flipped = (a ^ b).count_ones();
        assert!((12..=52).contains(&flipped), "{} vs {}: {} bits", left, right, flipped);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn bad_table_sizes_rejected() {
    assert!(matches!(
        EntropyTable::new(5000, level(1), SystemType::Cellphone, PASSPHRASE),
        Err(EvoCryptError::TableSizeNotPowerOfTwo(5000))
    ));
    assert!(matches!(
        EntropyTable::new(2048, level(1), SystemType::Cellphone, PASSPHRASE),
        Err(EvoCryptError::TableTooSmall { .. })
    ));
}

#[test]
fn zero_steps_rejected() {
    let mut facade = CryptoFacade::new(PASSPHRASE, SystemType::Cellphone, level(1)).unwrap();
    let mut composite = facade.next().unwrap();
    assert!(matches!(composite.next(8, 0), Err(EvoCryptError::InvalidConfig(_))));
}
