//! evocrypt: a password-derived ensemble keystream generator.
//!
//! A passphrase is expanded into a large entropy table, which seeds an
//! ensemble of weak base generators and mixing hashes. Composite
//! generators combine the ensemble by bit selection into a keystream that
//! is XORed with the message. It is an ad hoc construction, not a vetted
//! standard cipher.
//!
//! # Architecture
//!
//! ```text
//! passphrase
//!     │
//!     ▼
//! EntropyTable (seed table + Wichmann-Hill + MixHash, paranoia rounds)
//!     │ randint / next_random_value / scramble_list
//!     ├──► ConstantGenerator ──► (multiplier, addition, lag, increment)
//!     ├──► base generators (Lcg, Well512, Knuth*, Marsaglia, Lfsr)
//!     └──► MixHash family
//!              │
//!              ▼
//! composites (LcgCrypto, PrngCrypto, HashCrypto) ──► encrypt / decrypt
//!              ▲
//! CryptoFacade (profile table, scrambled variant rotation)
//! ```
//!
//! # Examples
//!
//! Two facades built from the same passphrase and profile produce
//! matching composites:
//!
//! ```
//! use evocrypt::{CryptoFacade, ParanoiaLevel, SystemType};
//!
//! let level = ParanoiaLevel::new(1).unwrap();
//! let mut sender = CryptoFacade::new("correct horse battery staple", SystemType::Cellphone, level).unwrap();
//! let mut receiver = CryptoFacade::new("correct horse battery staple", SystemType::Cellphone, level).unwrap();
//!
//! let mut encode = sender.next().unwrap();
//! let mut decode = receiver.next().unwrap();
//!
//! let cipher = encode.encrypt(b"this is a test case", 1).unwrap();
//! assert_ne!(cipher, b"this is a test case");
//! assert_eq!(decode.decrypt(&cipher, 1).unwrap(), b"this is a test case");
//! ```
//!
//! Sealing a file-style container:
//!
//! ```
//! use evocrypt::config::{CryptoConfig, ParanoiaLevel, SystemType};
//! use evocrypt::container;
//!
//! let config = CryptoConfig::new(SystemType::Cellphone, ParanoiaLevel::new(1).unwrap());
//! let sealed = container::seal("correct horse battery staple", b"report", &config).unwrap();
//! let plain = container::open("correct horse battery staple", &sealed.bytes, &config).unwrap();
//! assert_eq!(plain, b"report");
//! ```

#![deny(clippy::all)]

pub mod config;
pub mod constants;
pub mod container;
pub mod cprngs;
pub mod error;
pub mod facade;
pub mod hashes;
pub mod prngs;
pub mod rnt;
pub mod session;
pub mod utils;

pub use config::{CryptoConfig, ParanoiaLevel, Profile, SystemType};
pub use cprngs::{CompositeVariant, CryptoPrng};
pub use error::{EvoCryptError, Result};
pub use facade::CryptoFacade;
pub use rnt::EntropyTable;
