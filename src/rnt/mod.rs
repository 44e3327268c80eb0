//! Entropy bootstrap subsystem.
//!
//! Turns a passphrase plus a compiled-in seed table into a large,
//! passphrase-specific table of random words, and exposes the low-level
//! draws (`randint`, `next_random_value`, `scramble_list`) that every
//! hash and generator uses to initialize itself.

pub mod entropy;
pub mod seed_table;
pub mod table;
pub mod wichmann;

pub use entropy::{Entropy, EntropyTable};
pub use table::BitTable;
