//! Integer utilities shared by every layer: bit-width masking, folding
//! and prime search.

pub mod bits;
pub mod fold;
pub mod primes;
