//! MixHash family: vector-of-integers hashes used as mixers and bit sources.
//!
//! State is `depth` integers of `integer_width` bits plus a cursor. Each
//! absorbed byte multiplies the slot under the cursor, then walks eight
//! more slots shifting each left (bit set) or right (bit clear), with a
//! correction term on odd bit positions. Every slot is re-masked after
//! an update. `intdigest` XORs all slots.
//!
//! | Variant | Per-byte rule                                     |
//! |---------|---------------------------------------------------|
//! | `Hash0` | `v[i] *= b`, `v[i+1] *= 5b`, then the 8-slot walk |
//! | `Hash1` | `v[i] *= b`, then the 8-slot walk                 |
//!
//! A zero byte would wipe the slot it multiplies, so it is replaced by a
//! fresh `randint(8)` draw from the entropy source.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::rnt::{Entropy, EntropyTable};
use crate::utils::bits::{low_mask, low_u64, power_of_two};

/// Update-rule variants, in registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashVariant {
    Hash0,
    Hash1,
}

impl HashVariant {
    pub const ALL: [HashVariant; 2] = [HashVariant::Hash0, HashVariant::Hash1];

    pub fn name(self) -> &'static str {
        match self {
            HashVariant::Hash0 => "hash0",
            HashVariant::Hash1 => "hash1",
        }
    }
}

/// Splits an integer into bytes, least significant first, stopping once
/// the remaining value is zero. Zero itself has no bytes.
pub(crate) fn update_bytes_of(value: &BigUint) -> Vec<u8> {
    if value.is_zero() {
        Vec::new()
    } else {
        value.to_bytes_le()
    }
}

/// Mixes one byte into `vector` starting at `*cursor`.
///
/// `overflow` is `2^integer_width`; slots are not masked here.
pub(crate) fn absorb_byte(
    variant: HashVariant,
    vector: &mut [BigUint],
    cursor: &mut usize,
    byte: u32,
    overflow: &BigUint,
) {
    let depth = vector.len();
    vector[*cursor] *= byte;
    if variant == HashVariant::Hash0 {
        *cursor = (*cursor + 1) % depth;
        vector[*cursor] *= 5 * byte;
    }
    for i in 0..8 {
        *cursor = (*cursor + 1) % depth;
        let slot = &mut vector[*cursor];
        if byte & (1 << i) != 0 {
            *slot <<= 1u32;
            if i & 1 == 1 {
                *slot += 1u32;
            }
        } else {
            *slot >>= 1u32;
            if i & 1 == 1 {
                *slot += overflow;
            }
        }
    }
}

/// Absorbs `bytes`, replacing zero bytes with entropy draws, then masks
/// every slot.
pub(crate) fn absorb<E: Entropy + ?Sized>(
    variant: HashVariant,
    vector: &mut [BigUint],
    cursor: &mut usize,
    bytes: &[u8],
    integer_width: u32,
    source: &mut E,
) {
    let overflow = power_of_two(integer_width);
    for &b in bytes {
        let byte = if b == 0 {
            low_u64(&source.randint(8)) as u32
        } else {
            u32::from(b)
        };
        absorb_byte(variant, vector, cursor, byte, &overflow);
    }
    let mask = low_mask(integer_width);
    for slot in vector.iter_mut() {
        *slot &= &mask;
    }
}

/// XOR of all slots.
pub(crate) fn digest_of(vector: &[BigUint]) -> BigUint {
    vector.iter().fold(BigUint::zero(), |acc, slot| acc ^ slot)
}

/// A stateful mixing hash.
#[derive(Debug, Clone)]
pub struct MixHash {
    variant: HashVariant,
    vector: Vec<BigUint>,
    next_index: usize,
    integer_width: u32,
}

impl MixHash {
    /// Seeds a hash of `depth` slots from the entropy source.
    ///
    /// # Parameters
    /// - `variant`: Update rule.
    /// - `source`: Supplies `randint` draws and the password hash.
    /// - `integer_width`: Slot width in bits.
    /// - `depth`: Number of slots; a prime avoids update synchrony.
    pub fn new<E: Entropy + ?Sized>(
        variant: HashVariant,
        source: &mut E,
        integer_width: u32,
        depth: usize,
    ) -> Self {
        let mut entropy = source.password_hash().clone();
        let mut vector = Vec::with_capacity(depth);
        for _ in 0..depth {
            match variant {
                HashVariant::Hash0 => {
                    entropy ^= source.randint(integer_width);
                    let slot = source.randint(integer_width);
                    entropy += &slot;
                    vector.push(slot);
                    entropy += source.randint(integer_width);
                }
                HashVariant::Hash1 => {
                    let i0 = source.randint(integer_width);
                    entropy ^= &i0;
                    let i1 = source.randint(integer_width);
                    entropy += &i1;
                    let i2 = source.randint(integer_width);
                    entropy += &i2;
                    vector.push(&entropy ^ &i0 ^ &i1 ^ &i2);
                }
            }
        }
        let mut hash = MixHash {
            variant,
            vector,
            next_index: 0,
            integer_width,
        };
        hash.update_int(&entropy, source);
        hash
    }

    /// Absorbs an integer, least significant byte first.
    pub fn update_int<E: Entropy + ?Sized>(&mut self, value: &BigUint, source: &mut E) {
        let bytes = update_bytes_of(value);
        self.update_bytes(&bytes, source);
    }

    /// Absorbs raw bytes in order.
    pub fn update_bytes<E: Entropy + ?Sized>(&mut self, bytes: &[u8], source: &mut E) {
        absorb(
            self.variant,
            &mut self.vector,
            &mut self.next_index,
            bytes,
            self.integer_width,
            source,
        );
    }

    /// Absorbs the UTF-8 bytes of `text`.
    pub fn update_str<E: Entropy + ?Sized>(&mut self, text: &str, source: &mut E) {
        self.update_bytes(text.as_bytes(), source);
    }

    /// XOR of all slots.
    pub fn intdigest(&self) -> BigUint {
        digest_of(&self.vector)
    }

    /// `0x`-prefixed lowercase hex of [`intdigest`](Self::intdigest).
    pub fn hexdigest(&self) -> String {
        format!("{:#x}", self.intdigest())
    }

    pub fn variant(&self) -> HashVariant {
        self.variant
    }

    pub fn integer_width(&self) -> u32 {
        self.integer_width
    }

    pub fn depth(&self) -> usize {
        self.vector.len()
    }

    /// Splits the hash into its rule, slot vector and cursor so several
    /// rules can drive one shared vector.
    pub(crate) fn into_parts(self) -> (HashVariant, Vec<BigUint>, usize) {
        (self.variant, self.vector, self.next_index)
    }
}

/// Scrambled round-robin dispenser of hash variants.
#[derive(Debug, Clone)]
pub struct HashFamily {
    variants: Vec<HashVariant>,
    next_hash_index: usize,
    integer_width: u32,
    depth: usize,
}

impl HashFamily {
    /// Scrambles the variant registry with the table's Wichmann-Hill draws.
    pub fn new(rnt: &mut EntropyTable, integer_width: u32, depth: usize) -> Self {
        HashFamily {
            variants: rnt.scramble_list(&HashVariant::ALL),
            next_hash_index: 0,
            integer_width,
            depth,
        }
    }

    /// The variants in dispensing order.
    pub fn order(&self) -> &[HashVariant] {
        &self.variants
    }

    /// Builds the next hash in rotation.
    pub fn next_hash(&mut self, rnt: &mut EntropyTable) -> MixHash {
        let variant = self.variants[self.next_hash_index];
        self.next_hash_index = (self.next_hash_index + 1) % self.variants.len();
        MixHash::new(variant, rnt, self.integer_width, self.depth)
    }
}
