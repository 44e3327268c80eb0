//! Entry point: one entropy table, a rotation of composite variants.

use num_bigint::BigUint;
use tracing::{debug, info};

use crate::config::{CryptoConfig, ParanoiaLevel, Profile, SystemType};
use crate::cprngs::{CompositeVariant, CryptoPrng};
use crate::error::Result;
use crate::rnt::EntropyTable;

/// Builds composites of a fixed profile from one passphrase.
///
/// Each call to [`next`](Self::next) returns a fresh composite of the next
/// variant in a passphrase-scrambled rotation. Two facades built from the
/// same passphrase and profile hand out identical sequences of composites,
/// which is what lets one side decrypt what the other encrypted.
///
/// # Examples
///
/// ```
/// use evocrypt::{CryptoFacade, ParanoiaLevel, SystemType};
///
/// let level = ParanoiaLevel::new(1).unwrap();
/// let mut alice = CryptoFacade::new("correct horse battery staple", SystemType::Cellphone, level).unwrap();
/// let mut bob = CryptoFacade::new("correct horse battery staple", SystemType::Cellphone, level).unwrap();
///
/// let mut encoder = alice.next().unwrap();
/// let mut decoder = bob.next().unwrap();
/// let cipher = encoder.encrypt(b"hello", 1).unwrap();
/// assert_eq!(decoder.decrypt(&cipher, 1).unwrap(), b"hello");
/// ```
pub struct CryptoFacade {
    rnt: EntropyTable,
    profile: Profile,
    variants: Vec<CompositeVariant>,
    next_variant: usize,
}

impl CryptoFacade {
    /// Builds a facade with the default table size.
    ///
    /// # Errors
    /// - [`EvoCryptError::UnknownProfile`](crate::EvoCryptError::UnknownProfile)
    ///   for paranoia level 4.
    /// - Entropy table errors, e.g. a passphrase shorter than 8 characters.
    pub fn new(
        passphrase: &str,
        system_type: SystemType,
        paranoia_level: ParanoiaLevel,
    ) -> Result<Self> {
        Self::with_config(passphrase, &CryptoConfig::new(system_type, paranoia_level))
    }

    /// Builds a facade from an explicit configuration.
    ///
    /// # Errors
    /// Same as [`new`](Self::new), plus configuration validation errors.
    pub fn with_config(passphrase: &str, config: &CryptoConfig) -> Result<Self> {
        config.validate()?;
        let profile = config.profile()?;
        let mut rnt = EntropyTable::new(
            config.table_bytes,
            config.paranoia_level,
            config.system_type,
            passphrase,
        )?;
        let variants = rnt.scramble_list(&CompositeVariant::ALL);
        info!(
            system_type = %config.system_type,
            paranoia_level = config.paranoia_level.get(),
            generators = profile.generator_count,
            integer_width = profile.integer_width,
            depth = profile.depth,
            "crypto facade ready"
        );
        Ok(CryptoFacade {
            rnt,
            profile,
            variants,
            next_variant: 0,
        })
    }

    /// Builds the next composite in rotation.
    ///
    /// # Errors
    /// Propagates composite construction failures.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<Box<dyn CryptoPrng>> {
        let variant = self.variants[self.next_variant];
        self.next_variant = (self.next_variant + 1) % self.variants.len();
        self.build(variant)
    }

    /// Builds a composite of a specific variant outside the rotation.
    pub fn build(&mut self, variant: CompositeVariant) -> Result<Box<dyn CryptoPrng>> {
        debug!(variant = variant.name(), "building composite");
        variant.build(&mut self.rnt, self.profile)
    }

    /// The variants in rotation order.
    pub fn rotation(&self) -> &[CompositeVariant] {
        &self.variants
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn password_hash(&self) -> &BigUint {
        self.rnt.password_hash()
    }

    pub fn entropy_table(&self) -> &EntropyTable {
        &self.rnt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvoCryptError;

    const PASSPHRASE: &str = "correct horse battery staple";

    fn level(l: u8) -> ParanoiaLevel {
        ParanoiaLevel::new(l).unwrap()
    }

    #[test]
    fn test_rotation_covers_all_variants() {
        let mut facade = CryptoFacade::new(PASSPHRASE, SystemType::Cellphone, level(1)).unwrap();
        let order = facade.rotation().to_vec();
        assert_eq!(order.len(), 3);
        for variant in CompositeVariant::ALL {
            assert!(order.contains(&variant));
        }
        let built: Vec<CompositeVariant> = (0..4).map(|_| facade.next().unwrap().variant()).collect();
        assert_eq!(&built[..3], &order[..]);
        assert_eq!(built[3], order[0]);
    }

    #[test]
    fn test_level_four_has_no_profile() {
        let result = CryptoFacade::new(PASSPHRASE, SystemType::Desktop, level(4));
        assert!(matches!(
            result,
            Err(EvoCryptError::UnknownProfile { paranoia_level: 4, .. })
        ));
    }

    #[test]
    fn test_profile_from_table() {
        let facade = CryptoFacade::new(PASSPHRASE, SystemType::Cellphone, level(2)).unwrap();
        assert_eq!(facade.profile().generator_count, 13);
        assert_eq!(facade.profile().integer_width, 64);
        assert_eq!(facade.profile().depth, 19);
    }

    #[test]
    fn test_short_passphrase_rejected() {
        assert!(matches!(
            CryptoFacade::new("tiny", SystemType::Cellphone, level(1)),
            Err(EvoCryptError::PassphraseTooShort { .. })
        ));
    }

    #[test]
    fn test_with_config_table_size() {
        let mut config = CryptoConfig::new(SystemType::Cellphone, level(1));
        config.table_bytes = 8192;
        let facade = CryptoFacade::with_config(PASSPHRASE, &config).unwrap();
        assert_eq!(facade.entropy_table().table().bit_size(), 8192 * 8);
    }
}
