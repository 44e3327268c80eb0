//! Error types for the evocrypt library.
//!
//! Every failure is fatal to the operation that raised it. Configuration
//! errors abort construction, exhausted degenerate-output retries signal
//! broken generator state, and container digest mismatches abort before
//! any plaintext is released.

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, EvoCryptError>;

/// Errors produced by the evocrypt library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvoCryptError {
    /// Entropy table size must be a power of two so indices can be masked.
    #[error("Entropy table size {0} bytes is not a power of two")]
    TableSizeNotPowerOfTwo(usize),

    /// Entropy table is smaller than the built-in seed table.
    #[error("Entropy table size {actual} bytes is below the minimum of {min} bytes")]
    TableTooSmall { min: usize, actual: usize },

    /// Passphrase has fewer characters than required.
    #[error("Passphrase must be at least {min} characters long, got {actual}")]
    PassphraseTooShort { min: usize, actual: usize },

    /// No composite profile exists for this system type and paranoia level.
    #[error("No profile for system type '{system_type}' at paranoia level {paranoia_level}")]
    UnknownProfile {
        system_type: String,
        paranoia_level: u8,
    },

    /// System type name is not one of the known profiles.
    #[error("Unknown system type '{0}'")]
    UnknownSystemType(String),

    /// Paranoia level is outside 1..=4.
    #[error("Paranoia level {0} is outside the valid range [1, 4]")]
    InvalidParanoiaLevel(u8),

    /// Configuration text could not be parsed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Prime search ran past its probe window.
    #[error("No prime found within {window} candidates of the starting point")]
    PrimeSearchExhausted { window: u64 },

    /// Requested or configured bit width cannot be served.
    #[error("Unsupported bit width {width}: {reason}")]
    UnsupportedWidth { width: u32, reason: &'static str },

    /// A generator kept producing degenerate values past the retry budget.
    #[error("Generator {generator} produced degenerate output {retries} times in a row")]
    DegenerateOutput {
        generator: &'static str,
        retries: u32,
    },

    /// Container is shorter than its two digests.
    #[error("Container of {0} bytes is too short to hold both digests")]
    ContainerTooShort(usize),

    /// Trailing digest does not match the header and ciphertext.
    #[error("Ciphertext digest mismatch, container is corrupt or truncated")]
    CiphertextDigestMismatch,

    /// Decrypted bytes do not hash to the header digest.
    #[error("Plaintext digest mismatch, wrong passphrase or paranoia level")]
    PlaintextDigestMismatch,

    /// File name does not follow the container naming convention.
    #[error("'{0}' is not an evocrypt container name")]
    InvalidContainerName(String),

    /// Both ends of a session picked the same nonce.
    #[error("Local and remote session nonces are equal")]
    NonceCollision,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_table_size() {
        let err = EvoCryptError::TableSizeNotPowerOfTwo(5000);
        assert_eq!(
            format!("{}", err),
            "Entropy table size 5000 bytes is not a power of two"
        );
    }

    #[test]
    fn test_display_passphrase_too_short() {
        let err = EvoCryptError::PassphraseTooShort { min: 8, actual: 3 };
        assert_eq!(
            format!("{}", err),
            "Passphrase must be at least 8 characters long, got 3"
        );
    }

    #[test]
    fn test_display_unknown_profile() {
        let err = EvoCryptError::UnknownProfile {
            system_type: "desktop".to_string(),
            paranoia_level: 4,
        };
        assert_eq!(
            format!("{}", err),
            "No profile for system type 'desktop' at paranoia level 4"
        );
    }

    #[test]
    fn test_display_degenerate_output() {
        let err = EvoCryptError::DegenerateOutput {
            generator: "lcg",
            retries: 16,
        };
        assert_eq!(
            format!("{}", err),
            "Generator lcg produced degenerate output 16 times in a row"
        );
    }

    #[test]
    fn test_display_digest_mismatch() {
        assert_eq!(
            format!("{}", EvoCryptError::PlaintextDigestMismatch),
            "Plaintext digest mismatch, wrong passphrase or paranoia level"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            EvoCryptError::NonceCollision,
            EvoCryptError::NonceCollision
        );
        assert_ne!(
            EvoCryptError::CiphertextDigestMismatch,
            EvoCryptError::PlaintextDigestMismatch
        );
    }

    #[test]
    fn test_error_clone() {
        let err = EvoCryptError::InvalidParanoiaLevel(9);
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
