//! Sealed file container.
//!
//! ```text
//! ┌──────────────────────┬──────────────────┬──────────────────────────────┐
//! │ SHA-512(plaintext)   │ ciphertext       │ SHA-512(header ‖ ciphertext) │
//! │ 64 bytes             │ len(plaintext)   │ 64 bytes                     │
//! └──────────────────────┴──────────────────┴──────────────────────────────┘
//! ```
//!
//! The keystream comes from a facade keyed with the passphrase followed by
//! the lowercase hex of the plaintext digest, so every distinct plaintext
//! is encrypted under a distinct key. Files are named
//! `<original>_<paranoia>_<0x tag>.evocrypt`.

use num_bigint::BigUint;
use sha2::{Digest, Sha512};
use tracing::{info, warn};

use crate::config::{CryptoConfig, ParanoiaLevel, MIN_PASSPHRASE_CHARS};
use crate::error::{EvoCryptError, Result};
use crate::facade::CryptoFacade;
use crate::utils::bits::xor_fold_u64;

/// Length of each SHA-512 digest in the container.
pub const DIGEST_BYTES: usize = 64;

/// File extension of sealed containers, without the dot.
pub const CONTAINER_EXTENSION: &str = "evocrypt";

/// Output of [`seal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedFile {
    /// The complete container.
    pub bytes: Vec<u8>,
    /// XOR of the 64-bit chunks of the keyed facade's password hash.
    pub tag: u64,
}

impl SealedFile {
    /// Container file name for an original file name.
    pub fn file_name(&self, original: &str, paranoia_level: ParanoiaLevel) -> String {
        format_file_name(original, paranoia_level, self.tag)
    }
}

fn check_passphrase(passphrase: &str) -> Result<()> {
    let actual = passphrase.chars().count();
    if actual < MIN_PASSPHRASE_CHARS {
        return Err(EvoCryptError::PassphraseTooShort {
            min: MIN_PASSPHRASE_CHARS,
            actual,
        });
    }
    Ok(())
}

fn keyed_facade(passphrase: &str, plain_digest: &[u8], config: &CryptoConfig) -> Result<CryptoFacade> {
    let key = format!("{}{}", passphrase, hex::encode(plain_digest));
    CryptoFacade::with_config(&key, config)
}

/// Encrypts `plaintext` into a container.
///
/// # Parameters
/// - `passphrase`: Shared secret, at least 8 characters.
/// - `plaintext`: Bytes to seal; may be empty.
/// - `config`: Profile, table size and steps per byte.
///
/// # Errors
/// Passphrase, configuration and keystream errors.
///
/// # Examples
///
/// ```
/// use evocrypt::config::{CryptoConfig, ParanoiaLevel, SystemType};
/// use evocrypt::container::{open, seal};
///
/// let config = CryptoConfig::new(SystemType::Cellphone, ParanoiaLevel::new(1).unwrap());
/// let sealed = seal("correct horse battery staple", b"payload", &config).unwrap();
/// assert_eq!(sealed.bytes.len(), 64 + 7 + 64);
/// let plain = open("correct horse battery staple", &sealed.bytes, &config).unwrap();
/// assert_eq!(plain, b"payload");
/// ```
pub fn seal(passphrase: &str, plaintext: &[u8], config: &CryptoConfig) -> Result<SealedFile> {
    check_passphrase(passphrase)?;
    let plain_digest = Sha512::digest(plaintext);
    let mut facade = keyed_facade(passphrase, &plain_digest, config)?;
    let ciphertext = facade.next()?.encrypt(plaintext, config.steps)?;

    let mut bytes = Vec::with_capacity(2 * DIGEST_BYTES + ciphertext.len());
    bytes.extend_from_slice(&plain_digest);
    bytes.extend_from_slice(&ciphertext);
    let trailer = Sha512::digest(&bytes);
    bytes.extend_from_slice(&trailer);

    info!(plaintext_bytes = plaintext.len(), container_bytes = bytes.len(), "sealed container");
    Ok(SealedFile {
        bytes,
        tag: xor_fold_u64(facade.password_hash()),
    })
}

/// Verifies and decrypts a container.
///
/// The trailing digest is checked before any decryption, and the plaintext
/// digest after it; on any mismatch no plaintext is returned.
///
/// # Errors
/// - [`EvoCryptError::ContainerTooShort`] below 128 bytes.
/// - [`EvoCryptError::CiphertextDigestMismatch`] for a corrupt container.
/// - [`EvoCryptError::PlaintextDigestMismatch`] for a wrong passphrase or
///   profile.
pub fn open(passphrase: &str, container: &[u8], config: &CryptoConfig) -> Result<Vec<u8>> {
    check_passphrase(passphrase)?;
    if container.len() < 2 * DIGEST_BYTES {
        return Err(EvoCryptError::ContainerTooShort(container.len()));
    }
    let (body, trailer) = container.split_at(container.len() - DIGEST_BYTES);
    if Sha512::digest(body).as_slice() != trailer {
        warn!(container_bytes = container.len(), "container trailer digest mismatch");
        return Err(EvoCryptError::CiphertextDigestMismatch);
    }

    let (plain_digest, ciphertext) = body.split_at(DIGEST_BYTES);
    let mut facade = keyed_facade(passphrase, plain_digest, config)?;
    let plaintext = facade.next()?.decrypt(ciphertext, config.steps)?;
    if Sha512::digest(&plaintext).as_slice() != plain_digest {
        warn!("decrypted bytes do not match the plaintext digest");
        return Err(EvoCryptError::PlaintextDigestMismatch);
    }
    info!(plaintext_bytes = plaintext.len(), "opened container");
    Ok(plaintext)
}

fn format_file_name(original: &str, paranoia_level: ParanoiaLevel, tag: u64) -> String {
    format!("{}_{}_{:#x}.{}", original, paranoia_level, tag, CONTAINER_EXTENSION)
}

/// Builds `<original>_<paranoia>_<0x folded hash>.evocrypt`.
pub fn container_file_name(
    original: &str,
    paranoia_level: ParanoiaLevel,
    password_hash: &BigUint,
) -> String {
    format_file_name(original, paranoia_level, xor_fold_u64(password_hash))
}

/// Parts recovered from a container file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerName {
    pub original: String,
    pub paranoia_level: ParanoiaLevel,
    pub tag: u64,
}

/// Splits a container file name back into its parts.
///
/// # Errors
/// Returns [`EvoCryptError::InvalidContainerName`] when the name does not
/// follow the convention.
pub fn parse_container_file_name(name: &str) -> Result<ContainerName> {
    let invalid = || EvoCryptError::InvalidContainerName(name.to_string());
    let stem = name
        .strip_suffix(CONTAINER_EXTENSION)
        .and_then(|s| s.strip_suffix('.'))
        .ok_or_else(invalid)?;
    let (head, tag_hex) = stem.rsplit_once("_0x").ok_or_else(invalid)?;
    let (original, level) = head.rsplit_once('_').ok_or_else(invalid)?;
    if original.is_empty() || tag_hex.is_empty() {
        return Err(invalid());
    }
    let tag = u64::from_str_radix(tag_hex, 16).map_err(|_| invalid())?;
    let paranoia_level = level.parse::<ParanoiaLevel>().map_err(|_| invalid())?;
    Ok(ContainerName {
        original: original.to_string(),
        paranoia_level,
        tag,
    })
}
