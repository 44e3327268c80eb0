//! Per-session key separation.
//!
//! Both ends draw a random nonce, exchange them over the transport and
//! derive one passphrase per direction. Each end's send key is the other
//! end's receive key, and no two sessions or directions share a
//! keystream.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use tracing::debug;

use crate::config::CryptoConfig;
use crate::cprngs::CryptoPrng;
use crate::error::{EvoCryptError, Result};
use crate::facade::CryptoFacade;

/// Hex digits in a rendered nonce.
pub const NONCE_HEX_DIGITS: usize = 16;

/// A 64-bit per-session random value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionNonce(u64);

impl SessionNonce {
    /// Draws a nonce from the OS-seeded thread generator.
    pub fn generate() -> Self {
        SessionNonce(rand::thread_rng().gen())
    }

    pub fn from_u64(value: u64) -> Self {
        SessionNonce(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// Sixteen lowercase hex digits, zero-padded.
    pub fn to_hex(self) -> String {
        format!("{:016x}", self.0)
    }
}

impl fmt::Display for SessionNonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl FromStr for SessionNonce {
    type Err = EvoCryptError;

    /// Parses exactly sixteen hex digits.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.len() != NONCE_HEX_DIGITS {
            return Err(EvoCryptError::InvalidConfig(format!(
                "session nonce must be {} hex digits, got '{}'",
                NONCE_HEX_DIGITS, s
            )));
        }
        u64::from_str_radix(s, 16)
            .map(SessionNonce)
            .map_err(|_| EvoCryptError::InvalidConfig(format!("session nonce '{}' is not hex", s)))
    }
}

/// Direction-specific passphrases for one session.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionKeys {
    send: String,
    recv: String,
}

impl fmt::Debug for SessionKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionKeys").finish_non_exhaustive()
    }
}

impl SessionKeys {
    /// Derives `send = passphrase ‖ local ‖ remote` and
    /// `recv = passphrase ‖ remote ‖ local`.
    ///
    /// # Errors
    /// Returns [`EvoCryptError::NonceCollision`] if both nonces are equal,
    /// which would make the two directions share a keystream.
    ///
    /// # Examples
    ///
    /// ```
    /// use evocrypt::session::{SessionKeys, SessionNonce};
    ///
    /// let a = SessionNonce::from_u64(1);
    /// let b = SessionNonce::from_u64(2);
    /// let alice = SessionKeys::derive("correct horse", a, b).unwrap();
    /// let bob = SessionKeys::derive("correct horse", b, a).unwrap();
    /// assert_eq!(alice.send_passphrase(), bob.recv_passphrase());
    /// assert_ne!(alice.send_passphrase(), alice.recv_passphrase());
    /// ```
    pub fn derive(passphrase: &str, local: SessionNonce, remote: SessionNonce) -> Result<Self> {
        if local == remote {
            return Err(EvoCryptError::NonceCollision);
        }
        Ok(SessionKeys {
            send: format!("{}{}{}", passphrase, local.to_hex(), remote.to_hex()),
            recv: format!("{}{}{}", passphrase, remote.to_hex(), local.to_hex()),
        })
    }

    pub fn send_passphrase(&self) -> &str {
        &self.send
    }

    pub fn recv_passphrase(&self) -> &str {
        &self.recv
    }

    /// Builds two independent facades and returns `(send, recv)`
    /// composites, each the first of its facade's rotation.
    ///
    /// # Errors
    /// Configuration and construction errors from either facade.
    pub fn open_channels(
        &self,
        config: &CryptoConfig,
    ) -> Result<(Box<dyn CryptoPrng>, Box<dyn CryptoPrng>)> {
        let send = CryptoFacade::with_config(&self.send, config)?.next()?;
        let recv = CryptoFacade::with_config(&self.recv, config)?.next()?;
        debug!(
            send = send.variant().name(),
            recv = recv.variant().name(),
            "session channels open"
        );
        Ok((send, recv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ParanoiaLevel, SystemType};

    #[test]
    fn test_nonce_hex_roundtrip() {
        let nonce = SessionNonce::from_u64(0x00ab_cdef_0123_4567);
        assert_eq!(nonce.to_hex(), "00abcdef01234567");
        assert_eq!(nonce.to_string(), nonce.to_hex());
        assert_eq!("00abcdef01234567".parse::<SessionNonce>().unwrap(), nonce);
    }

    #[test]
    fn test_nonce_parse_rejects_bad_input() {
        assert!("abc".parse::<SessionNonce>().is_err());
        assert!("zzzzzzzzzzzzzzzz".parse::<SessionNonce>().is_err());
    }

    #[test]
    fn test_generated_nonces_differ() {
        let nonces: Vec<SessionNonce> = (0..8).map(|_| SessionNonce::generate()).collect();
        let mut values: Vec<u64> = nonces.iter().map(|n| n.get()).collect();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), 8);
    }

    #[test]
    fn test_collision_rejected() {
        let n = SessionNonce::from_u64(7);
        assert_eq!(
            SessionKeys::derive("correct horse", n, n),
            Err(EvoCryptError::NonceCollision)
        );
    }

    #[test]
    fn test_debug_hides_keys() {
        let keys = SessionKeys::derive(
            "correct horse",
            SessionNonce::from_u64(1),
            SessionNonce::from_u64(2),
        )
        .unwrap();
        assert!(!format!("{:?}", keys).contains("horse"));
    }

    #[test]
    fn test_channels_interoperate() {
        let config = CryptoConfig::new(SystemType::Cellphone, ParanoiaLevel::new(1).unwrap());
        let (a, b) = (SessionNonce::from_u64(11), SessionNonce::from_u64(22));
        let alice = SessionKeys::derive("correct horse battery staple", a, b).unwrap();
        let bob = SessionKeys::derive("correct horse battery staple", b, a).unwrap();

        let (mut alice_send, mut alice_recv) = alice.open_channels(&config).unwrap();
        let (mut bob_send, mut bob_recv) = bob.open_channels(&config).unwrap();

        let hello = alice_send.encrypt(b"hello bob", 1).unwrap();
        assert_eq!(bob_recv.decrypt(&hello, 1).unwrap(), b"hello bob");

        let reply = bob_send.encrypt(b"hello alice", 1).unwrap();
        assert_eq!(alice_recv.decrypt(&reply, 1).unwrap(), b"hello alice");
    }
}
