//! Profiles and runtime configuration.
//!
//! A `(SystemType, ParanoiaLevel)` pair selects how many generators a
//! composite holds, how wide their integers are and how deep their state
//! vectors run. [`CryptoConfig`] carries that choice plus the table size and
//! step count explicitly, so the engine holds no process-wide state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EvoCryptError, Result};

/// Size of the built-in seed table, and the smallest table allowed.
pub const MIN_TABLE_BYTES: usize = 4096;

/// Minimum passphrase length in characters.
pub const MIN_PASSPHRASE_CHARS: usize = 8;

// ──────────────────────────── SystemType ────────────────────────────

/// Named performance/security profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemType {
    Big,
    Desktop,
    Laptop,
    Cellphone,
}

impl SystemType {
    /// Every known profile, in table order.
    pub const ALL: [SystemType; 4] = [
        SystemType::Big,
        SystemType::Desktop,
        SystemType::Laptop,
        SystemType::Cellphone,
    ];

    /// Lowercase profile name.
    pub fn as_str(self) -> &'static str {
        match self {
            SystemType::Big => "big",
            SystemType::Desktop => "desktop",
            SystemType::Laptop => "laptop",
            SystemType::Cellphone => "cellphone",
        }
    }
}

impl fmt::Display for SystemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SystemType {
    type Err = EvoCryptError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "big" => Ok(SystemType::Big),
            "desktop" => Ok(SystemType::Desktop),
            "laptop" => Ok(SystemType::Laptop),
            "cellphone" => Ok(SystemType::Cellphone),
            _ => Err(EvoCryptError::UnknownSystemType(s.to_string())),
        }
    }
}

// ─────────────────────────── ParanoiaLevel ──────────────────────────

/// Number of mixing rounds, 1 through 4.
///
/// Levels 1-3 have composite profiles; level 4 is accepted by the entropy
/// table alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ParanoiaLevel(u8);

impl ParanoiaLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    /// Validates and wraps a paranoia level.
    ///
    /// # Errors
    /// Returns [`EvoCryptError::InvalidParanoiaLevel`] outside `1..=4`.
    pub fn new(level: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(ParanoiaLevel(level))
        } else {
            Err(EvoCryptError::InvalidParanoiaLevel(level))
        }
    }

    /// The raw level.
    pub fn get(self) -> u8 {
        self.0
    }

    /// The level as a loop count.
    pub fn rounds(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for ParanoiaLevel {
    type Error = EvoCryptError;

    fn try_from(level: u8) -> Result<Self> {
        ParanoiaLevel::new(level)
    }
}

impl From<ParanoiaLevel> for u8 {
    fn from(level: ParanoiaLevel) -> u8 {
        level.0
    }
}

impl fmt::Display for ParanoiaLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ParanoiaLevel {
    type Err = EvoCryptError;

    fn from_str(s: &str) -> Result<Self> {
        let level: u8 = s
            .trim()
            .parse()
            .map_err(|_| EvoCryptError::InvalidConfig(format!("paranoia level '{}'", s)))?;
        ParanoiaLevel::new(level)
    }
}

// ───────────────────────────── Profile ──────────────────────────────

/// Composite sizing: `(generator_count, integer_width, depth)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    /// Number of sub-generators (or hash slots) in a composite.
    pub generator_count: usize,
    /// Width in bits of every generator's internal integers.
    pub integer_width: u32,
    /// Length of each generator's state vector.
    pub depth: usize,
}

const fn profile(generator_count: usize, integer_width: u32, depth: usize) -> Profile {
    Profile {
        generator_count,
        integer_width,
        depth,
    }
}

/// Profile rows for paranoia levels 1, 2 and 3.
const BIG: [Profile; 3] = [profile(19, 256, 31), profile(31, 256, 41), profile(41, 512, 97)];
const DESKTOP: [Profile; 3] = [profile(19, 128, 31), profile(29, 128, 37), profile(37, 128, 53)];
const LAPTOP: [Profile; 3] = [profile(17, 128, 29), profile(19, 128, 31), profile(37, 128, 43)];
const CELLPHONE: [Profile; 3] = [profile(11, 64, 17), profile(13, 64, 19), profile(23, 64, 31)];

impl Profile {
    /// Looks up the composite profile for a system type and paranoia level.
    ///
    /// # Errors
    /// Returns [`EvoCryptError::UnknownProfile`] when the table has no row,
    /// which is the case for paranoia level 4.
    pub fn lookup(system_type: SystemType, paranoia_level: ParanoiaLevel) -> Result<Profile> {
        let row = match system_type {
            SystemType::Big => &BIG,
            SystemType::Desktop => &DESKTOP,
            SystemType::Laptop => &LAPTOP,
            SystemType::Cellphone => &CELLPHONE,
        };
        row.get(paranoia_level.rounds() - 1)
            .copied()
            .ok_or_else(|| EvoCryptError::UnknownProfile {
                system_type: system_type.to_string(),
                paranoia_level: paranoia_level.get(),
            })
    }
}

// ─────────────────────────── CryptoConfig ───────────────────────────

fn default_system_type() -> SystemType {
    SystemType::Desktop
}

fn default_paranoia_level() -> ParanoiaLevel {
    ParanoiaLevel(1)
}

fn default_table_bytes() -> usize {
    MIN_TABLE_BYTES
}

fn default_steps() -> u32 {
    1
}

/// Everything the engine needs besides the passphrase.
///
/// # Examples
///
/// ```
/// use evocrypt::config::{CryptoConfig, SystemType};
///
/// let config = CryptoConfig::from_toml_str(
///     "system_type = \"cellphone\"\nparanoia_level = 2\n",
/// )
/// .unwrap();
/// assert_eq!(config.system_type, SystemType::Cellphone);
/// assert_eq!(config.paranoia_level.get(), 2);
/// assert_eq!(config.table_bytes, 4096);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptoConfig {
    #[serde(default = "default_system_type")]
    pub system_type: SystemType,
    #[serde(default = "default_paranoia_level")]
    pub paranoia_level: ParanoiaLevel,
    #[serde(default = "default_table_bytes")]
    pub table_bytes: usize,
    /// Generator steps per keystream byte.
    #[serde(default = "default_steps")]
    pub steps: u32,
}

impl Default for CryptoConfig {
    fn default() -> Self {
        CryptoConfig {
            system_type: default_system_type(),
            paranoia_level: default_paranoia_level(),
            table_bytes: default_table_bytes(),
            steps: default_steps(),
        }
    }
}

impl CryptoConfig {
    /// Creates a configuration with the default table size and step count.
    pub fn new(system_type: SystemType, paranoia_level: ParanoiaLevel) -> Self {
        CryptoConfig {
            system_type,
            paranoia_level,
            ..Default::default()
        }
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    /// Returns [`EvoCryptError::InvalidConfig`] for malformed TOML or bad
    /// field values, or any error from [`validate`](Self::validate).
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: CryptoConfig =
            toml::from_str(text).map_err(|e| EvoCryptError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the table size, step count and profile.
    ///
    /// # Errors
    /// - [`EvoCryptError::TableSizeNotPowerOfTwo`] / [`EvoCryptError::TableTooSmall`]
    ///   for a bad `table_bytes`.
    /// - [`EvoCryptError::InvalidConfig`] for `steps == 0`.
    /// - [`EvoCryptError::UnknownProfile`] if no composite profile exists.
    pub fn validate(&self) -> Result<()> {
        validate_table_bytes(self.table_bytes)?;
        if self.steps == 0 {
            return Err(EvoCryptError::InvalidConfig(
                "steps must be at least 1".to_string(),
            ));
        }
        self.profile().map(|_| ())
    }

    /// The composite profile selected by this configuration.
    pub fn profile(&self) -> Result<Profile> {
        Profile::lookup(self.system_type, self.paranoia_level)
    }
}

/// Checks that an entropy table size is a power of two no smaller than the
/// seed table.
pub fn validate_table_bytes(table_bytes: usize) -> Result<()> {
    if !table_bytes.is_power_of_two() {
        return Err(EvoCryptError::TableSizeNotPowerOfTwo(table_bytes));
    }
    if table_bytes < MIN_TABLE_BYTES {
        return Err(EvoCryptError::TableTooSmall {
            min: MIN_TABLE_BYTES,
            actual: table_bytes,
        });
    }
    Ok(())
}
