//! # Key Provisioning
//!
//! One-off generators for the passphrase/salt pair that
//! [`Protector::from_passphrase`](crate::Protector::from_passphrase) consumes.
//! Run once at deployment time; the output goes into configuration or the
//! `DATA_PROTECTION_PASSPHRASE` / `DATA_PROTECTION_SALT` environment variables.

use crate::consts::{
    DEFAULT_FRIENDLY_WORD_COUNT, FRIENDLY_WORDLIST, FRIENDLY_WORD_SEPARATOR, PASSPHRASE_ENV_VAR,
    SALT_ENV_VAR,
};
use crate::crypto::rng::{fill_secure, random_index};
use crate::encoding::encode_url_safe;
use crate::error::{ProtectorError, Result};

/// A freshly generated passphrase and salt.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub passphrase: String,
    pub salt: String,
}

impl KeyPair {
    /// `NAME=value` lines for an environment file.
    pub fn to_env_lines(&self) -> String {
        format!(
            "{PASSPHRASE_ENV_VAR}={}\n{SALT_ENV_VAR}={}\n",
            self.passphrase, self.salt
        )
    }

    /// A `[data_protection]` TOML section readable by [`ProtectorConfig`](crate::ProtectorConfig).
    pub fn to_toml(&self) -> String {
        format!(
            "[data_protection]\npassphrase = \"{}\"\nsalt = \"{}\"\n",
            self.passphrase, self.salt
        )
    }

    /// Entropy of one friendly secret with `word_count` words from the built-in list.
    pub fn friendly_entropy_bits(word_count: usize) -> f64 {
        word_count as f64 * (FRIENDLY_WORDLIST.len() as f64).log2()
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("passphrase", &"[REDACTED]")
            .field("salt", &"[REDACTED]")
            .finish()
    }
}

/// Two independent `length`-byte random secrets, URL-safe base64 without padding.
pub fn generate_secure_key_pair(length: usize) -> Result<KeyPair> {
    if length == 0 {
        return Err(ProtectorError::InvalidInput(
            "secure key length must be at least 1 byte".into(),
        ));
    }

    let mut pass_bytes = vec![0u8; length];
    let mut salt_bytes = vec![0u8; length];
    fill_secure(&mut pass_bytes)?;
    fill_secure(&mut salt_bytes)?;

    Ok(KeyPair {
        passphrase: encode_url_safe(&pass_bytes),
        salt: encode_url_safe(&salt_bytes),
    })
}

/// Two independent hyphen-joined phrases of `word_count` random words each.
///
/// `word_count == 0` falls back to the default of 3. Each word carries only
/// ~4.7 bits; prefer [`generate_secure_key_pair`] unless a human has to type it.
pub fn generate_friendly_key_pair(word_count: usize) -> Result<KeyPair> {
    let word_count = friendly_word_count(word_count);

    Ok(KeyPair {
        passphrase: random_words(word_count)?,
        salt: random_words(word_count)?,
    })
}

/// Words per friendly secret actually generated for a requested count (0 → default).
#[inline]
pub const fn friendly_word_count(requested: usize) -> usize {
    if requested == 0 {
        DEFAULT_FRIENDLY_WORD_COUNT
    } else {
        requested
    }
}

fn random_words(word_count: usize) -> Result<String> {
    let mut phrase = String::with_capacity(word_count * 8);
    for i in 0..word_count {
        if i > 0 {
            phrase.push(FRIENDLY_WORD_SEPARATOR);
        }
        phrase.push_str(FRIENDLY_WORDLIST[random_index(FRIENDLY_WORDLIST.len())?]);
    }
    Ok(phrase)
}
