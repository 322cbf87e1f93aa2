//! src/crypto/kdf/purpose.rs
//! Per-purpose key pair derivation
//!
//! `HMAC-SHA256(master_key, purpose)` yields one 32-byte digest that is used as
//! both the AES-256 key and the HMAC-SHA256 key. Values protected by existing
//! deployments depend on this exact layout.

use crate::aliases::{Aes256Key32, HmacKey32, MasterKey32};
use crate::crypto::hmac::keyed_hmac;
use crate::error::Result;
use hmac::Mac;

/// AES and HMAC keys for one effective purpose.
pub struct DerivedKeyPair {
    aes_key: Aes256Key32,
    hmac_key: HmacKey32,
}

impl DerivedKeyPair {
    /// AES-256-CBC key
    #[inline(always)]
    pub fn aes_key(&self) -> &[u8; 32] {
        self.aes_key.expose_secret()
    }

    /// HMAC-SHA256 key
    #[inline(always)]
    pub fn hmac_key(&self) -> &[u8; 32] {
        self.hmac_key.expose_secret()
    }
}

impl std::fmt::Debug for DerivedKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DerivedKeyPair([REDACTED])")
    }
}

/// Derive the key pair for `purpose` (UTF-8 bytes; the empty purpose is valid).
///
/// Pure and deterministic: same master key and purpose, same pair.
#[inline]
pub fn derive_purpose_keys(master_key: &MasterKey32, purpose: &str) -> Result<DerivedKeyPair> {
    let mut mac = keyed_hmac(master_key.expose_secret())?;
    mac.update(purpose.as_bytes());
    let digest: [u8; 32] = mac.finalize().into_bytes().into();

    Ok(DerivedKeyPair {
        aes_key: Aes256Key32::new(digest),
        hmac_key: HmacKey32::new(digest),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_purpose_same_keys() {
        let master = MasterKey32::new([7u8; 32]);
        let a = derive_purpose_keys(&master, "email-link").unwrap();
        let b = derive_purpose_keys(&master, "email-link").unwrap();
        assert_eq!(a.aes_key(), b.aes_key());
        assert_eq!(a.hmac_key(), b.hmac_key());
    }

    #[test]
    fn aes_and_hmac_keys_share_the_digest() {
        let master = MasterKey32::new([7u8; 32]);
        let pair = derive_purpose_keys(&master, "session-token").unwrap();
        assert_eq!(pair.aes_key(), pair.hmac_key());
    }

    #[test]
    fn purposes_and_masters_separate_keys() {
        let master = MasterKey32::new([7u8; 32]);
        let other = MasterKey32::new([8u8; 32]);
        let a = derive_purpose_keys(&master, "a").unwrap();
        let b = derive_purpose_keys(&master, "b").unwrap();
        let c = derive_purpose_keys(&other, "a").unwrap();
        assert_ne!(a.aes_key(), b.aes_key());
        assert_ne!(a.aes_key(), c.aes_key());
    }

    #[test]
    fn debug_never_prints_key_bytes() {
        let master = MasterKey32::new([7u8; 32]);
        let pair = derive_purpose_keys(&master, "").unwrap();
        assert_eq!(format!("{pair:?}"), "DerivedKeyPair([REDACTED])");
    }
}
