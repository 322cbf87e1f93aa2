//! # Key Derivation
//!
//! Two stages turn an operator passphrase into the keys that protect a value:
//!
//! - [`pbkdf2`] - passphrase + salt → 32-byte master key (PBKDF2-HMAC-SHA256)
//! - [`purpose`] - master key + purpose string → AES/HMAC key pair (HMAC-SHA256)
//!
//! The master key is derived once per [`Protector`](crate::Protector); purpose
//! keys are re-derived on every protect/unprotect call.

pub mod pbkdf2;
pub mod purpose;
