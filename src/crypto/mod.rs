// src/crypto/mod.rs

//! Low-level crypto primitives: HMAC alias, OS randomness, key derivation.
//!
//! The envelope format itself lives in [`encryptor`](crate::encryptor) and
//! [`decryptor`](crate::decryptor).

pub mod hmac;
pub mod kdf;
pub mod rng;
