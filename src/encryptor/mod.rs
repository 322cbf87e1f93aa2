// src/encryptor/mod.rs

//! Envelope sealing.
//!
//! Core API: `seal_envelope(plaintext, &keys)?` → `IV || ciphertext || tag`.
//! Building block: `encrypt_cbc(plaintext, key, iv)` for the raw AES-256-CBC/PKCS#7 layer.

pub(crate) mod encrypt;
pub(crate) mod stream;

pub use encrypt::seal_envelope;
pub use stream::encrypt_cbc;
