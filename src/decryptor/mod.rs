// src/decryptor/mod.rs

//! Envelope opening.
//!
//! Core API: `open_envelope(envelope, &keys)?` → plaintext.
//! Building blocks: `verify_tag` (constant-time) and `decrypt_cbc` (AES-256-CBC, PKCS#7 strip).

pub(crate) mod decrypt;
pub(crate) mod stream;

pub use decrypt::{open_envelope, split_envelope, verify_tag};
pub use stream::decrypt_cbc;
