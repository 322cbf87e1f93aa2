// src/lib.rs

//! Purpose-scoped data protection for small opaque values (tokens, links, cookies).
//!
//! A [`Protector`] stretches an operator passphrase into a master key once,
//! then seals values as `IV || AES-256-CBC(gzip(plaintext)) || HMAC-SHA256`
//! under per-purpose keys. [`Protector::protect_text`] wraps the envelope in
//! URL-safe base64 for use in URLs and cookies.

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod compress;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod encoding;
pub mod encryptor;
pub mod error;
pub mod keygen;
pub mod protector;
pub mod utils;

// High-level API
pub use config::{ProtectorConfig, ResolvedSecrets};
pub use error::{ProtectorError, Result};
pub use keygen::{generate_friendly_key_pair, generate_secure_key_pair, KeyPair};
pub use protector::{DataProtector, Protector, ProtectorBuilder};

// Low-level derivation, for key-determinism checks and custom flows
pub use crypto::kdf::pbkdf2::derive_master_key;
pub use crypto::kdf::purpose::{derive_purpose_keys, DerivedKeyPair};

#[cfg(feature = "batch-ops")]
pub use batch_ops::{protect_batch, unprotect_batch};
