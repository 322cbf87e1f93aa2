//! # Error Types
//!
//! Every fallible operation returns [`Result<T>`](Result), i.e.
//! `Result<T, ProtectorError>`. Failures are never retried internally and never
//! come with partial output.

use thiserror::Error;

/// The error type for all protector operations.
#[derive(Error, Debug)]
pub enum ProtectorError {
    /// A required argument was empty or out of range (caller bug).
    ///
    /// Raised for an empty passphrase or salt, a zero-length secure key request,
    /// or a KDF iteration count outside the accepted range.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The protected value is structurally malformed.
    ///
    /// Covers envelopes that are too short, bad base64, a ciphertext that is
    /// not a whole number of blocks, PKCS#7 padding failures, corrupt gzip
    /// streams and non-UTF-8 plaintext on the text path.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// The HMAC tag did not match.
    ///
    /// The value was tampered with, or it was protected under a different key or
    /// purpose. Deliberately carries no detail about where the mismatch was.
    #[error("Authentication failed: HMAC validation failed, ciphertext may be tampered")]
    AuthenticationFailed,

    /// A cryptographic primitive failed (e.g. the OS RNG was unavailable).
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Passphrase or salt could not be resolved from configuration.
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error while reading a configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ProtectorError>;
