//! # Purpose-Scoped Protector
//!
//! [`Protector`] owns a 32-byte master key (PBKDF2-HMAC-SHA256 of the operator
//! passphrase and salt) and a purpose string. Every protect/unprotect call
//! derives the purpose's AES/HMAC key pair and seals or opens an envelope:
//!
//! ```text
//! IV (16) || AES-256-CBC(PKCS#7, gzip(plaintext)) || HMAC-SHA256(IV || ciphertext) (32)
//! ```
//!
//! Purposes nest: a protector for `"P1"` scoped to `"P2"` uses `"P1/P2"`.
//! A protector holds only immutable, shared key material, so it can be cloned
//! and used from any number of threads at once.
//!
//! # Example
//!
//! ```
//! use aesprotect_rs::Protector;
//!
//! let protector = Protector::builder()
//!     .iterations(1_000)
//!     .build("correct-horse", "battery-staple")?;
//!
//! let token = protector.protect_text("user-42", Some("email-link"))?;
//! assert!(!token.contains(['+', '/', '=']));
//!
//! let back = protector.unprotect_text(&token, Some("email-link"))?;
//! assert_eq!(back.as_deref(), Some("user-42"));
//!
//! // Another purpose cannot open it.
//! assert!(protector.unprotect_text(&token, Some("session-token")).is_err());
//! # Ok::<(), aesprotect_rs::ProtectorError>(())
//! ```

use std::sync::Arc;

use crate::aliases::{MasterKey32, PassphraseString};
use crate::consts::{PBKDF2_ITERATIONS, PURPOSE_SEPARATOR};
use crate::crypto::kdf::pbkdf2::derive_master_key;
use crate::crypto::kdf::purpose::{derive_purpose_keys, DerivedKeyPair};
use crate::decryptor::open_envelope;
use crate::encoding::{decode_url_safe, encode_url_safe};
use crate::encryptor::seal_envelope;
use crate::error::{ProtectorError, Result};

/// Object-safe seam for code that protects data without caring how.
///
/// Web handlers and other collaborators take an `Arc<dyn DataProtector>` (or a
/// generic `P: DataProtector`) through their constructors instead of reaching
/// for a process-wide instance.
pub trait DataProtector: Send + Sync {
    /// Seal bytes under this protector's purpose.
    fn protect(&self, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Open bytes sealed under this protector's purpose.
    fn unprotect(&self, envelope: &[u8]) -> Result<Vec<u8>>;

    /// A protector for `purpose` nested under this one.
    fn create_protector(&self, purpose: &str) -> Box<dyn DataProtector>;

    /// UTF-8 text → URL-safe base64 envelope, optionally under a one-shot nested purpose.
    fn protect_text(&self, plaintext: &str, purpose: Option<&str>) -> Result<String> {
        let envelope = match purpose {
            Some(p) => self.create_protector(p).protect(plaintext.as_bytes())?,
            None => self.protect(plaintext.as_bytes())?,
        };
        Ok(encode_url_safe(&envelope))
    }

    /// Inverse of [`protect_text`](Self::protect_text); `Ok(None)` for empty input.
    fn unprotect_text(&self, text: &str, purpose: Option<&str>) -> Result<Option<String>> {
        if text.is_empty() {
            return Ok(None);
        }
        let envelope = decode_url_safe(text)?;
        let plaintext = match purpose {
            Some(p) => self.create_protector(p).unprotect(&envelope)?,
            None => self.unprotect(&envelope)?,
        };
        utf8_plaintext(plaintext).map(Some)
    }
}

/// Purpose-scoped gzip + AES-256-CBC + HMAC-SHA256 protector.
#[derive(Clone)]
pub struct Protector {
    master_key: Arc<MasterKey32>,
    purpose: String,
}

impl Protector {
    /// Derive the master key from `passphrase` and `salt` (PBKDF2-HMAC-SHA256,
    /// 100 000 iterations) and return an unscoped protector.
    ///
    /// # Errors
    ///
    /// [`ProtectorError::InvalidInput`] if either argument is empty.
    pub fn from_passphrase(passphrase: &str, salt: &str) -> Result<Self> {
        Self::builder().build(passphrase, salt)
    }

    /// Builder for non-default iteration counts or an initial purpose.
    #[must_use]
    pub fn builder() -> ProtectorBuilder {
        ProtectorBuilder::new()
    }

    /// Wrap an existing 32-byte master key (no KDF).
    pub fn from_master_key(master_key: MasterKey32) -> Self {
        Self {
            master_key: Arc::new(master_key),
            purpose: String::new(),
        }
    }

    /// Effective purpose (`""` when unscoped).
    pub fn purpose(&self) -> &str {
        &self.purpose
    }

    /// A new protector bound to `purpose`, nested under the current one.
    ///
    /// The receiver is untouched and the key material is shared, not copied.
    #[must_use]
    pub fn scope_to(&self, purpose: &str) -> Self {
        let combined = if self.purpose.is_empty() {
            purpose.to_owned()
        } else {
            let mut combined = String::with_capacity(self.purpose.len() + 1 + purpose.len());
            combined.push_str(&self.purpose);
            combined.push(PURPOSE_SEPARATOR);
            combined.push_str(purpose);
            combined
        };
        Self {
            master_key: Arc::clone(&self.master_key),
            purpose: combined,
        }
    }

    /// AES/HMAC key pair for the current purpose.
    pub fn derive_keys(&self) -> Result<DerivedKeyPair> {
        derive_purpose_keys(&self.master_key, &self.purpose)
    }

    /// Seal `plaintext` (may be empty) into a fresh envelope.
    pub fn protect(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        seal_envelope(plaintext, &self.derive_keys()?)
    }

    /// Verify and open an envelope produced under the same master key and purpose.
    ///
    /// # Errors
    ///
    /// - [`ProtectorError::InvalidData`] - malformed or shorter than 32 bytes
    /// - [`ProtectorError::AuthenticationFailed`] - tampered, or wrong key/purpose
    pub fn unprotect(&self, envelope: &[u8]) -> Result<Vec<u8>> {
        open_envelope(envelope, &self.derive_keys()?)
    }

    /// [`protect`](Self::protect) under an optional one-shot nested purpose.
    pub fn protect_for(&self, plaintext: &[u8], purpose: Option<&str>) -> Result<Vec<u8>> {
        match purpose {
            Some(p) => self.scope_to(p).protect(plaintext),
            None => self.protect(plaintext),
        }
    }

    /// [`unprotect`](Self::unprotect) under an optional one-shot nested purpose.
    pub fn unprotect_for(&self, envelope: &[u8], purpose: Option<&str>) -> Result<Vec<u8>> {
        match purpose {
            Some(p) => self.scope_to(p).unprotect(envelope),
            None => self.unprotect(envelope),
        }
    }

    /// Protect UTF-8 text and return the envelope as URL-safe base64 without padding.
    pub fn protect_text(&self, plaintext: &str, purpose: Option<&str>) -> Result<String> {
        DataProtector::protect_text(self, plaintext, purpose)
    }

    /// Decode, verify and decrypt text from [`protect_text`](Self::protect_text).
    ///
    /// Returns `Ok(None)` for empty input ("nothing to unprotect"); every other
    /// failure is an error.
    pub fn unprotect_text(&self, text: &str, purpose: Option<&str>) -> Result<Option<String>> {
        DataProtector::unprotect_text(self, text, purpose)
    }
}

impl DataProtector for Protector {
    fn protect(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        Protector::protect(self, plaintext)
    }

    fn unprotect(&self, envelope: &[u8]) -> Result<Vec<u8>> {
        Protector::unprotect(self, envelope)
    }

    fn create_protector(&self, purpose: &str) -> Box<dyn DataProtector> {
        Box::new(self.scope_to(purpose))
    }
}

impl std::fmt::Debug for Protector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Protector")
            .field("master_key", &"[REDACTED]")
            .field("purpose", &self.purpose)
            .finish()
    }
}

fn utf8_plaintext(plaintext: Vec<u8>) -> Result<String> {
    String::from_utf8(plaintext)
        .map_err(|_| ProtectorError::InvalidData("protected text is not valid UTF-8".into()))
}

/// Protector construction with non-default KDF iterations or an initial purpose
///
/// Defaults: 100 000 PBKDF2 iterations, empty purpose. Values protected under
/// one iteration count cannot be opened by a protector built with another.
#[derive(Debug, Clone)]
pub struct ProtectorBuilder {
    iterations: u32,
    purpose: Option<String>,
}

impl ProtectorBuilder {
    /// Builder with the fixed production parameters
    #[must_use]
    pub fn new() -> Self {
        Self {
            iterations: PBKDF2_ITERATIONS,
            purpose: None,
        }
    }

    /// Override the PBKDF2 iteration count (validated on [`build`](Self::build))
    #[must_use]
    pub fn iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Start scoped to `purpose`
    #[must_use]
    pub fn purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = Some(purpose.into());
        self
    }

    /// Current iteration count
    #[must_use]
    pub const fn iteration_count(&self) -> u32 {
        self.iterations
    }

    /// Run PBKDF2 and produce the protector.
    ///
    /// # Errors
    ///
    /// [`ProtectorError::InvalidInput`] for an empty passphrase or salt, or an
    /// iteration count outside `PBKDF2_MIN_ITER..=PBKDF2_MAX_ITER`.
    pub fn build(self, passphrase: &str, salt: &str) -> Result<Protector> {
        let passphrase = PassphraseString::new(passphrase.to_owned());
        let mut master_key = MasterKey32::new([0u8; 32]);
        derive_master_key(&passphrase, salt, self.iterations, &mut master_key)?;

        tracing::debug!(
            iterations = self.iterations,
            purpose = self.purpose.as_deref().unwrap_or(""),
            "derived protector master key"
        );

        let protector = Protector::from_master_key(master_key);
        Ok(match self.purpose {
            Some(purpose) => protector.scope_to(&purpose),
            None => protector,
        })
    }
}

impl Default for ProtectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
