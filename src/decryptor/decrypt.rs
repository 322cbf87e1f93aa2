//! src/decryptor/decrypt.rs
//! Envelope opening: length check → HMAC verify → AES-256-CBC → gunzip

use crate::aliases::Iv16;
use crate::compress::gunzip;
use crate::consts::{IV_LENGTH, MIN_ENVELOPE_LENGTH, TAG_LENGTH};
use crate::crypto::hmac::keyed_hmac;
use crate::crypto::kdf::purpose::DerivedKeyPair;
use crate::decryptor::stream::decrypt_cbc;
use crate::error::{ProtectorError, Result};
use hmac::Mac;

/// Split an envelope into `(iv || ciphertext, tag)`.
///
/// Only the length is checked here; nothing is authenticated yet.
#[inline(always)]
pub fn split_envelope(envelope: &[u8]) -> Result<(&[u8], &[u8])> {
    if envelope.len() < MIN_ENVELOPE_LENGTH {
        return Err(ProtectorError::InvalidData(format!(
            "envelope too short: {} bytes, need at least {MIN_ENVELOPE_LENGTH}",
            envelope.len()
        )));
    }
    Ok(envelope.split_at(envelope.len() - TAG_LENGTH))
}

/// Recompute HMAC-SHA256 over `authenticated` and compare it to `tag` in constant time.
///
/// This is the only tamper/wrong-key check. Any mismatch, including a tag of
/// the wrong length, is [`ProtectorError::AuthenticationFailed`].
#[inline(always)]
pub fn verify_tag(hmac_key: &[u8; 32], authenticated: &[u8], tag: &[u8]) -> Result<()> {
    let mut mac = keyed_hmac(hmac_key)?;
    mac.update(authenticated);
    mac.verify_slice(tag)
        .map_err(|_| ProtectorError::AuthenticationFailed)
}

/// Open an envelope produced by [`seal_envelope`](crate::encryptor::seal_envelope).
///
/// # Errors
///
/// - [`ProtectorError::InvalidData`] - shorter than 32 bytes (checked before
///   authentication), or malformed after successful authentication
///   (missing IV, unaligned ciphertext, bad padding, corrupt gzip)
/// - [`ProtectorError::AuthenticationFailed`] - tag mismatch
#[inline]
pub fn open_envelope(envelope: &[u8], keys: &DerivedKeyPair) -> Result<Vec<u8>> {
    let (cipher_with_iv, tag) = split_envelope(envelope)?;

    if let Err(e) = verify_tag(keys.hmac_key(), cipher_with_iv, tag) {
        tracing::debug!(envelope_len = envelope.len(), "envelope authentication failed");
        return Err(e);
    }

    if cipher_with_iv.len() < IV_LENGTH {
        return Err(ProtectorError::InvalidData(
            "authenticated envelope has no room for an IV".into(),
        ));
    }
    let (iv_bytes, ciphertext) = cipher_with_iv.split_at(IV_LENGTH);
    let mut iv_array = [0u8; IV_LENGTH];
    iv_array.copy_from_slice(iv_bytes);
    let iv = Iv16::new(iv_array);

    let compressed = decrypt_cbc(ciphertext, keys.aes_key(), &iv)?;
    let plaintext = gunzip(&compressed)?;

    tracing::trace!(
        envelope_len = envelope.len(),
        plaintext_len = plaintext.len(),
        "opened envelope"
    );
    Ok(plaintext)
}
