//! src/encryptor/encrypt.rs
//! Envelope sealing: gzip → AES-256-CBC → HMAC-SHA256

use crate::aliases::Iv16;
use crate::compress::gzip;
use crate::consts::{IV_LENGTH, TAG_LENGTH};
use crate::crypto::hmac::keyed_hmac;
use crate::crypto::kdf::purpose::DerivedKeyPair;
use crate::crypto::rng::FreshRandom;
use crate::encryptor::stream::encrypt_cbc;
use crate::error::Result;
use hmac::Mac;

/// Seal `plaintext` into `IV (16) || AES-256-CBC ciphertext || HMAC-SHA256 tag (32)`.
///
/// A fresh IV is drawn from the OS CSPRNG on every call, so sealing the same
/// plaintext twice never yields the same envelope. The tag covers the IV and
/// the ciphertext.
#[inline]
pub fn seal_envelope(plaintext: &[u8], keys: &DerivedKeyPair) -> Result<Vec<u8>> {
    let compressed = gzip(plaintext)?;
    let iv = Iv16::fresh()?;

    let ciphertext = encrypt_cbc(&compressed, keys.aes_key(), &iv);

    let mut envelope = Vec::with_capacity(IV_LENGTH + ciphertext.len() + TAG_LENGTH);
    envelope.extend_from_slice(iv.expose_secret());
    envelope.extend_from_slice(&ciphertext);

    let mut hmac = keyed_hmac(keys.hmac_key())?;
    hmac.update(&envelope);
    envelope.extend_from_slice(hmac.finalize().into_bytes().as_slice());

    tracing::trace!(
        plaintext_len = plaintext.len(),
        envelope_len = envelope.len(),
        "sealed envelope"
    );
    Ok(envelope)
}
