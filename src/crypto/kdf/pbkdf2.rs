//! src/crypto/kdf/pbkdf2.rs

use crate::aliases::{MasterKey32, PassphraseString};
use crate::consts::{PBKDF2_MAX_ITER, PBKDF2_MIN_ITER};
use crate::error::{ProtectorError, Result};

use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::Sha256;

/// Derive PBKDF2-HMAC-SHA256 directly into the master key buffer
///
/// The passphrase is the PBKDF2 password and the salt's UTF-8 bytes are the
/// PBKDF2 salt. Both must be non-empty.
#[inline(always)]
pub fn derive_master_key(
    passphrase: &PassphraseString,
    salt: &str,
    iterations: u32,
    out_key: &mut MasterKey32,
) -> Result<()> {
    if passphrase.expose_secret().is_empty() {
        return Err(ProtectorError::InvalidInput("empty passphrase".into()));
    }
    if salt.is_empty() {
        return Err(ProtectorError::InvalidInput("empty salt".into()));
    }
    if !(PBKDF2_MIN_ITER..=PBKDF2_MAX_ITER).contains(&iterations) {
        return Err(ProtectorError::InvalidInput(format!(
            "PBKDF2 iterations must be in {PBKDF2_MIN_ITER}..={PBKDF2_MAX_ITER}, got {iterations}"
        )));
    }

    pbkdf2::<Hmac<Sha256>>(
        passphrase.expose_secret().as_bytes(),
        salt.as_bytes(),
        iterations,
        out_key.expose_secret_mut(),
    )
    .map_err(|e| ProtectorError::Crypto(format!("PBKDF2 failed: {e}")))?;
    Ok(())
}
