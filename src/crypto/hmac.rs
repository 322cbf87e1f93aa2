// src/crypto/hmac.rs

//! HMAC-SHA256 construction from a 32-byte key.

use crate::aliases::HmacSha256;
use crate::error::{ProtectorError, Result};
use hmac::Mac;

/// Keyed HMAC-SHA256 instance, ready for `update`.
#[inline(always)]
pub fn keyed_hmac(key: &[u8]) -> Result<HmacSha256> {
    <HmacSha256 as Mac>::new_from_slice(key)
        .map_err(|e| ProtectorError::Crypto(format!("HMAC key rejected: {e}")))
}
