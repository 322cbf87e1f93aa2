//! src/encoding.rs
//! URL-safe text form of envelopes and provisioning secrets
//!
//! Output uses the RFC 4648 URL-safe alphabet (`-`, `_`) with `=` padding
//! stripped. Input may arrive with or without padding: the decoder restores
//! whatever a `mod 4` remainder of 0, 2 or 3 implies. A remainder of 1 can
//! never be valid base64 and is rejected.
//!
//! Standard-alphabet input (`+`, `/`) is folded onto `-`, `_` before decoding,
//! so tokens that went through a standard encoder still open.

use std::borrow::Cow;

use crate::error::{ProtectorError, Result};
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;

/// URL-safe, unpadded on encode, padding-indifferent on decode.
pub const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode bytes as URL-safe base64 without padding.
#[inline]
pub fn encode_url_safe(bytes: &[u8]) -> String {
    URL_SAFE_LENIENT.encode(bytes)
}

/// Decode URL-safe or standard base64, with or without padding.
pub fn decode_url_safe(text: &str) -> Result<Vec<u8>> {
    let text: Cow<'_, str> = if text.contains(['+', '/']) {
        Cow::Owned(text.replace('+', "-").replace('/', "_"))
    } else {
        Cow::Borrowed(text)
    };
    URL_SAFE_LENIENT
        .decode(text.as_bytes())
        .map_err(|e| ProtectorError::InvalidData(format!("invalid base64: {e}")))
}
