//! src/compress.rs
//! Gzip envelope compression
//!
//! Plaintext is compressed before encryption: ciphertext is incompressible, so
//! the order cannot be swapped. Because the compressed length leaks through the
//! envelope length, callers must not mix attacker-controlled and secret
//! substrings in a single protected value.

use crate::error::{ProtectorError, Result};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{Read, Write};

/// Gzip-compress `data` (empty input yields a valid, non-empty gzip stream).
pub fn gzip(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::with_capacity(data.len() / 2 + 32), Compression::default());
    encoder
        .write_all(data)
        .map_err(|e| ProtectorError::Crypto(format!("gzip compression failed: {e}")))?;
    encoder
        .finish()
        .map_err(|e| ProtectorError::Crypto(format!("gzip compression failed: {e}")))
}

/// Decompress a gzip stream; any corruption is [`ProtectorError::InvalidData`].
pub fn gunzip(data: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(data.len() * 2);
    GzDecoder::new(data)
        .read_to_end(&mut output)
        .map_err(|e| ProtectorError::InvalidData(format!("corrupt gzip stream: {e}")))?;
    Ok(output)
}
