//! src/decryptor/stream.rs
//! AES-256-CBC decryption with PKCS#7 padding removal

use crate::aliases::{Block16, Iv16};
use crate::consts::BLOCK_SIZE;
use crate::error::{ProtectorError, Result};
use crate::utils::{all_bytes_equal, xor_blocks};
use aes::cipher::{BlockDecrypt, KeyInit};
use aes::{Aes256Dec, Block as AesBlock};

/// Decrypt `ciphertext` under `key`/`iv` and strip PKCS#7 padding.
///
/// Fails with [`ProtectorError::InvalidData`] when the ciphertext is empty or not
/// block-aligned, or when the padding is malformed.
#[inline(always)]
pub fn decrypt_cbc(ciphertext: &[u8], key: &[u8; 32], iv: &Iv16) -> Result<Vec<u8>> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(ProtectorError::InvalidData(format!(
            "ciphertext length {} is not a positive multiple of {BLOCK_SIZE}",
            ciphertext.len()
        )));
    }

    let cipher = Aes256Dec::new(key.into());
    let mut plaintext = Vec::with_capacity(ciphertext.len());

    let mut previous_block: [u8; 16] = *iv.expose_secret();
    let mut plaintext_block = Block16::new([0u8; 16]);

    for chunk in ciphertext.chunks_exact(BLOCK_SIZE) {
        let mut block = *AesBlock::from_slice(chunk);
        cipher.decrypt_block(&mut block);
        xor_blocks(
            block.as_slice(),
            &previous_block,
            plaintext_block.expose_secret_mut(),
        );
        plaintext.extend_from_slice(plaintext_block.expose_secret());
        previous_block.copy_from_slice(chunk);
    }

    let unpadded_len = strip_pkcs7(&plaintext)?;
    plaintext.truncate(unpadded_len);
    Ok(plaintext)
}

/// Validate PKCS#7 padding on a block-aligned buffer and return the data length.
#[inline(always)]
fn strip_pkcs7(padded: &[u8]) -> Result<usize> {
    let last_block = &padded[padded.len() - BLOCK_SIZE..];
    let padding = last_block[BLOCK_SIZE - 1];

    if padding == 0 || padding as usize > BLOCK_SIZE {
        return Err(ProtectorError::InvalidData("invalid PKCS#7 padding".into()));
    }

    let padding_start = BLOCK_SIZE - padding as usize;
    if !all_bytes_equal(&last_block[padding_start..], padding) {
        return Err(ProtectorError::InvalidData("corrupt PKCS#7 padding".into()));
    }

    Ok(padded.len() - padding as usize)
}
