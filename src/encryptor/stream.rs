//! src/encryptor/stream.rs
//! AES-256-CBC with PKCS#7 padding over an in-memory buffer

use crate::aliases::{Block16, Iv16};
use crate::consts::BLOCK_SIZE;
use crate::utils::xor_blocks;
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes256Enc, Block as AesBlock};

/// Encrypt `plaintext` under `key`/`iv`.
///
/// Output length is always the next multiple of 16 strictly greater than the
/// input length: a full padding block is appended when the input is already
/// block-aligned (including empty input).
#[inline(always)]
pub fn encrypt_cbc(plaintext: &[u8], key: &[u8; 32], iv: &Iv16) -> Vec<u8> {
    let cipher = Aes256Enc::new(key.into());

    let padded_len = (plaintext.len() / BLOCK_SIZE + 1) * BLOCK_SIZE;
    let mut ciphertext = Vec::with_capacity(padded_len);

    // previous ciphertext block – starts as the IV
    let mut prev_block: [u8; 16] = *iv.expose_secret();
    let mut plaintext_block = Block16::new([0u8; 16]);

    let mut chunks = plaintext.chunks_exact(BLOCK_SIZE);
    for chunk in chunks.by_ref() {
        plaintext_block.expose_secret_mut().copy_from_slice(chunk);
        cbc_step(&cipher, &mut prev_block, &plaintext_block, &mut ciphertext);
    }

    // Final block: remainder + PKCS#7 padding (1..=16 bytes)
    let remainder = chunks.remainder();
    let pad = (BLOCK_SIZE - remainder.len()) as u8;
    let final_block = plaintext_block.expose_secret_mut();
    final_block[..remainder.len()].copy_from_slice(remainder);
    final_block[remainder.len()..].fill(pad);
    cbc_step(&cipher, &mut prev_block, &plaintext_block, &mut ciphertext);

    ciphertext
}

/// XOR with the previous ciphertext block, encrypt, append, chain.
#[inline(always)]
fn cbc_step(
    cipher: &Aes256Enc,
    prev_block: &mut [u8; 16],
    plaintext_block: &Block16,
    out: &mut Vec<u8>,
) {
    let mut xor_output = Block16::new([0u8; 16]);
    xor_blocks(
        plaintext_block.expose_secret(),
        &prev_block[..],
        xor_output.expose_secret_mut(),
    );

    let mut aes_block = AesBlock::from(*xor_output.expose_secret());
    cipher.encrypt_block(&mut aes_block);

    prev_block.copy_from_slice(aes_block.as_slice());
    out.extend_from_slice(&prev_block[..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    // NIST SP 800-38A F.2.5 (CBC-AES256.Encrypt), first block.
    #[test]
    fn nist_cbc_aes256_first_block() {
        let key: [u8; 32] = hex::decode(
            "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4",
        )
        .unwrap()
        .try_into()
        .unwrap();
        let iv: [u8; 16] = hex::decode("000102030405060708090a0b0c0d0e0f")
            .unwrap()
            .try_into()
            .unwrap();
        let plaintext = hex::decode("6bc1bee22e409f96e93d7e117393172a").unwrap();

        let ciphertext = encrypt_cbc(&plaintext, &key, &Iv16::new(iv));

        assert_eq!(ciphertext.len(), 32, "aligned input gains a padding block");
        assert_eq!(hex::encode(&ciphertext[..16]), "f58c4c04d6e5f1ba779eabfb5f7bfbd6");
    }

    #[test]
    fn output_lengths() {
        let key = [1u8; 32];
        let iv = Iv16::new([2u8; 16]);
        for (len, expected) in [(0, 16), (1, 16), (15, 16), (16, 32), (17, 32), (100, 112)] {
            assert_eq!(encrypt_cbc(&vec![0u8; len], &key, &iv).len(), expected, "len {len}");
        }
    }
}
