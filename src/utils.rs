// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Block-level helpers shared by the CBC encrypt and decrypt paths.

/// XORs two 16-byte blocks and writes the result to `output`.
///
/// Branch-free and inlined into the CBC loops.
///
/// # Panics (by contract)
///
/// Panics if any of `block_a`, `block_b` or `output` is shorter than 16 bytes.
/// Callers only pass AES blocks and [`Iv16`](crate::aliases::Iv16) /
/// [`Block16`](crate::aliases::Block16) contents, which are exactly 16 bytes.
#[inline(always)]
pub const fn xor_blocks(block_a: &[u8], block_b: &[u8], output: &mut [u8]) {
    let mut i = 0;
    while i < 16 {
        output[i] = block_a[i] ^ block_b[i];
        i += 1;
    }
}

/// Returns `true` when every byte of `bytes` equals `expected`.
///
/// Touches every byte regardless of where a mismatch occurs.
#[inline(always)]
pub fn all_bytes_equal(bytes: &[u8], expected: u8) -> bool {
    bytes.iter().fold(0u8, |acc, &b| acc | (b ^ expected)) == 0
}
