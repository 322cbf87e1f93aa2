// src/crypto/rng.rs
//! Secure randomness for IVs and provisioning secrets
//!
//! Everything here draws straight from the operating system CSPRNG (`OsRng`).
//! Failures are propagated instead of silently leaving a zeroed buffer: an
//! all-zero IV reused across calls would break CBC confidentiality.

use crate::error::{ProtectorError, Result};
use rand::{rngs::OsRng, TryRngCore};
use secure_gate::Fixed;

/// Fill `dest` with OS randomness.
#[inline(always)]
pub fn fill_secure(dest: &mut [u8]) -> Result<()> {
    OsRng
        .try_fill_bytes(dest)
        .map_err(|e| ProtectorError::Crypto(format!("OS RNG unavailable: {e}")))
}

/// Extension trait – gives `.fresh()` to every fixed-size secret buffer
pub trait FreshRandom: Sized {
    /// A new instance filled from the OS CSPRNG
    fn fresh() -> Result<Self>;
}

impl<const N: usize> FreshRandom for Fixed<[u8; N]> {
    #[inline(always)]
    fn fresh() -> Result<Self> {
        let mut bytes = [0u8; N];
        fill_secure(&mut bytes)?;
        Ok(Fixed::new(bytes))
    }
}

/// Uniform index in `0..bound` by rejection sampling (no modulo bias).
pub fn random_index(bound: usize) -> Result<usize> {
    if bound == 0 || bound > u32::MAX as usize {
        return Err(ProtectorError::InvalidInput(format!(
            "random index bound out of range: {bound}"
        )));
    }
    let bound = bound as u32;
    // Largest multiple of `bound` representable in u32; draws at or above it are rejected.
    let zone = u32::MAX - (u32::MAX % bound);
    let mut rng = OsRng;
    loop {
        let draw = rng
            .try_next_u32()
            .map_err(|e| ProtectorError::Crypto(format!("OS RNG unavailable: {e}")))?;
        if draw < zone {
            return Ok((draw % bound) as usize);
        }
    }
}
