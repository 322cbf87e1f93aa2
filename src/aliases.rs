//! # Secure-Gate Type Aliases
//!
//! Every secret the protector touches lives in a [`secure-gate`](https://github.com/Slurp9187/secure-gate)
//! wrapper: zeroized on drop, and only reachable through `.expose_secret()` /
//! `.expose_secret_mut()`.
//!
//! ## Type Categories
//!
//! ### HMAC Primitive
//! - [`HmacSha256`] - purpose key derivation and envelope authentication
//!
//! ### Fixed-Size Secrets
//! - [`MasterKey32`] - PBKDF2 output, root of all purpose keys
//! - [`Aes256Key32`] - per-purpose AES-256 key
//! - [`HmacKey32`] - per-purpose HMAC-SHA256 key
//! - [`Iv16`] - CBC initialization vector
//! - [`Block16`] - one AES block of plaintext in flight
//! - [`Tag32`] - HMAC-SHA256 envelope tag
//!
//! ### Dynamic Secrets
//! - [`PassphraseString`] - operator passphrase

use hmac::Hmac;
use sha2::Sha256;

pub type HmacSha256 = Hmac<Sha256>;

// ─────────────────────────────────────────────────────────────────────────────
// SpanBuffer: generic secure stack buffer
// ─────────────────────────────────────────────────────────────────────────────
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

pub type MasterKey32 = SpanBuffer<32>;
pub type Aes256Key32 = SpanBuffer<32>;
pub type HmacKey32 = SpanBuffer<32>;
pub type Iv16 = SpanBuffer<16>;
pub type Block16 = SpanBuffer<16>; // one AES block
pub type Tag32 = SpanBuffer<32>;

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
pub type PassphraseString = secure_gate::Dynamic<String>;
