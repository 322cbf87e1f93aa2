//! # Constants
//!
//! Key-derivation parameters, envelope geometry and provisioning defaults.
//!
//! None of these are recorded inside a protected envelope. Changing any of the
//! envelope or KDF values makes every previously protected value unreadable.

/// PBKDF2-HMAC-SHA256 iteration count used to stretch the passphrase into the master key.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Minimum iteration count accepted by [`ProtectorBuilder`](crate::ProtectorBuilder).
pub const PBKDF2_MIN_ITER: u32 = 1;

/// Maximum iteration count accepted by [`ProtectorBuilder`](crate::ProtectorBuilder).
pub const PBKDF2_MAX_ITER: u32 = 5_000_000;

/// Master key length (AES-256).
pub const MASTER_KEY_LENGTH: usize = 32;

/// AES block size.
pub const BLOCK_SIZE: usize = 16;

/// CBC IV length, stored at the front of every envelope.
pub const IV_LENGTH: usize = 16;

/// HMAC-SHA256 tag length, stored at the end of every envelope.
pub const TAG_LENGTH: usize = 32;

/// Anything shorter cannot hold a tag and is rejected before authentication.
pub const MIN_ENVELOPE_LENGTH: usize = TAG_LENGTH;

/// Joins nested purposes: `"P1"` scoped to `"P2"` becomes `"P1/P2"`.
pub const PURPOSE_SEPARATOR: char = '/';

/// Default random byte count for each half of a secure key pair.
pub const DEFAULT_SECURE_KEY_LENGTH: usize = 32;

/// Default number of words for each half of a friendly key pair.
pub const DEFAULT_FRIENDLY_WORD_COUNT: usize = 3;

/// Separator between words in a friendly secret.
pub const FRIENDLY_WORD_SEPARATOR: char = '-';

/// Word list for human-typable secrets (log2(26) ≈ 4.7 bits per word).
pub const FRIENDLY_WORDLIST: [&str; 26] = [
    "apple", "banana", "cherry", "dragon", "elephant", "falcon", "grape", "honey", "ice",
    "jungle", "kiwi", "lemon", "mango", "nectar", "orange", "peach", "quartz", "rose", "sun",
    "tiger", "umbrella", "violet", "wolf", "xenon", "yellow", "zebra",
];

/// Environment variable consulted for the passphrase when config does not supply one.
pub const PASSPHRASE_ENV_VAR: &str = "DATA_PROTECTION_PASSPHRASE";

/// Environment variable consulted for the salt when config does not supply one.
pub const SALT_ENV_VAR: &str = "DATA_PROTECTION_SALT";
