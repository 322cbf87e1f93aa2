//! tests/common.rs
//! Common constants and utilities shared across test files

use aesprotect_rs::Protector;

/// Fast iteration count for tests - the real 100 000 is exercised once in
/// protector_tests.rs and timed in benches/
pub const TEST_ITERATIONS: u32 = 5;

#[allow(dead_code)] // Used across multiple test files
pub const TEST_PASSPHRASE: &str = "correct-horse";

#[allow(dead_code)] // Used across multiple test files
pub const TEST_SALT: &str = "battery-staple";

#[allow(dead_code)] // Used across multiple test files
pub const TEST_DATA: &[u8] = b"hello world";

/// Protector over the shared test passphrase/salt with the fast iteration count
#[allow(dead_code)] // Used across multiple test files
pub fn test_protector() -> Protector {
    Protector::builder()
        .iterations(TEST_ITERATIONS)
        .build(TEST_PASSPHRASE, TEST_SALT)
        .expect("test protector")
}
