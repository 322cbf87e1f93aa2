//! benches/kdf.rs
//! Master key (PBKDF2-HMAC-SHA256) and per-purpose key derivation
use aesprotect_rs::aliases::{MasterKey32, PassphraseString};
use aesprotect_rs::{derive_master_key, derive_purpose_keys};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::time::Duration;

fn kdf_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("KDF");
    // Faster runs for slow high-iter benches
    group.measurement_time(Duration::from_secs(8));
    group.sample_size(20);

    let passphrase = PassphraseString::new("benchmark-passphrase".to_string());
    let salt = "benchmark-salt";

    for &iters in &[1_000, 10_000, 100_000] {
        let id = BenchmarkId::new("pbkdf2_sha256_iterations", iters);
        group.bench_with_input(id, &iters, |b, &iters| {
            b.iter(|| {
                let mut key = MasterKey32::new([0u8; 32]);
                derive_master_key(black_box(&passphrase), black_box(salt), iters, &mut key)
                    .unwrap();
                black_box(key);
            });
        });
    }

    // Runs on every protect/unprotect call
    let master = MasterKey32::new([0x42; 32]);
    group.bench_function("purpose_keys", |b| {
        b.iter(|| black_box(derive_purpose_keys(&master, black_box("email-link/v2")).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, kdf_benches);
criterion_main!(benches);
