use aesprotect_rs::{protect_batch, Protector};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn bench_batch(c: &mut Criterion) {
    let protector = Protector::builder()
        .iterations(1_000)
        .build("benchmark", "benchmark-salt")
        .unwrap();
    let data = black_box(vec![0u8; 64 * 1024]);

    let mut group = c.benchmark_group("batch-ops");

    for n_items in [1, 16, 256, 1024] {
        let batch: Vec<&[u8]> = vec![data.as_slice(); n_items];

        group.bench_with_input(BenchmarkId::new("parallel", n_items), &n_items, |b, _| {
            b.iter(|| black_box(protect_batch(&protector, &batch).unwrap()));
        });

        group.bench_with_input(
            BenchmarkId::new("sequential", n_items),
            &n_items,
            |b, _| {
                b.iter(|| {
                    for item in &batch {
                        black_box(protector.protect(item).unwrap());
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_batch);
criterion_main!(benches);
