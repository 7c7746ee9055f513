use ctbase58::encoding::base58::{encode, encoded_len, vartime_encode};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sha2::{Digest, Sha256};
use std::hint::black_box;

pub fn bench_encoders(c: &mut Criterion) {
    let mut group = c.benchmark_group("base58 32 bytes");
    let mut key = [0u8; 32];
    key.copy_from_slice(&Sha256::digest(b"bench"));
    let len = encoded_len(key.len());

    group.bench_function("constant-time", |b| {
        b.iter(|| encode(black_box(&key), black_box(len)))
    });
    group.bench_function("vartime", |b| {
        b.iter(|| vartime_encode(black_box(&key), black_box(len)))
    });

    group.finish();
}

/// Timing proxy: the constant-time encoder should take the same time for
/// every value of a given length, while the vartime encoder speeds up on
/// small values.
pub fn bench_value_independence(c: &mut Criterion) {
    let mut group = c.benchmark_group("base58 64-byte values");
    let len = encoded_len(64);

    let mut low = [0u8; 64];
    low[63] = 1;
    let mut hashed = Sha256::digest(b"a").to_vec();
    hashed.extend_from_slice(&Sha256::digest(b"b"));

    let inputs: [(&str, &[u8]); 4] = [
        ("zero", &[0u8; 64]),
        ("one", &low),
        ("max", &[0xFFu8; 64]),
        ("hashed", &hashed),
    ];

    for (name, input) in inputs {
        group.bench_with_input(BenchmarkId::new("constant-time", name), input, |b, input| {
            b.iter(|| encode(black_box(input), black_box(len)))
        });
        group.bench_with_input(BenchmarkId::new("vartime", name), input, |b, input| {
            b.iter(|| vartime_encode(black_box(input), black_box(len)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encoders, bench_value_independence);
criterion_main!(benches);
