use secp256k1_pure::{sign, verify, Keypair, SignOptions, VerifyOptions};

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

pub fn bench_sign(c: &mut Criterion) {
    let keypair = Keypair::generate();
    c.bench_function("sign 32-byte message", |b| {
        b.iter(|| sign(black_box(&[0u8; 32]), &keypair, &SignOptions::default()))
    });
}

pub fn bench_verify(c: &mut Criterion) {
    let keypair = Keypair::generate();
    let signature = sign(&[0u8; 32], &keypair, &SignOptions::default()).unwrap();
    c.bench_function("verify 32-byte message", |b| {
        b.iter(|| {
            verify(
                black_box(&signature),
                black_box(&[0u8; 32]),
                &keypair,
                &VerifyOptions::default(),
            )
        })
    });
}

criterion_group!(benches, bench_sign, bench_verify);
criterion_main!(benches);
