use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ecdh_cbc::codec;

mod common;
use common::data::{
    MESSAGE_SIZES, generate_message_sequential, generate_shared_secret, shared_secret_from_hex,
};

fn aes_cbc_envelopes(c: &mut Criterion) {
    let mut group = c.benchmark_group("aes256-cbc-envelope");
    let key = generate_shared_secret();

    for &size in MESSAGE_SIZES {
        let message = generate_message_sequential(size);
        let envelope = codec::encrypt(&key, &message).to_string();
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("encrypt", size), &message, |b, message| {
            b.iter(|| codec::encrypt(black_box(&key), black_box(message)).to_string())
        });

        group.bench_with_input(BenchmarkId::new("decrypt", size), &envelope, |b, envelope| {
            b.iter(|| codec::decrypt(black_box(&key), black_box(envelope)).unwrap())
        });
    }

    group.finish();
}

fn sample_envelope(c: &mut Criterion) {
    let key =
        shared_secret_from_hex("0733642b9f465207b29ca9070b17104db5e18f6fb6de1a88ee494f00f01eaca7");

    c.bench_function("decrypt-sample", |b| {
        b.iter(|| {
            codec::decrypt(
                black_box(&key),
                black_box("Ypr3iBx52iSWVwP7APp7pQ==?iv=AAECAwQFBgcICQoLDA0ODw=="),
            )
            .unwrap()
        })
    });
}

criterion_group!(encryption_group, aes_cbc_envelopes, sample_envelope);
criterion_main!(encryption_group);
