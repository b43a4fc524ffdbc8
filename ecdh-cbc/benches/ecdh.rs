use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use ecdh_cbc::{PrivateScalar, PublicKeyX, WidthPolicy, key_agreement::agree};

mod common;
use common::data::generate_key_pair;

fn key_agreement(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecdh-secp256k1");

    let (local, remote) = generate_key_pair();
    let remote_x = remote.public_key_x().unwrap();

    group.bench_function("agree", |b| {
        b.iter(|| agree(black_box(&local), black_box(&remote_x)).unwrap())
    });

    group.bench_function("public_key_x", |b| b.iter(|| black_box(&local).public_key_x().unwrap()));

    group.bench_function("parse_keys", |b| {
        b.iter(|| {
            let private = PrivateScalar::from_hex(
                black_box("0x2222"),
                WidthPolicy::Reject,
            )
            .unwrap();
            let public = PublicKeyX::from_hex(
                black_box("2ef93f01cd2493e04235a6b87b10d3c4a74e2a7eb7c3caf168268f6af73314b5"),
                WidthPolicy::Reject,
            )
            .unwrap();
            (private, public)
        })
    });

    group.finish();
}

criterion_group!(ecdh_group, key_agreement);
criterion_main!(ecdh_group);
