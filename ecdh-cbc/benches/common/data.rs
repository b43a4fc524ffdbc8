//! Data generation utilities for consistent benchmark inputs

use ecdh_cbc::{PrivateScalar, SharedSecret, WidthPolicy, key_agreement::agree};

/// Message sizes, in bytes, used by the encryption benchmarks.
pub const MESSAGE_SIZES: &[usize] = &[16, 256, 4096, 65536];

/// Generate a printable message of the given size with sequential data
pub fn generate_message_sequential(size: usize) -> String {
    (0..size).map(|i| char::from(b'a' + (i % 26) as u8)).collect()
}

/// Generate a pair of independent private scalars
pub fn generate_key_pair() -> (PrivateScalar, PrivateScalar) {
    (PrivateScalar::random(), PrivateScalar::random())
}

/// Generate a shared secret from two fresh private scalars
pub fn generate_shared_secret() -> SharedSecret {
    let (local, remote) = generate_key_pair();
    let remote_x = remote.public_key_x().expect("valid scalar has a public key");
    agree(&local, &remote_x).expect("generated public key is on the curve")
}

/// Parse a shared secret from hex
pub fn shared_secret_from_hex(value: &str) -> SharedSecret {
    SharedSecret::from_hex(value, WidthPolicy::Reject).expect("valid hex")
}
