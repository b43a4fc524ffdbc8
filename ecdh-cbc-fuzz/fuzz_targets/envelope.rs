#![no_main]

use ecdh_cbc::{EncryptedEnvelope, SharedSecret, WidthPolicy, codec};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Using a fixed key for deterministic fuzzing
    let Ok(key) = SharedSecret::from_be_bytes(&[0x42; 32], WidthPolicy::Reject) else {
        return;
    };

    // Arbitrary strings must be rejected with an error, never a panic
    if let Ok(text) = core::str::from_utf8(data) {
        let _ = codec::decrypt(&key, text);
        let _ = text.parse::<EncryptedEnvelope>();
    }

    // Arbitrary ciphertexts with a well-formed IV exercise the padding and UTF-8 checks
    if let Some((iv, ciphertext)) = data.split_first_chunk::<16>() {
        let envelope = EncryptedEnvelope::new(ciphertext.to_vec(), *iv);
        let _ = envelope.open(&key);
    }
});
