#![no_main]

use ecdh_cbc::{PrivateScalar, PublicKeyX, WidthPolicy, key_agreement::agree};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let (private, public) = data.split_at(data.len() / 2);

    for policy in [WidthPolicy::Truncate, WidthPolicy::Reject] {
        let private = PrivateScalar::from_be_bytes(private, policy);
        let public = PublicKeyX::from_be_bytes(public, policy);

        if let (Ok(private), Ok(public)) = (private, public) {
            let _ = agree(&private, &public);
        }
    }

    if let Ok(text) = core::str::from_utf8(data) {
        let _ = PrivateScalar::from_hex(text, WidthPolicy::Reject);
        let _ = PublicKeyX::from_hex(text, WidthPolicy::Truncate);
    }
});
