#![no_std]

//! secp256k1 ECDH key agreement feeding AES-256-CBC text envelopes.
//!
//! The crate is a two-stage pipeline:
//!
//! 1. [`key_agreement::agree`] turns a local [`PrivateScalar`] and a remote party's public
//!    x-coordinate ([`PublicKeyX`]) into a [`SharedSecret`].
//! 2. [`codec::encrypt`] and [`codec::decrypt`] use that secret as an AES-256 key to move text
//!    through `<base64 ciphertext>?iv=<base64 iv>` envelopes.
//!
//! # Examples
//!
//! ```
//! use ecdh_cbc::{PrivateScalar, codec, key_agreement::agree};
//!
//! let alice = PrivateScalar::random();
//! let bob = PrivateScalar::random();
//!
//! let alice_secret = agree(&alice, &bob.public_key_x().unwrap()).unwrap();
//! let bob_secret = agree(&bob, &alice.public_key_x().unwrap()).unwrap();
//!
//! let envelope = codec::encrypt(&alice_secret, "hello world").to_string();
//! assert_eq!(codec::decrypt(&bob_secret, &envelope).unwrap(), "hello world");
//! ```
//!
//! # Security
//!
//! The envelope format is kept for compatibility with existing peers and has known weaknesses:
//! the ECDH output is used as the AES key without a key derivation step, and CBC provides no
//! integrity protection. IVs are drawn from a cryptographically secure generator.

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod codec;
pub mod curve;
pub mod encoding;
mod error;
pub mod key_agreement;

// RE-EXPORTS
// ================================================================================================

pub use codec::EncryptedEnvelope;
pub use encoding::WidthPolicy;
pub use error::{Error, Result};
pub use key_agreement::{PrivateScalar, PublicKeyX, SharedSecret};
