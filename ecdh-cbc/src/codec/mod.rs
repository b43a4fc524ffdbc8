//! Text encryption under an ECDH shared secret.
//!
//! Messages are encrypted with AES-256 in CBC mode with PKCS#7 padding, using the 32 bytes of a
//! [`SharedSecret`] as the key and a fresh random 16-byte IV per message. The result is carried
//! as a self-contained string envelope:
//!
//! ```text
//! <base64 ciphertext>?iv=<base64 iv>
//! ```
//!
//! CBC provides no integrity. A modified envelope either fails padding validation or decrypts
//! to garbage; callers needing tamper detection must authenticate envelopes themselves.

use alloc::{string::String, vec::Vec};
use core::{fmt, str::FromStr};

use aes::Aes256;
use base64::{Engine, engine::general_purpose::STANDARD};
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit, block_padding::Pkcs7};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::{
    error::{Error, Result},
    key_agreement::SharedSecret,
};


// CONSTANTS
// ================================================================================================

/// Size of the initialization vector, equal to the AES block size.
pub const IV_BYTES: usize = 16;

/// Separator between the ciphertext and the IV in an encoded envelope.
pub const IV_DELIMITER: &str = "?iv=";

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

// ENVELOPE
// ================================================================================================

/// A ciphertext together with the IV it was produced with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedEnvelope {
    ciphertext: Vec<u8>,
    iv: [u8; IV_BYTES],
}

impl EncryptedEnvelope {
    /// Assembles an envelope from its parts.
    pub fn new(ciphertext: Vec<u8>, iv: [u8; IV_BYTES]) -> Self {
        Self { ciphertext, iv }
    }

    /// Returns the raw ciphertext.
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Returns the IV.
    pub fn iv(&self) -> &[u8; IV_BYTES] {
        &self.iv
    }

    /// Decrypts this envelope and returns the plaintext.
    ///
    /// # Errors
    /// - [`Error::DecryptionFailed`] if the ciphertext is not a whole number of blocks or the
    ///   padding is invalid.
    /// - [`Error::DecodingFailed`] if the plaintext is not valid UTF-8.
    pub fn open(&self, key: &SharedSecret) -> Result<String> {
        let mut key_bytes = *key.as_bytes();
        let decrypted = Aes256CbcDec::new(&key_bytes.into(), &self.iv.into())
            .decrypt_padded_vec_mut::<Pkcs7>(&self.ciphertext);
        key_bytes.zeroize();

        let plaintext = decrypted.map_err(|_| Error::DecryptionFailed)?;
        tracing::debug!(
            ciphertext_len = self.ciphertext.len(),
            plaintext_len = plaintext.len(),
            "decrypted envelope"
        );

        String::from_utf8(plaintext).map_err(|_| Error::DecodingFailed)
    }
}

impl fmt::Display for EncryptedEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{IV_DELIMITER}{}",
            STANDARD.encode(&self.ciphertext),
            STANDARD.encode(self.iv)
        )
    }
}

impl FromStr for EncryptedEnvelope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (ciphertext, iv) = s
            .split_once(IV_DELIMITER)
            .ok_or(Error::MalformedEnvelope("missing `?iv=` delimiter"))?;

        let ciphertext = STANDARD
            .decode(ciphertext)
            .map_err(|_| Error::MalformedEnvelope("ciphertext is not valid base64"))?;
        let iv = STANDARD
            .decode(iv)
            .map_err(|_| Error::MalformedEnvelope("iv is not valid base64"))?;
        let iv: [u8; IV_BYTES] = iv
            .try_into()
            .map_err(|_| Error::MalformedEnvelope("iv must be exactly 16 bytes"))?;

        Ok(Self { ciphertext, iv })
    }
}

// ENCRYPTION
// ================================================================================================

/// Encrypts `plaintext` under `key` with a random IV from the thread-local random number
/// generator.
#[cfg(feature = "std")]
pub fn encrypt(key: &SharedSecret, plaintext: &str) -> EncryptedEnvelope {
    encrypt_with_rng(&mut rand::rng(), key, plaintext)
}

/// Encrypts `plaintext` under `key` with a random IV drawn from `rng`.
pub fn encrypt_with_rng<R: CryptoRng + RngCore>(
    rng: &mut R,
    key: &SharedSecret,
    plaintext: &str,
) -> EncryptedEnvelope {
    let mut iv = [0u8; IV_BYTES];
    rng.fill_bytes(&mut iv);

    encrypt_with_iv(key, iv, plaintext)
}

/// Encrypts `plaintext` under `key` with the given IV.
///
/// Reusing an IV with the same key leaks whether two messages share a prefix. Outside of tests
/// prefer [`encrypt`] or [`encrypt_with_rng`].
pub fn encrypt_with_iv(
    key: &SharedSecret,
    iv: [u8; IV_BYTES],
    plaintext: &str,
) -> EncryptedEnvelope {
    let mut key_bytes = *key.as_bytes();
    let ciphertext = Aes256CbcEnc::new(&key_bytes.into(), &iv.into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());
    key_bytes.zeroize();

    tracing::debug!(
        plaintext_len = plaintext.len(),
        ciphertext_len = ciphertext.len(),
        "encrypted envelope"
    );

    EncryptedEnvelope { ciphertext, iv }
}

// DECRYPTION
// ================================================================================================

/// Parses an encoded envelope and decrypts it under `key`.
///
/// # Errors
/// - [`Error::MalformedEnvelope`] if the delimiter is missing, either part is not valid base64,
///   or the IV is not 16 bytes long.
/// - [`Error::DecryptionFailed`] and [`Error::DecodingFailed`] as for
///   [`EncryptedEnvelope::open`].
pub fn decrypt(key: &SharedSecret, envelope: &str) -> Result<String> {
    envelope.parse::<EncryptedEnvelope>()?.open(key)
}
