use thiserror::Error;

/// Error type for key agreement and envelope encryption.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("private scalar must be nonzero and less than the curve order")]
    InvalidPrivateScalar,
    #[error("x-coordinate does not decode to a secp256k1 point with even y")]
    InvalidPublicKey,
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(&'static str),
    #[error("decryption failed")]
    DecryptionFailed,
    #[error("decrypted bytes are not valid UTF-8")]
    DecodingFailed,
    #[error("hex encoded data must be non-empty and contain only characters [0-9a-fA-F]")]
    InvalidHex,
    #[error("integer has {len} significant bytes, at most 32 are allowed")]
    OversizedInteger { len: usize },
}

/// Result alias used throughout this crate.
pub type Result<T> = core::result::Result<T, Error>;
