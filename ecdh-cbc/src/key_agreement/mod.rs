//! ECDH (Elliptic Curve Diffie-Hellman) key agreement over the secp256k1 curve.
//!
//! Public keys are exchanged as bare x-coordinates. The receiving side rebuilds the point by
//! prefixing the x-coordinate with the SEC1 tag `0x02`, i.e. it always picks the root with even
//! y. This never changes the outcome of the agreement: the two candidate points are negations of
//! one another, and negation does not change the x-coordinate of `scalar * point`.
//!
//! The shared secret is the x-coordinate of the agreed point and is used directly as AES-256 key
//! material by [`crate::codec`]. No key derivation function is applied.

use alloc::string::String;
use core::fmt;

use k256::{
    AffinePoint, FieldBytes, NonZeroScalar, ProjectivePoint,
    elliptic_curve::point::{AffineCoordinates, DecompressPoint},
};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    curve::SECP256K1,
    encoding::{
        UINT_BYTES, WidthPolicy, decode_hex, fixed_width_from_hex, to_fixed_width, to_minimal_hex,
    },
    error::{Error, Result},
};


// CONSTANTS
// ================================================================================================

/// SEC1 tag of a compressed point with even y.
const EVEN_Y_TAG: u8 = 0x02;

/// Length of a SEC1 compressed point.
pub const COMPRESSED_POINT_BYTES: usize = UINT_BYTES + 1;

// PRIVATE SCALAR
// ================================================================================================

/// The local secret exponent, a 256-bit integer in `[1, n)`.
#[derive(Clone)]
pub struct PrivateScalar([u8; UINT_BYTES]);

impl PrivateScalar {
    /// Creates a scalar from a big-endian unsigned integer of any width.
    ///
    /// # Errors
    /// Returns [`Error::InvalidPrivateScalar`] if the value is zero or not less than the curve
    /// order, and [`Error::OversizedInteger`] if the input is too wide under
    /// [`WidthPolicy::Reject`].
    pub fn from_be_bytes(bytes: &[u8], policy: WidthPolicy) -> Result<Self> {
        let mut fixed = to_fixed_width(bytes, policy)?;
        if !SECP256K1.is_valid_scalar(&fixed) {
            fixed.zeroize();
            return Err(Error::InvalidPrivateScalar);
        }

        Ok(Self(fixed))
    }

    /// Creates a scalar from a hex string.
    pub fn from_hex(value: &str, policy: WidthPolicy) -> Result<Self> {
        let mut bytes = decode_hex(value)?;
        let result = Self::from_be_bytes(&bytes, policy);
        bytes.zeroize();
        result
    }

    /// Generates a new random scalar using the thread-local random number generator.
    #[cfg(feature = "std")]
    pub fn random() -> Self {
        Self::with_rng(&mut rand::rng())
    }

    /// Generates a new random scalar using the provided random number generator.
    pub fn with_rng<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        let mut candidate = [0u8; UINT_BYTES];
        loop {
            rng.fill_bytes(&mut candidate);
            if SECP256K1.is_valid_scalar(&candidate) {
                return Self(candidate);
            }
        }
    }

    /// Returns the big-endian encoding of this scalar.
    pub fn to_bytes(&self) -> [u8; UINT_BYTES] {
        self.0
    }

    /// Returns the x-coordinate of `self * G`, which is what this party publishes.
    pub fn public_key_x(&self) -> Result<PublicKeyX> {
        let scalar = self.to_nonzero_scalar()?;
        let point = (ProjectivePoint::GENERATOR * *scalar).to_affine();

        let mut x = [0u8; UINT_BYTES];
        x.copy_from_slice(&point.x());
        Ok(PublicKeyX(x))
    }

    fn to_nonzero_scalar(&self) -> Result<NonZeroScalar> {
        Option::<NonZeroScalar>::from(NonZeroScalar::from_repr(FieldBytes::from(self.0)))
            .ok_or(Error::InvalidPrivateScalar)
    }
}

impl fmt::Debug for PrivateScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateScalar(<redacted>)")
    }
}

impl Zeroize for PrivateScalar {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Drop for PrivateScalar {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for PrivateScalar {}

// PUBLIC KEY
// ================================================================================================

/// The x-coordinate of a remote party's public point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKeyX([u8; UINT_BYTES]);

impl PublicKeyX {
    /// Creates a public key from a big-endian unsigned integer of any width.
    ///
    /// The value is not checked against the curve here; see [`PublicKeyX::to_point`].
    pub fn from_be_bytes(bytes: &[u8], policy: WidthPolicy) -> Result<Self> {
        Ok(Self(to_fixed_width(bytes, policy)?))
    }

    /// Creates a public key from a hex string.
    pub fn from_hex(value: &str, policy: WidthPolicy) -> Result<Self> {
        Ok(Self(fixed_width_from_hex(value, policy)?))
    }

    /// Returns the big-endian encoding of the x-coordinate.
    pub fn to_bytes(&self) -> [u8; UINT_BYTES] {
        self.0
    }

    /// Returns the x-coordinate as lowercase hex without leading zeros.
    pub fn to_hex(&self) -> String {
        to_minimal_hex(&self.0)
    }

    /// Returns the SEC1 compressed encoding `0x02 || x`.
    pub fn to_compressed(&self) -> [u8; COMPRESSED_POINT_BYTES] {
        let mut out = [0u8; COMPRESSED_POINT_BYTES];
        out[0] = EVEN_Y_TAG;
        out[1..].copy_from_slice(&self.0);
        out
    }

    /// Decompresses this x-coordinate into the curve point with even y.
    ///
    /// # Errors
    /// Returns [`Error::InvalidPublicKey`] if `x` is not a field element or `x^3 + 7` is not a
    /// square modulo `p`.
    pub fn to_point(&self) -> Result<AffinePoint> {
        if !SECP256K1.is_field_element(&self.0) {
            return Err(Error::InvalidPublicKey);
        }

        let x = FieldBytes::from(self.0);
        Option::<AffinePoint>::from(AffinePoint::decompress(&x, 0u8.into()))
            .ok_or(Error::InvalidPublicKey)
    }
}

// SHARED SECRET
// ================================================================================================

/// The x-coordinate of the agreed point, used as raw symmetric key material.
#[derive(Clone, PartialEq, Eq)]
pub struct SharedSecret([u8; UINT_BYTES]);

impl SharedSecret {
    /// Wraps key material received out of band, e.g. a secret printed by [`Self::to_hex`].
    pub fn from_be_bytes(bytes: &[u8], policy: WidthPolicy) -> Result<Self> {
        Ok(Self(to_fixed_width(bytes, policy)?))
    }

    /// Parses key material from a hex string.
    pub fn from_hex(value: &str, policy: WidthPolicy) -> Result<Self> {
        Ok(Self(fixed_width_from_hex(value, policy)?))
    }

    /// Returns the 32 raw key bytes.
    pub fn as_bytes(&self) -> &[u8; UINT_BYTES] {
        &self.0
    }

    /// Returns the secret as lowercase hex without leading zeros.
    pub fn to_hex(&self) -> String {
        to_minimal_hex(&self.0)
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret(<redacted>)")
    }
}

impl Zeroize for SharedSecret {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Drop for SharedSecret {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for SharedSecret {}

// KEY AGREEMENT
// ================================================================================================

/// Computes the ECDH shared secret between a local scalar and a remote x-coordinate.
///
/// The result is identical for `(a, x(b*G))` and `(b, x(a*G))`.
///
/// # Errors
/// Returns [`Error::InvalidPublicKey`] if `remote_x` does not decode to a curve point.
pub fn agree(private_scalar: &PrivateScalar, remote_x: &PublicKeyX) -> Result<SharedSecret> {
    let scalar = private_scalar.to_nonzero_scalar()?;
    let point = remote_x.to_point()?;

    let shared = k256::ecdh::diffie_hellman(scalar, point);

    let mut secret = [0u8; UINT_BYTES];
    secret.copy_from_slice(shared.raw_secret_bytes());
    tracing::debug!(curve = SECP256K1.name, "computed ECDH shared secret");

    Ok(SharedSecret(secret))
}
