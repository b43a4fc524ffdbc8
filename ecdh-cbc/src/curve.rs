//! Domain parameters of the secp256k1 curve.
//!
//! The values are fixed by SEC 2 and are exposed as a single immutable [`SECP256K1`] constant.
//! Point arithmetic is performed by `k256`; these parameters are used to validate inputs before
//! they reach it and to describe the curve to callers.

use k256::elliptic_curve::bigint::{Encoding, U256};

use crate::encoding::UINT_BYTES;

// CONSTANTS
// ================================================================================================

/// secp256k1 domain parameters as defined in SEC 2, section 2.4.1.
pub const SECP256K1: CurveParameters = CurveParameters {
    name: "secp256k1",
    p: U256::from_be_hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F"),
    n: U256::from_be_hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141"),
    gx: U256::from_be_hex("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798"),
    gy: U256::from_be_hex("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8"),
    h: 1,
};

// CURVE PARAMETERS
// ================================================================================================

/// Domain parameters of a short Weierstrass curve `y^2 = x^3 + 7` over a prime field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveParameters {
    /// Standard name of the curve.
    pub name: &'static str,
    /// Field prime.
    pub p: U256,
    /// Order of the generator.
    pub n: U256,
    /// x-coordinate of the generator.
    pub gx: U256,
    /// y-coordinate of the generator.
    pub gy: U256,
    /// Cofactor.
    pub h: u32,
}

impl CurveParameters {
    /// Returns true if the big-endian integer is in `[1, n)`.
    pub fn is_valid_scalar(&self, bytes: &[u8; UINT_BYTES]) -> bool {
        let value = U256::from_be_slice(bytes);
        value != U256::ZERO && value < self.n
    }

    /// Returns true if the big-endian integer is in `[0, p)`.
    pub fn is_field_element(&self, bytes: &[u8; UINT_BYTES]) -> bool {
        U256::from_be_slice(bytes) < self.p
    }

    /// Returns the SEC1 compressed encoding of the generator.
    pub fn generator_compressed(&self) -> [u8; UINT_BYTES + 1] {
        let mut out = [0u8; UINT_BYTES + 1];
        out[0] = if self.gy.to_be_bytes()[UINT_BYTES - 1] & 1 == 0 { 0x02 } else { 0x03 };
        out[1..].copy_from_slice(&self.gx.to_be_bytes());
        out
    }
}

// TESTS
// ================================================================================================
