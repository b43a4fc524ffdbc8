//! Fixed-width big-endian encoding of 256-bit unsigned integers.
//!
//! Keys and shared secrets travel as hex strings of arbitrary width (a scalar such as `0x2222`
//! need not be zero padded), but the curve and the cipher consume exactly [`UINT_BYTES`] bytes.
//! Inputs shorter than that are left-padded with zeros. Inputs whose significant bytes exceed
//! the width are handled according to a [`WidthPolicy`].

use alloc::{string::String, vec::Vec};

use crate::error::{Error, Result};

// CONSTANTS
// ================================================================================================

/// Width, in bytes, of every integer handled by this crate.
pub const UINT_BYTES: usize = 32;

// WIDTH POLICY
// ================================================================================================

/// What to do with integers that have more than [`UINT_BYTES`] significant bytes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WidthPolicy {
    /// Keep the low [`UINT_BYTES`] bytes and drop the rest.
    ///
    /// This is how peers speaking the `<base64>?iv=<base64>` format have always behaved, so it
    /// is the default. A warning is logged whenever bytes are dropped.
    #[default]
    Truncate,
    /// Fail with [`Error::OversizedInteger`].
    Reject,
}

// ENCODING
// ================================================================================================

/// Encodes a big-endian unsigned integer into exactly [`UINT_BYTES`] bytes.
pub fn to_fixed_width(bytes: &[u8], policy: WidthPolicy) -> Result<[u8; UINT_BYTES]> {
    let first_significant = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let significant = &bytes[first_significant..];

    let mut out = [0u8; UINT_BYTES];
    if significant.len() <= UINT_BYTES {
        out[UINT_BYTES - significant.len()..].copy_from_slice(significant);
        return Ok(out);
    }

    match policy {
        WidthPolicy::Truncate => {
            let dropped = significant.len() - UINT_BYTES;
            tracing::warn!(
                len = significant.len(),
                dropped,
                "integer wider than {UINT_BYTES} bytes, keeping the low-order bytes"
            );
            out.copy_from_slice(&significant[dropped..]);
            Ok(out)
        },
        WidthPolicy::Reject => Err(Error::OversizedInteger { len: significant.len() }),
    }
}

/// Decodes a hex string into bytes.
///
/// An optional `0x` prefix and surrounding whitespace are ignored. An odd number of digits is
/// read as if a leading zero were present.
pub fn decode_hex(value: &str) -> Result<Vec<u8>> {
    let value = value.trim();
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);

    if digits.is_empty() {
        return Err(Error::InvalidHex);
    }

    if digits.len() % 2 == 1 {
        let mut padded = String::with_capacity(digits.len() + 1);
        padded.push('0');
        padded.push_str(digits);
        hex::decode(padded).map_err(|_| Error::InvalidHex)
    } else {
        hex::decode(digits).map_err(|_| Error::InvalidHex)
    }
}

/// Decodes a hex string straight into a fixed-width integer.
pub fn fixed_width_from_hex(value: &str, policy: WidthPolicy) -> Result<[u8; UINT_BYTES]> {
    to_fixed_width(&decode_hex(value)?, policy)
}

/// Renders a fixed-width integer as lowercase hex without leading zeros.
///
/// Zero is rendered as `"0"`.
pub fn to_minimal_hex(bytes: &[u8; UINT_BYTES]) -> String {
    let encoded = hex::encode(bytes);
    let trimmed = encoded.trim_start_matches('0');
    if trimmed.is_empty() { String::from("0") } else { String::from(trimmed) }
}

// TESTS
// ================================================================================================

#[cfg(test)]
mod tests {
    use alloc::vec;

    use assert_matches::assert_matches;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::short(&[0x22, 0x22])]
    #[case::leading_zeros(&[0, 0, 0, 0x22, 0x22])]
    fn pads_on_the_left(#[case] input: &[u8]) {
        let out = to_fixed_width(input, WidthPolicy::Reject).unwrap();

        assert_eq!(&out[..UINT_BYTES - 2], &[0u8; UINT_BYTES - 2]);
        assert_eq!(&out[UINT_BYTES - 2..], &[0x22, 0x22]);
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(to_fixed_width(&[], WidthPolicy::Reject).unwrap(), [0u8; UINT_BYTES]);
    }

    #[test]
    fn sign_byte_is_not_significant() {
        // A two's complement encoder emits a 0x00 sign byte in front of a value with the top bit
        // set, giving 33 bytes that still fit.
        let mut input = vec![0u8];
        input.extend_from_slice(&[0xff; UINT_BYTES]);

        assert_eq!(to_fixed_width(&input, WidthPolicy::Reject).unwrap(), [0xff; UINT_BYTES]);
    }

    #[test]
    fn oversized_is_truncated_to_low_bytes() {
        let mut input = vec![0xaa, 0xbb];
        input.extend((0..UINT_BYTES as u8).collect::<Vec<_>>());

        let out = to_fixed_width(&input, WidthPolicy::Truncate).unwrap();
        assert_eq!(out.to_vec(), (0..UINT_BYTES as u8).collect::<Vec<_>>());
    }

    #[test]
    fn oversized_is_rejected() {
        let input = [0x01; UINT_BYTES + 3];

        assert_matches!(
            to_fixed_width(&input, WidthPolicy::Reject),
            Err(Error::OversizedInteger { len }) if len == UINT_BYTES + 3
        );
    }

    #[rstest]
    #[case("2222", vec![0x22, 0x22])]
    #[case("0x2222", vec![0x22, 0x22])]
    #[case("  0XAbCd\n", vec![0xab, 0xcd])]
    #[case("fff", vec![0x0f, 0xff])]
    fn hex_decoding(#[case] input: &str, #[case] expected: Vec<u8>) {
        assert_eq!(decode_hex(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("0x")]
    #[case("12g4")]
    #[case("not hex")]
    fn hex_decoding_failures(#[case] input: &str) {
        assert_matches!(decode_hex(input), Err(Error::InvalidHex));
    }

    #[test]
    fn minimal_hex() {
        let mut value = [0u8; UINT_BYTES];
        assert_eq!(to_minimal_hex(&value), "0");

        value[UINT_BYTES - 1] = 0x0a;
        assert_eq!(to_minimal_hex(&value), "a");

        value[0] = 0xf0;
        assert_eq!(to_minimal_hex(&value).len(), 2 * UINT_BYTES);
    }
}
