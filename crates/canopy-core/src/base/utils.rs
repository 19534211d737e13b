//! Hex encoding helpers for textual boundaries.
//!
//! Every 32-byte value that leaves the library as text (roots, elements, proof
//! siblings, packed proofs) is written as `0x` followed by lowercase hex digits.

use std::borrow::Cow;

use serde::Deserialize as _;
use thiserror::Error;

/// Prefix used for all hex-encoded values.
const HEX_PREFIX: &str = "0x";

/// Errors raised while decoding hex text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HexError {
    /// The text is not valid hexadecimal.
    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// The decoded value has the wrong number of bytes.
    #[error("Expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Required number of bytes.
        expected: usize,
        /// Number of bytes found.
        actual: usize,
    },
}

/// Encode bytes as a `0x`-prefixed lowercase hex string.
#[must_use]
pub fn encode_prefixed_hex(bytes: impl AsRef<[u8]>) -> String {
    format!("{HEX_PREFIX}{}", hex::encode(bytes))
}

/// Decode a hex string with or without the `0x` prefix.
///
/// Surrounding whitespace is ignored. An empty string decodes to an empty vector.
///
/// # Errors
/// Returns an error if the text is not valid hexadecimal.
pub fn decode_prefixed_hex(text: &str) -> Result<Vec<u8>, HexError> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix(HEX_PREFIX).unwrap_or(trimmed);
    Ok(hex::decode(digits)?)
}

/// A `serde_as` adapter that writes bytes as `0x`-prefixed hex.
///
/// Deserialization accepts the prefix as optional.
pub struct PrefixedHex;

impl<const N: usize> serde_with::SerializeAs<[u8; N]> for PrefixedHex {
    fn serialize_as<S>(value: &[u8; N], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&encode_prefixed_hex(value))
    }
}

impl<'de, const N: usize> serde_with::DeserializeAs<'de, [u8; N]> for PrefixedHex {
    fn deserialize_as<D>(deserializer: D) -> Result<[u8; N], D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bytes = <Self as serde_with::DeserializeAs<'de, Vec<u8>>>::deserialize_as(deserializer)?;
        let actual = bytes.len();
        bytes.try_into().map_err(|_| {
            serde::de::Error::custom(HexError::InvalidLength {
                expected: N,
                actual,
            })
        })
    }
}

impl serde_with::SerializeAs<Vec<u8>> for PrefixedHex {
    fn serialize_as<S>(value: &Vec<u8>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&encode_prefixed_hex(value))
    }
}

impl<'de> serde_with::DeserializeAs<'de, Vec<u8>> for PrefixedHex {
    fn deserialize_as<D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = Cow::<'de, str>::deserialize(deserializer)?;
        decode_prefixed_hex(&text).map_err(serde::de::Error::custom)
    }
}
