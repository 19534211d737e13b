//! Fixed-size 32-byte value used for elements, tree nodes and roots.
//!
//! Ordering is the derived array ordering, which is unsigned byte-lexicographic.
//! Tree canonicalisation and pair hashing both rely on it.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use super::utils::{HexError, PrefixedHex, decode_prefixed_hex, encode_prefixed_hex};

/// Size of an element, node or root in bytes.
pub const BYTES32_SIZE: usize = 32;

/// A 32-byte hash-sized value.
///
/// Serialized as a `0x`-prefixed hex string.
#[serde_as]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Bytes32(#[serde_as(as = "PrefixedHex")] [u8; BYTES32_SIZE]);

impl Bytes32 {
    /// All zeros.
    pub const ZERO: Self = Self([0_u8; BYTES32_SIZE]);

    /// Create a new value from a byte array.
    #[must_use]
    pub const fn new(bytes: [u8; BYTES32_SIZE]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; BYTES32_SIZE] {
        self.0
    }

    /// Encode as `0x`-prefixed lowercase hex.
    #[must_use]
    pub fn to_hex(&self) -> String {
        encode_prefixed_hex(self.0)
    }

    /// Decode from hex text, with or without the `0x` prefix.
    ///
    /// # Errors
    /// Returns an error if the text is not hex or does not hold exactly 32 bytes.
    pub fn from_hex(text: &str) -> Result<Self, HexError> {
        let bytes = decode_prefixed_hex(text)?;
        let actual = bytes.len();
        Self::try_from(bytes).map_err(|_| HexError::InvalidLength {
            expected: BYTES32_SIZE,
            actual,
        })
    }
}

impl fmt::Display for Bytes32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Bytes32 {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<&[u8; BYTES32_SIZE]> for Bytes32 {
    fn from(bytes: &[u8; BYTES32_SIZE]) -> Self {
        Self(*bytes)
    }
}

impl From<[u8; BYTES32_SIZE]> for Bytes32 {
    fn from(bytes: [u8; BYTES32_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<Bytes32> for [u8; BYTES32_SIZE] {
    fn from(value: Bytes32) -> Self {
        value.0
    }
}

impl AsRef<[u8; BYTES32_SIZE]> for Bytes32 {
    fn as_ref(&self) -> &[u8; BYTES32_SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for Bytes32 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Deref for Bytes32 {
    type Target = [u8; BYTES32_SIZE];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<&[u8]> for Bytes32 {
    type Error = std::array::TryFromSliceError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; BYTES32_SIZE] = slice.try_into()?;
        Ok(Self(arr))
    }
}

impl TryFrom<Vec<u8>> for Bytes32 {
    type Error = Vec<u8>;

    fn try_from(vec: Vec<u8>) -> Result<Self, Self::Error> {
        let arr: [u8; BYTES32_SIZE] = vec.try_into()?;
        Ok(Self(arr))
    }
}

impl schemars::JsonSchema for Bytes32 {
    fn schema_name() -> std::borrow::Cow<'static, str> {
        "Bytes32".into()
    }

    fn json_schema(_generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        schemars::json_schema!({
            "type": "string",
            "pattern": "^0x[0-9a-fA-F]{64}$",
            "description": "32-byte value as 0x-prefixed hex"
        })
    }
}
