//! Foundational primitive types and byte/serde helpers.

mod bytes32;
mod elements;
mod utils;

pub use bytes32::{BYTES32_SIZE, Bytes32};
pub use elements::{ElementError, ElementSet};
pub use utils::{HexError, PrefixedHex, decode_prefixed_hex, encode_prefixed_hex};
