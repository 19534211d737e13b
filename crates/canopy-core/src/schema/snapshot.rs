//! Tree snapshot schema.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::base::Bytes32;

/// Hash primitive used for internal tree nodes.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HashFunction {
    /// Keccak-256, as computed by EVM `keccak256`.
    #[default]
    Keccak256,
    /// SHA-256.
    Sha256,
}

impl HashFunction {
    /// Parse from CLI/config string.
    #[must_use]
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "keccak256" => Some(Self::Keccak256),
            "sha256" => Some(Self::Sha256),
            _ => None,
        }
    }

    /// Name as written in configuration and JSON output.
    #[must_use]
    pub const fn as_str_name(self) -> &'static str {
        match self {
            Self::Keccak256 => "keccak256",
            Self::Sha256 => "sha256",
        }
    }
}

/// Commitment summary for a built tree.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct TreeSnapshot {
    /// Hash primitive used for internal nodes.
    pub hash_function: HashFunction,
    /// Tree root.
    pub root: Bytes32,
    /// Number of distinct elements in the tree.
    pub element_count: u64,
    /// Number of layers above the leaves.
    pub depth: u32,
}

impl TreeSnapshot {
    /// Create a new tree snapshot.
    #[must_use]
    pub const fn new(
        hash_function: HashFunction,
        root: Bytes32,
        element_count: u64,
        depth: u32,
    ) -> Self {
        Self {
            hash_function,
            root,
            element_count,
            depth,
        }
    }
}
