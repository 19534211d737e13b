//! Proof bundle schema.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use super::snapshot::HashFunction;
use crate::base::{Bytes32, PrefixedHex};

/// A set of inclusion proofs against one tree root.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct ProofBundle {
    /// Hash primitive used for internal nodes.
    pub hash_function: HashFunction,
    /// Root every entry is proven against.
    pub root: Bytes32,
    /// One entry per proven element.
    pub proofs: Vec<ProofEntry>,
}

/// Inclusion proof for a single element.
#[serde_as]
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct ProofEntry {
    /// The proven element.
    pub element: Bytes32,
    /// Sibling values from leaf to root.
    pub proof: Vec<Bytes32>,
    /// The siblings concatenated in order, as passed to an on-chain verifier.
    #[serde_as(as = "PrefixedHex")]
    #[schemars(with = "String")]
    pub packed: Vec<u8>,
}
