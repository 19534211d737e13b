//! Shared tree error type.

use canopy_core::base::{Bytes32, ElementError};
use thiserror::Error;

/// Errors that can occur when building or querying a Merkle tree.
///
/// A proof that does not reproduce the expected root is not an error; the
/// verification functions return `false` for it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MerkleTreeError {
    /// An input element is not exactly 32 bytes.
    #[error("Invalid element: {0}")]
    InvalidElement(#[from] ElementError),

    /// The requested element is not a leaf of the tree.
    #[error("Element {0} not found in merkle tree")]
    ElementNotFound(Bytes32),

    /// No elements remain after dropping empty placeholders.
    #[error("Cannot build a merkle tree from zero elements")]
    EmptyTree,

    /// The leaf index is outside the leaf layer.
    #[error("Leaf index {index} out of range for {len} leaves")]
    IndexOutOfRange {
        /// Requested leaf index.
        index: usize,
        /// Number of leaves in the tree.
        len: usize,
    },

    /// Packed proof bytes are not a whole number of 32-byte siblings.
    #[error("Malformed proof: {len} bytes is not a multiple of 32")]
    MalformedProof {
        /// Byte length of the packed proof.
        len: usize,
    },

    /// A verifier input is not exactly 32 bytes.
    #[error("{what} is {len} bytes, expected 32")]
    InvalidLength {
        /// Which input was rejected.
        what: &'static str,
        /// Byte length of the rejected input.
        len: usize,
    },
}
