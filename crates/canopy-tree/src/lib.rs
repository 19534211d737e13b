//! Sorted-pair Merkle tree utilities.
//!
//! Leaves are deduplicated and sorted before layering, and every internal node
//! hashes its children in byte order. The root therefore does not depend on the
//! input order, and proofs are plain sibling lists without direction bits.

mod core;
mod hasher;
mod proof;
mod tree;

pub use core::MerkleTreeError;

pub use hasher::{Keccak256Hasher, MerkleHasher, Sha256Hasher, combine, hash_sorted_pair};
pub use proof::{
    MerkleProof, compute_root, verify_packed_proof, verify_proof, verify_proof_bytes,
};
pub use tree::{MerkleTree, merkle_root};
