//! Node hashing.
//!
//! The hash primitive is injected through [`MerkleHasher`]. Builder and
//! verifier both go through [`combine`] / [`hash_sorted_pair`], so they agree
//! bit for bit on every internal node.

use canopy_core::base::{BYTES32_SIZE, Bytes32};
use canopy_core::schema::snapshot::HashFunction;
use sha2::Digest as _;

/// A collision-resistant hash producing 32 bytes.
pub trait MerkleHasher {
    /// Hash arbitrary bytes.
    fn hash(&self, data: &[u8]) -> Bytes32;
}

impl<F> MerkleHasher for F
where
    F: Fn(&[u8]) -> [u8; BYTES32_SIZE],
{
    fn hash(&self, data: &[u8]) -> Bytes32 {
        Bytes32::new(self(data))
    }
}

/// Keccak-256, matching EVM `keccak256` / Solidity `MerkleProof` verifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keccak256Hasher;

impl MerkleHasher for Keccak256Hasher {
    fn hash(&self, data: &[u8]) -> Bytes32 {
        Bytes32::new(sha3::Keccak256::digest(data).into())
    }
}

/// SHA-256.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256Hasher;

impl MerkleHasher for Sha256Hasher {
    fn hash(&self, data: &[u8]) -> Bytes32 {
        Bytes32::new(sha2::Sha256::digest(data).into())
    }
}

impl MerkleHasher for HashFunction {
    fn hash(&self, data: &[u8]) -> Bytes32 {
        match self {
            Self::Keccak256 => Keccak256Hasher.hash(data),
            Self::Sha256 => Sha256Hasher.hash(data),
        }
    }
}

/// Hash two nodes after putting them in ascending byte order.
///
/// The preimage is `min(a, b) || max(a, b)`, which makes the operation
/// commutative.
#[must_use]
pub fn hash_sorted_pair<H>(hasher: &H, a: &Bytes32, b: &Bytes32) -> Bytes32
where
    H: MerkleHasher + ?Sized,
{
    let (low, high) = if a <= b { (a, b) } else { (b, a) };

    let mut preimage = [0_u8; 2 * BYTES32_SIZE];
    let (left, right) = preimage.split_at_mut(BYTES32_SIZE);
    left.copy_from_slice(low.as_ref());
    right.copy_from_slice(high.as_ref());

    hasher.hash(&preimage)
}

/// Combine two optional nodes into their parent.
///
/// A missing partner means the present node is carried forward unchanged.
/// Returns `None` only when both are missing.
#[must_use]
pub fn combine<H>(hasher: &H, first: Option<&Bytes32>, second: Option<&Bytes32>) -> Option<Bytes32>
where
    H: MerkleHasher + ?Sized,
{
    match (first, second) {
        (Some(first), Some(second)) => Some(hash_sorted_pair(hasher, first, second)),
        (Some(only), None) | (None, Some(only)) => Some(*only),
        (None, None) => None,
    }
}
