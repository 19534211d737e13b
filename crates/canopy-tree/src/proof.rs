//! Inclusion proofs and their verification.
//!
//! Verification is a left fold of the pair hash over the siblings, starting
//! from the element. No positional metadata is needed because the pair hash
//! is commutative.

use std::ops::Deref;

use canopy_core::base::{BYTES32_SIZE, Bytes32};

use crate::core::MerkleTreeError;
use crate::hasher::{MerkleHasher, hash_sorted_pair};

/// Sibling values from leaf to root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MerkleProof(Vec<Bytes32>);

impl MerkleProof {
    /// Wrap a sibling list.
    #[must_use]
    pub const fn new(siblings: Vec<Bytes32>) -> Self {
        Self(siblings)
    }

    /// Parse siblings from their contiguous concatenation.
    ///
    /// # Errors
    /// Returns [`MerkleTreeError::MalformedProof`] if the length is not a
    /// multiple of 32.
    pub fn from_packed_bytes(packed: &[u8]) -> Result<Self, MerkleTreeError> {
        let (chunks, rest) = packed.as_chunks::<BYTES32_SIZE>();
        if !rest.is_empty() {
            return Err(MerkleTreeError::MalformedProof { len: packed.len() });
        }
        Ok(Self(chunks.iter().map(Bytes32::from).collect()))
    }

    /// Siblings concatenated in order with no separators.
    ///
    /// This is the layout on-chain verifiers expect for their `proof` argument.
    #[must_use]
    pub fn to_packed_bytes(&self) -> Vec<u8> {
        let mut packed = Vec::with_capacity(self.0.len().saturating_mul(BYTES32_SIZE));
        for sibling in &self.0 {
            packed.extend_from_slice(sibling.as_ref());
        }
        packed
    }

    /// Root reached by folding this proof over `element`.
    #[must_use]
    pub fn compute_root<H>(&self, hasher: &H, element: &Bytes32) -> Bytes32
    where
        H: MerkleHasher + ?Sized,
    {
        compute_root(hasher, &self.0, element)
    }

    /// Whether this proof links `element` to `root`.
    #[must_use]
    pub fn verify<H>(&self, hasher: &H, root: &Bytes32, element: &Bytes32) -> bool
    where
        H: MerkleHasher + ?Sized,
    {
        verify_proof(hasher, &self.0, root, element)
    }

    /// Consume the proof, returning the siblings.
    #[must_use]
    pub fn into_inner(self) -> Vec<Bytes32> {
        self.0
    }
}

impl Deref for MerkleProof {
    type Target = [Bytes32];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Bytes32>> for MerkleProof {
    fn from(siblings: Vec<Bytes32>) -> Self {
        Self(siblings)
    }
}

impl From<MerkleProof> for Vec<Bytes32> {
    fn from(proof: MerkleProof) -> Self {
        proof.0
    }
}

/// Fold `proof` over `element` with the pair hash.
#[must_use]
pub fn compute_root<H>(hasher: &H, proof: &[Bytes32], element: &Bytes32) -> Bytes32
where
    H: MerkleHasher + ?Sized,
{
    proof.iter().fold(*element, |running, sibling| {
        hash_sorted_pair(hasher, &running, sibling)
    })
}

/// Whether `proof` links `element` to `root`.
///
/// A mismatch is a normal `false` result.
#[must_use]
pub fn verify_proof<H>(hasher: &H, proof: &[Bytes32], root: &Bytes32, element: &Bytes32) -> bool
where
    H: MerkleHasher + ?Sized,
{
    compute_root(hasher, proof, element) == *root
}

/// Verify a proof given as untyped byte strings.
///
/// # Errors
/// Returns [`MerkleTreeError::InvalidLength`] if the root, the element or any
/// sibling is not 32 bytes.
pub fn verify_proof_bytes<H, S>(
    hasher: &H,
    proof: &[S],
    root: &[u8],
    element: &[u8],
) -> Result<bool, MerkleTreeError>
where
    H: MerkleHasher + ?Sized,
    S: AsRef<[u8]>,
{
    let root = to_bytes32("root", root)?;
    let element = to_bytes32("element", element)?;
    let siblings = proof
        .iter()
        .map(|sibling| to_bytes32("proof sibling", sibling.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(verify_proof(hasher, &siblings, &root, &element))
}

/// Verify a proof given as contiguous sibling bytes.
///
/// # Errors
/// Returns [`MerkleTreeError::MalformedProof`] if `packed` is not a whole
/// number of siblings.
pub fn verify_packed_proof<H>(
    hasher: &H,
    packed: &[u8],
    root: &Bytes32,
    element: &Bytes32,
) -> Result<bool, MerkleTreeError>
where
    H: MerkleHasher + ?Sized,
{
    let proof = MerkleProof::from_packed_bytes(packed)?;
    Ok(proof.verify(hasher, root, element))
}

fn to_bytes32(what: &'static str, bytes: &[u8]) -> Result<Bytes32, MerkleTreeError> {
    Bytes32::try_from(bytes).map_err(|_| MerkleTreeError::InvalidLength {
        what,
        len: bytes.len(),
    })
}
