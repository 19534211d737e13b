//! Encoding of proofs for an on-chain `MerkleProof` verifier.
//!
//! The contract method takes the siblings as one `bytes` argument and the
//! root and element as `bytes32`, all as `0x`-prefixed hex.

use canopy_core::base::{Bytes32, encode_prefixed_hex};
use canopy_tree::MerkleProof;
use serde::Serialize;

/// Hex-encoded arguments of a contract `checkProof(proof, root, element)` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractCall {
    /// Siblings concatenated in order.
    pub proof: String,
    /// Expected tree root.
    pub root: String,
    /// Element being proven.
    pub element: String,
}

impl ContractCall {
    /// Encode a proof, root and element.
    #[must_use]
    pub fn new(proof: &[Bytes32], root: &Bytes32, element: &Bytes32) -> Self {
        let packed = MerkleProof::new(proof.to_vec()).to_packed_bytes();
        Self {
            proof: encode_prefixed_hex(packed),
            root: root.to_hex(),
            element: element.to_hex(),
        }
    }
}

/// Wrap a contract method so it can be called with binary proof data.
///
/// The returned closure encodes its arguments with [`ContractCall::new`] and
/// forwards them to `method` as `(proof, root, element)`.
pub fn check_proof_contract_factory<F, R>(method: F) -> impl Fn(&[Bytes32], &Bytes32, &Bytes32) -> R
where
    F: Fn(String, String, String) -> R,
{
    move |proof, root, element| {
        let call = ContractCall::new(proof, root, element);
        method(call.proof, call.root, call.element)
    }
}
