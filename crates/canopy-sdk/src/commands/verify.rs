use std::path::PathBuf;

use canopy_core::base::Bytes32;
use canopy_core::schema::bundle::ProofBundle;
use canopy_core::schema::snapshot::HashFunction;
use canopy_tree::{MerkleProof, verify_packed_proof};
use eyre::{Context as _, ensure};
use tracing::{info, instrument, warn};

/// Outcome of a successful bundle verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationReport {
    /// Hash primitive the bundle was checked with.
    pub hash_function: HashFunction,
    /// Root every proof reproduced.
    pub root: Bytes32,
    /// Number of proofs checked.
    pub verified: usize,
}

/// Verify every proof in a bundle file.
///
/// When `expected_root` is given, the bundle root must match it.
///
/// # Errors
/// Returns an error if the file cannot be parsed, the root does not match
/// `expected_root`, or any proof fails verification.
#[instrument(skip_all, fields(file = %proofs_file.display()))]
pub async fn verify_proofs(
    proofs_file: PathBuf,
    expected_root: Option<Bytes32>,
) -> eyre::Result<VerificationReport> {
    info!("Loading proof bundle for verification...");
    let text = tokio::fs::read_to_string(&proofs_file)
        .await
        .with_context(|| format!("Failed to read proof bundle {}", proofs_file.display()))?;
    let bundle: ProofBundle =
        serde_json::from_str(&text).context("Failed to parse proof bundle JSON")?;

    if let Some(expected) = expected_root {
        ensure!(
            bundle.root == expected,
            "Bundle root {} does not match expected root {expected}",
            bundle.root
        );
    }

    let hasher = bundle.hash_function;
    let root = bundle.root;
    let total = bundle.proofs.len();

    let mut invalid_count = 0_usize;
    for (index, entry) in bundle.proofs.iter().enumerate() {
        let proof = MerkleProof::new(entry.proof.clone());
        if proof.to_packed_bytes() != entry.packed {
            warn!(index, element = %entry.element, "Packed proof does not match siblings");
            invalid_count = invalid_count.saturating_add(1);
            continue;
        }
        if proof.verify(&hasher, &root, &entry.element) {
            info!(index, element = %entry.element, "Proof VALID");
        } else {
            warn!(index, element = %entry.element, "Proof INVALID");
            invalid_count = invalid_count.saturating_add(1);
        }
    }

    info!(
        valid = total.saturating_sub(invalid_count),
        invalid = invalid_count,
        total,
        "Verification complete"
    );

    ensure!(
        invalid_count == 0,
        "{invalid_count} proofs failed verification"
    );

    Ok(VerificationReport {
        hash_function: hasher,
        root,
        verified: total,
    })
}

/// Verify one element against a root with a packed proof.
///
/// A proof that does not reproduce the root yields `Ok(false)`.
///
/// # Errors
/// Returns an error if `packed_proof` is not a whole number of 32-byte siblings.
pub fn verify_single(
    hash_function: HashFunction,
    root: &Bytes32,
    element: &Bytes32,
    packed_proof: &[u8],
) -> eyre::Result<bool> {
    let valid = verify_packed_proof(&hash_function, packed_proof, root, element)?;
    if valid {
        info!(%element, %root, "Proof VALID");
    } else {
        warn!(%element, %root, "Proof INVALID");
    }
    Ok(valid)
}
