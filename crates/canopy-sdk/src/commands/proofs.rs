use std::path::PathBuf;

use canopy_core::base::Bytes32;
use canopy_core::schema::bundle::{ProofBundle, ProofEntry};
use canopy_tree::MerkleProof;
use eyre::Context as _;
use tracing::{info, instrument};

use super::elements::build_tree;
use crate::common::TreeConfig;

/// Generate inclusion proofs for `targets` and export them as a bundle.
///
/// An empty `targets` list proves every element of the tree.
///
/// # Errors
/// Returns an error if the tree cannot be built, a target is not an element
/// of the tree, or the bundle cannot be written.
#[instrument(skip_all, fields(targets = targets.len(), output = %proofs_output_file.display()))]
pub async fn generate_proofs(
    config: TreeConfig,
    targets: Vec<Bytes32>,
    proofs_output_file: PathBuf,
) -> eyre::Result<ProofBundle> {
    let tree = build_tree(&config).await?;

    let proofs = if targets.is_empty() {
        tree.proofs()
            .map(|(element, proof)| proof_entry(element, proof))
            .collect()
    } else {
        targets
            .into_iter()
            .map(|element| Ok(proof_entry(element, tree.proof(&element)?)))
            .collect::<eyre::Result<Vec<_>>>()?
    };

    let bundle = ProofBundle {
        hash_function: config.hash_function,
        root: tree.root(),
        proofs,
    };

    let json = serde_json::to_string_pretty(&bundle)?;
    tokio::fs::write(&proofs_output_file, json)
        .await
        .with_context(|| format!("Failed to write proofs to {}", proofs_output_file.display()))?;

    info!(
        file = ?proofs_output_file,
        count = bundle.proofs.len(),
        root = %bundle.root,
        "Exported proofs"
    );
    Ok(bundle)
}

fn proof_entry(element: Bytes32, proof: MerkleProof) -> ProofEntry {
    ProofEntry {
        element,
        packed: proof.to_packed_bytes(),
        proof: proof.into_inner(),
    }
}

#[cfg(test)]
mod tests {
    use canopy_core::schema::snapshot::HashFunction;
    use canopy_tree::verify_proof;
    use tempfile::TempDir;
    use test_utils::filled;

    use super::*;

    async fn setup(count: u8) -> (TempDir, TreeConfig) {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let elements_file = dir.path().join("elements.txt");
        let text: String = (1..=count)
            .map(|v| format!("{}\n", Bytes32::new([v; 32])))
            .collect();
        tokio::fs::write(&elements_file, text)
            .await
            .expect("elements should be written");
        let config = TreeConfig {
            elements_file,
            hash_function: HashFunction::Keccak256,
        };
        (dir, config)
    }

    #[tokio::test]
    async fn proves_every_element_without_targets() {
        let (dir, config) = setup(5).await;
        let output = dir.path().join("proofs.json");

        let bundle = generate_proofs(config, vec![], output.clone())
            .await
            .expect("proofs should generate");

        assert_eq!(bundle.proofs.len(), 5);
        for entry in &bundle.proofs {
            assert!(verify_proof(
                &bundle.hash_function,
                &entry.proof,
                &bundle.root,
                &entry.element
            ));
            assert_eq!(
                MerkleProof::new(entry.proof.clone()).to_packed_bytes(),
                entry.packed
            );
        }

        let written: ProofBundle = serde_json::from_str(
            &tokio::fs::read_to_string(&output)
                .await
                .expect("bundle should be readable"),
        )
        .expect("bundle should parse");
        assert_eq!(written, bundle);
    }

    #[tokio::test]
    async fn proves_only_requested_targets() {
        let (dir, config) = setup(4).await;
        let target: Bytes32 = filled!(3_u8);

        let bundle = generate_proofs(config, vec![target], dir.path().join("proofs.json"))
            .await
            .expect("proofs should generate");

        assert_eq!(bundle.proofs.len(), 1);
        assert_eq!(bundle.proofs.first().map(|entry| entry.element), Some(target));
    }

    #[tokio::test]
    async fn write_error_names_output_file() {
        let (dir, config) = setup(2).await;
        let output = dir.path().join("missing-dir").join("proofs.json");

        let err = generate_proofs(config, vec![], output)
            .await
            .expect_err("output directory does not exist");
        assert!(format!("{err:#}").contains("missing-dir"));
    }

    #[tokio::test]
    async fn unknown_target_fails() {
        let (dir, config) = setup(4).await;

        let result =
            generate_proofs(config, vec![filled!(9_u8)], dir.path().join("proofs.json")).await;
        assert!(result.is_err());
    }
}
