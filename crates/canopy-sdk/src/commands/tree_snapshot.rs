use std::path::PathBuf;

use canopy_core::schema::snapshot::TreeSnapshot;
use eyre::Context as _;
use tracing::{info, instrument};

use super::elements::build_tree;
use crate::common::TreeConfig;

/// Build the tree over the configured elements and export its root.
///
/// # Errors
/// Returns an error if the elements cannot be loaded, the tree cannot be
/// built, or the snapshot cannot be written.
#[instrument(skip_all, fields(output = %snapshot_output_file.display()))]
pub async fn build_tree_snapshot(
    config: TreeConfig,
    snapshot_output_file: PathBuf,
) -> eyre::Result<TreeSnapshot> {
    let tree = build_tree(&config).await?;

    let snapshot = TreeSnapshot::new(
        config.hash_function,
        tree.root(),
        u64::try_from(tree.element_count()).context("Element count does not fit u64")?,
        u32::try_from(tree.depth()).context("Tree depth does not fit u32")?,
    );

    let json = serde_json::to_string_pretty(&snapshot)?;
    tokio::fs::write(&snapshot_output_file, json)
        .await
        .with_context(|| {
            format!(
                "Failed to write tree snapshot to {}",
                snapshot_output_file.display()
            )
        })?;

    info!(file = ?snapshot_output_file, root = %snapshot.root, "Exported tree snapshot");
    Ok(snapshot)
}
