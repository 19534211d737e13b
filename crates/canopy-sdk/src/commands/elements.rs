//! Element file loading and tree construction.

use std::path::Path;

use canopy_core::base::decode_prefixed_hex;
use canopy_core::schema::snapshot::HashFunction;
use canopy_tree::MerkleTree;
use eyre::Context as _;
use tracing::{debug, info, instrument};

use crate::common::TreeConfig;

/// Read raw elements from a text file with one hex value per line.
///
/// Blank lines are kept as empty placeholders so that error positions match
/// line numbers; the tree drops them before validation.
///
/// # Errors
/// Returns an error if the file cannot be read or a line is not valid hex.
pub async fn read_elements(path: &Path) -> eyre::Result<Vec<Vec<u8>>> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read elements from {}", path.display()))?;

    text.lines()
        .enumerate()
        .map(|(index, line)| {
            let line = line.trim();
            if line.is_empty() {
                return Ok(Vec::new());
            }
            decode_prefixed_hex(line)
                .with_context(|| format!("Invalid hex on line {}", index.saturating_add(1)))
        })
        .collect()
}

/// Load the configured element file and build its tree.
///
/// # Errors
/// Returns an error if the file cannot be read or the tree cannot be built.
#[instrument(skip_all, fields(
    file = %config.elements_file.display(),
    hash = config.hash_function.as_str_name()
))]
pub async fn build_tree(config: &TreeConfig) -> eyre::Result<MerkleTree<HashFunction>> {
    let raw = read_elements(&config.elements_file).await?;
    debug!(lines = raw.len(), "Read element file");

    let hash_function = config.hash_function;
    let tree = tokio::task::spawn_blocking(move || MerkleTree::with_hasher(&raw, hash_function))
        .await??;

    info!(
        elements = tree.element_count(),
        depth = tree.depth(),
        root = %tree.root(),
        "Built merkle tree"
    );
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use canopy_core::base::Bytes32;
    use canopy_tree::merkle_root;
    use tempfile::NamedTempFile;
    use test_utils::filled;

    use super::*;

    fn write_lines(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file should be created");
        for line in lines {
            writeln!(file, "{line}").expect("line should be written");
        }
        file
    }

    #[tokio::test]
    async fn reads_prefixed_and_bare_hex_with_placeholders() {
        let a: Bytes32 = filled!(0xaa_u8);
        let b: Bytes32 = filled!(0xbb_u8);
        let bare = a.to_hex();
        let bare = bare.trim_start_matches("0x");
        let file = write_lines(&[bare, "", &format!("  {b}  ")]);

        let raw = read_elements(file.path()).await.expect("file should parse");

        assert_eq!(raw.len(), 3);
        assert_eq!(raw.first().map(Vec::as_slice), Some(a.to_bytes().as_slice()));
        assert_eq!(raw.get(1).map(Vec::len), Some(0));
        assert_eq!(raw.get(2).map(Vec::as_slice), Some(b.to_bytes().as_slice()));
    }

    #[tokio::test]
    async fn reports_line_of_bad_hex() {
        let file = write_lines(&["0x00", "zz"]);

        let err = read_elements(file.path())
            .await
            .expect_err("non-hex line should fail");
        assert!(format!("{err:#}").contains("line 2"));
    }

    #[tokio::test]
    async fn builds_tree_from_file() {
        let elements: Vec<Bytes32> = (1..=4_u8).map(|v| filled!(v)).collect();
        let lines: Vec<String> = elements.iter().map(ToString::to_string).collect();
        let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
        let file = write_lines(&lines);

        let config = TreeConfig {
            elements_file: file.path().to_path_buf(),
            hash_function: HashFunction::Keccak256,
        };
        let tree = build_tree(&config).await.expect("tree should build");

        assert_eq!(tree.element_count(), 4);
        assert_eq!(tree.root(), merkle_root(&elements).expect("root should compute"));
    }

    #[tokio::test]
    async fn rejects_short_element() {
        let file = write_lines(&["0x0102"]);
        let config = TreeConfig {
            elements_file: file.path().to_path_buf(),
            hash_function: HashFunction::Sha256,
        };

        assert!(build_tree(&config).await.is_err());
    }
}
