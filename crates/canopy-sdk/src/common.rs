//! CLI-independent configuration types.

use std::path::PathBuf;

use canopy_core::schema::snapshot::HashFunction;

/// Where the tree elements come from and how nodes are hashed.
#[derive(Debug, Clone)]
pub struct TreeConfig {
    /// Text file with one hex element per line.
    pub elements_file: PathBuf,
    /// Hash primitive for internal nodes.
    pub hash_function: HashFunction,
}
