//! Tree building subcommand arguments.

use std::path::PathBuf;

use canopy_core::base::Bytes32;

use super::TreeArgs;
use super::constants::{
    CANOPY_PROOFS_OUT, CANOPY_SNAPSHOT_OUT, DEFAULT_PROOFS_FILE, DEFAULT_SNAPSHOT_FILE,
};
use super::parse_bytes32;

/// Arguments for `root`.
#[derive(Debug, clap::Args)]
pub struct RootArgs {
    /// Tree input arguments.
    #[command(flatten)]
    pub tree: TreeArgs,
    /// Tree snapshot output file.
    #[arg(long, env = CANOPY_SNAPSHOT_OUT, default_value = DEFAULT_SNAPSHOT_FILE)]
    pub snapshot_out: PathBuf,
}

/// Arguments for `prove`.
#[derive(Debug, clap::Args)]
pub struct ProveArgs {
    /// Tree input arguments.
    #[command(flatten)]
    pub tree: TreeArgs,
    /// Element to prove (repeatable). Proves every element when omitted.
    #[arg(long = "element", value_parser = parse_bytes32)]
    pub targets: Vec<Bytes32>,
    /// Proof bundle output file.
    #[arg(long, env = CANOPY_PROOFS_OUT, default_value = DEFAULT_PROOFS_FILE)]
    pub proofs_out: PathBuf,
}
