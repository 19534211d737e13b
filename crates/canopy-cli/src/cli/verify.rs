//! Verify subcommands.

use std::path::PathBuf;

use canopy_core::base::Bytes32;
use canopy_core::schema::snapshot::HashFunction;

use super::constants::{
    CANOPY_EXPECTED_ROOT, CANOPY_HASH, CANOPY_PROOFS_IN, DEFAULT_HASH, DEFAULT_PROOFS_FILE,
};
use super::{HexBytes, parse_bytes32, parse_hash_function, parse_hex_bytes};

/// Arguments for `verify bundle`.
#[derive(Debug, clap::Args)]
pub struct VerifyBundleArgs {
    /// Proof bundle produced by `prove`.
    #[arg(long, env = CANOPY_PROOFS_IN, default_value = DEFAULT_PROOFS_FILE)]
    pub proofs_in: PathBuf,
    /// Root the bundle must be proven against.
    #[arg(long, env = CANOPY_EXPECTED_ROOT, value_parser = parse_bytes32)]
    pub expected_root: Option<Bytes32>,
}

/// Arguments for `verify single`.
#[derive(Debug, clap::Args)]
pub struct VerifySingleArgs {
    /// Hash function the tree was built with.
    #[arg(
        long,
        env = CANOPY_HASH,
        default_value = DEFAULT_HASH,
        value_parser = parse_hash_function
    )]
    pub hash: HashFunction,
    /// Tree root.
    #[arg(long, value_parser = parse_bytes32)]
    pub root: Bytes32,
    /// Element being proven.
    #[arg(long, value_parser = parse_bytes32)]
    pub element: Bytes32,
    /// Siblings concatenated as one hex string. Empty for a single-element tree.
    #[arg(long, default_value = "0x", value_parser = parse_hex_bytes)]
    pub proof: HexBytes,
}

/// Verify command group.
#[derive(Debug, clap::Subcommand)]
pub enum VerifyCommands {
    /// Verify every proof in a bundle.
    Bundle {
        #[command(flatten)]
        args: VerifyBundleArgs,
    },
    /// Verify one packed proof.
    Single {
        #[command(flatten)]
        args: VerifySingleArgs,
    },
}
