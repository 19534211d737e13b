//! Command-line interface for the `canopy` CLI application.

pub mod constants;
mod tree;
mod verify;

use std::path::PathBuf;

use canopy_core::base::{Bytes32, decode_prefixed_hex};
use canopy_core::schema::snapshot::HashFunction;
use canopy_sdk::common::TreeConfig;
use clap::Parser;
use eyre::{Result, eyre};

use self::constants::{CANOPY_ELEMENTS_FILE, CANOPY_HASH, DEFAULT_ELEMENTS_FILE, DEFAULT_HASH};
pub use self::tree::{ProveArgs, RootArgs};
pub use self::verify::VerifyCommands;

/// Command-line interface definition.
#[derive(Debug, Parser)]
#[command(name = "canopy")]
#[command(about = "Sorted-pair Merkle tree tools")]
pub struct Cli {
    /// CLI top-level command group.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Build the tree over an element file and export its root.
    Root {
        #[command(flatten)]
        args: RootArgs,
    },
    /// Generate inclusion proofs for elements of the tree.
    Prove {
        #[command(flatten)]
        args: ProveArgs,
    },
    /// Proof verification commands.
    Verify {
        /// Verify subcommands.
        #[command(subcommand)]
        command: VerifyCommands,
    },
    /// Print the JSON schemas of the exported files.
    Schema,
}

/// Common arguments for commands that build a tree.
#[derive(Debug, clap::Args)]
pub struct TreeArgs {
    /// Text file with one hex element per line.
    #[arg(long, env = CANOPY_ELEMENTS_FILE, default_value = DEFAULT_ELEMENTS_FILE)]
    pub elements: PathBuf,
    /// Hash function for internal nodes (keccak256 or sha256).
    #[arg(
        long,
        env = CANOPY_HASH,
        default_value = DEFAULT_HASH,
        value_parser = parse_hash_function
    )]
    pub hash: HashFunction,
}

impl From<TreeArgs> for TreeConfig {
    fn from(args: TreeArgs) -> Self {
        Self {
            elements_file: args.elements,
            hash_function: args.hash,
        }
    }
}

/// Raw bytes given as hex on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexBytes(pub Vec<u8>);

pub fn parse_hash_function(s: &str) -> Result<HashFunction> {
    HashFunction::from_str_name(s).ok_or_else(|| {
        eyre!("Invalid hash function: {s}. Expected 'keccak256' or 'sha256'.")
    })
}

pub fn parse_bytes32(s: &str) -> Result<Bytes32> {
    Ok(Bytes32::from_hex(s)?)
}

pub fn parse_hex_bytes(s: &str) -> Result<HexBytes> {
    Ok(HexBytes(decode_prefixed_hex(s)?))
}
