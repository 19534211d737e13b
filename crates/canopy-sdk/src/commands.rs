//! Application command implementations.
//!
//! This module contains the core logic for each CLI subcommand.

mod elements;
mod proofs;
mod tree_snapshot;
mod verify;

pub use elements::{build_tree, read_elements};
pub use proofs::generate_proofs;
pub use tree_snapshot::build_tree_snapshot;
pub use verify::{VerificationReport, verify_proofs, verify_single};

/// Generates and prints the JSON schemas of the output documents.
///
/// # Errors
/// Returns an error if serialization to JSON fails.
#[allow(clippy::print_stdout, reason = "Prints schema to stdout")]
pub fn output_schemas() -> eyre::Result<()> {
    let snapshot = schemars::schema_for!(canopy_core::schema::snapshot::TreeSnapshot);
    let bundle = schemars::schema_for!(canopy_core::schema::bundle::ProofBundle);
    println!(
        "Tree Snapshot JSON Schema:\n{}",
        serde_json::to_string_pretty(&snapshot)?
    );
    println!(
        "Proof Bundle JSON Schema:\n{}",
        serde_json::to_string_pretty(&bundle)?
    );
    Ok(())
}
