//! Shared constants for CLI.

// -------------------------
// Environment variables
// -------------------------

// Tree input
pub const CANOPY_ELEMENTS_FILE: &str = "CANOPY_ELEMENTS_FILE";
pub const CANOPY_HASH: &str = "CANOPY_HASH";

// Outputs
pub const CANOPY_SNAPSHOT_OUT: &str = "CANOPY_SNAPSHOT_OUT";
pub const CANOPY_PROOFS_OUT: &str = "CANOPY_PROOFS_OUT";

// Verify
pub const CANOPY_PROOFS_IN: &str = "CANOPY_PROOFS_IN";
pub const CANOPY_EXPECTED_ROOT: &str = "CANOPY_EXPECTED_ROOT";

// -------------------------
// Default values
// -------------------------

// File paths
pub const DEFAULT_ELEMENTS_FILE: &str = "elements.txt";
pub const DEFAULT_SNAPSHOT_FILE: &str = "tree-snapshot.json";
pub const DEFAULT_PROOFS_FILE: &str = "proofs.json";

// Parsed values
pub const DEFAULT_HASH: &str = "keccak256";
