//! Serialized schema/data contracts.

/// Proof bundle schema types.
pub mod bundle;
/// Tree snapshot schema types.
pub mod snapshot;
