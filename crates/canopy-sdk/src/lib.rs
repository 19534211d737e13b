//! Canopy SDK: file-based workflows around the Merkle tree library.

/// Application command implementations.
pub mod commands;
/// CLI-independent configuration types.
pub mod common;
/// Adapter for on-chain proof verification calls.
pub mod contract;
