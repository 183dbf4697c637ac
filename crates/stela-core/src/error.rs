//! Error types for the Stela protocol.
use thiserror::Error;

use crate::types::Hash256;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    #[error("expected 64 hex characters, got {0}")] InvalidLength(usize),
    #[error("invalid hex digit")] InvalidHex,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainIndexError {
    #[error("duplicate block: {0}")] DuplicateBlock(String),
    #[error("unknown parent: {0}")] UnknownParent(String),
    #[error("unknown node id: {0}")] UnknownNode(usize),
    #[error("index already has a genesis entry")] GenesisExists,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckpointError {
    #[error("checkpoint mismatch at height {height}: expected {expected}, got {got}")]
    Mismatch { height: u64, expected: Hash256, got: Hash256 },
}

#[derive(Error, Debug)]
pub enum StelaError {
    #[error(transparent)] Hash(#[from] HashError),
    #[error(transparent)] ChainIndex(#[from] ChainIndexError),
    #[error(transparent)] Checkpoint(#[from] CheckpointError),
}
