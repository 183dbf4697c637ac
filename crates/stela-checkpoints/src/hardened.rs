//! Hardened checkpoint validation and registry queries.
//!
//! A hardened checkpoint is enforced unconditionally: a block at a
//! checkpointed height whose hash disagrees with the table is on a wrong
//! chain, full stop. Heights without a checkpoint are unconstrained.

use tracing::warn;

use stela_core::chain_index::{BlockIndex, NodeId};
use stela_core::constants::NetworkType;
use stela_core::error::CheckpointError;
use stela_core::types::Hash256;

use crate::registry::CheckpointSet;

/// Verify a candidate block hash against the hardened checkpoint at `height`.
///
/// Succeeds unconditionally when `height` carries no checkpoint.
///
/// # Errors
///
/// Returns [`CheckpointError::Mismatch`] when the hash disagrees with the
/// recorded checkpoint. The caller must reject the block as invalid; this is
/// a hard, non-retryable rejection, not a transient failure.
pub fn check_hardened(
    network: NetworkType,
    height: u64,
    hash: &Hash256,
) -> Result<(), CheckpointError> {
    check_hardened_with(CheckpointSet::for_network(network), height, hash)
}

/// Like [`check_hardened`] but takes an explicit checkpoint set.
///
/// This is the testable core: production code passes the compiled-in
/// per-network set, while tests supply their own.
pub fn check_hardened_with(
    checkpoints: &CheckpointSet,
    height: u64,
    hash: &Hash256,
) -> Result<(), CheckpointError> {
    match checkpoints.lookup(height) {
        None => Ok(()),
        Some(expected) if expected == hash => Ok(()),
        Some(expected) => {
            warn!(height, %expected, got = %hash, "block hash disagrees with hardened checkpoint");
            Err(CheckpointError::Mismatch {
                height,
                expected: *expected,
                got: *hash,
            })
        }
    }
}

/// Estimate of total chain length: the greatest checkpointed height, or 0
/// when the active set is empty.
///
/// Purely informational — drives sync-progress display, never validation.
pub fn total_blocks_estimate(network: NetworkType) -> u64 {
    total_blocks_estimate_with(CheckpointSet::for_network(network))
}

/// Like [`total_blocks_estimate`] but with an explicit checkpoint set.
pub fn total_blocks_estimate_with(checkpoints: &CheckpointSet) -> u64 {
    checkpoints.latest_height()
}

/// The highest-height checkpoint whose block the local node has indexed.
///
/// Scans the active set in strictly descending height order and returns the
/// first hit, so a lower, older anchor is never returned when a higher one
/// is locally known. `None` is expected during early sync, before any
/// checkpoint block has been downloaded.
pub fn last_checkpoint(network: NetworkType, index: &BlockIndex) -> Option<NodeId> {
    last_checkpoint_with(CheckpointSet::for_network(network), index)
}

/// Like [`last_checkpoint`] but with an explicit checkpoint set.
pub fn last_checkpoint_with(checkpoints: &CheckpointSet, index: &BlockIndex) -> Option<NodeId> {
    checkpoints
        .iter_descending()
        .find_map(|(_, hash)| index.lookup(hash))
}
