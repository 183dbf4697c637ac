//! Floating sync checkpoint: selection and reorg enforcement.
//!
//! The sync checkpoint is the deepest ancestor of the best tip still within
//! [`CHECKPOINT_SPAN`] blocks of it. It is recomputed on demand from current
//! tip state rather than stored, so there is no transition model to keep
//! consistent; as long as the tip height is non-decreasing, the selected
//! height is too.
//!
//! Callers must hold the block index's read lock (or an equivalent snapshot)
//! across a whole call: walking parent links while a concurrent reorg
//! rewrites them would observe an inconsistent chain.

use tracing::debug;

use stela_core::chain_index::{BlockIndex, NodeId};
use stela_core::constants::CHECKPOINT_SPAN;

/// Select the sync checkpoint for the current best tip.
///
/// Walks the parent chain backward from the best tip, stopping at the first
/// ancestor that is either genesis or already `CHECKPOINT_SPAN` or more
/// blocks below the tip. The returned node's height is always within
/// `[max(0, tip_height - CHECKPOINT_SPAN), tip_height]`.
///
/// Returns `None` only when the index has no best tip.
pub fn auto_select_sync_checkpoint(index: &BlockIndex) -> Option<NodeId> {
    auto_select_sync_checkpoint_with_span(index, CHECKPOINT_SPAN)
}

/// Like [`auto_select_sync_checkpoint`] but with an explicit span.
pub fn auto_select_sync_checkpoint_with_span(index: &BlockIndex, span: u64) -> Option<NodeId> {
    let tip = index.best_tip()?;
    let tip_height = index.get(tip).height;

    let mut cursor = tip;
    loop {
        let entry = index.get(cursor);
        match entry.parent {
            Some(parent) if entry.height + span > tip_height => cursor = parent,
            _ => break,
        }
    }
    Some(cursor)
}

/// Whether a reorganization touching `height` is permitted.
///
/// Returns `false` iff `height` is at or below the sync checkpoint, bounding
/// accepted reorg depth to [`CHECKPOINT_SPAN`] blocks behind the tip. With
/// no best tip there is no chain to protect, so everything is permitted.
pub fn check_sync(index: &BlockIndex, height: u64) -> bool {
    check_sync_with_span(index, height, CHECKPOINT_SPAN)
}

/// Like [`check_sync`] but with an explicit span.
pub fn check_sync_with_span(index: &BlockIndex, height: u64, span: u64) -> bool {
    let Some(sync) = auto_select_sync_checkpoint_with_span(index, span) else {
        return true;
    };
    let sync_height = index.get(sync).height;
    if height <= sync_height {
        debug!(height, sync_height, "reorg at or below sync checkpoint refused");
        return false;
    }
    true
}
