//! # stela-checkpoints — checkpoint-based reorganization defense.
//!
//! Two independent mechanisms bound how far a competing chain can rewrite
//! accepted history:
//!
//! - **Hardened checkpoints** ([`registry`], [`hardened`]): compiled-in
//!   `(height, hash)` pairs. A candidate block whose hash disagrees with the
//!   recorded hash at a recorded height is provably on a wrong chain and is
//!   rejected outright.
//!
//! - **Floating sync checkpoint** ([`sync`]): a height a fixed span behind
//!   the current best tip, recomputed on demand from the block index. Reorgs
//!   reaching at or below it are refused, independent of the hardened table.
//!
//! # Attack vectors
//!
//! - **Long-range rewrite:** an attacker with sufficient hash power could
//!   otherwise rewrite arbitrarily deep history. Hardened checkpoints pin
//!   known-good blocks; the sync checkpoint bounds reorg depth near the tip
//!   even between hardened entries.
//!
//! - **Checkpoint spoofing:** the tables are compiled into the binary. An
//!   attacker would need to distribute a modified binary to exploit this,
//!   which is outside our threat model.
//!
//! # Usage
//!
//! The block-acceptance pipeline calls [`check_hardened`] for every candidate
//! block whose height is known, and [`check_sync`] before applying a
//! reorganization. Progress reporting uses [`total_blocks_estimate`]; header
//! sync uses [`last_checkpoint`] to find the highest locally-known anchor.
//!
//! All reads of the block index assume the caller holds whatever lock or
//! snapshot the index's owner requires for the duration of the call; the
//! functions here never mutate chain state.

pub mod hardened;
pub mod registry;
pub mod sync;

pub use hardened::{check_hardened, last_checkpoint, total_blocks_estimate};
pub use registry::CheckpointSet;
pub use sync::{auto_select_sync_checkpoint, check_sync};
