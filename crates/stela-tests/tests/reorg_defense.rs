//! End-to-end scenarios for the checkpoint subsystem.
//!
//! Exercises the hardened table, the progress estimate, the last-checkpoint
//! resolver, and the floating sync checkpoint together, the way the
//! block-acceptance pipeline uses them: hardened check per candidate block,
//! sync check before applying a reorg.

use stela_checkpoints::hardened::{
    check_hardened_with, last_checkpoint_with, total_blocks_estimate_with,
};
use stela_checkpoints::registry::CheckpointSet;
use stela_checkpoints::sync::{auto_select_sync_checkpoint, check_sync};
use stela_checkpoints::{check_hardened, last_checkpoint, total_blocks_estimate};
use stela_core::chain_index::BlockIndex;
use stela_core::constants::NetworkType;
use stela_core::error::CheckpointError;
use stela_core::types::Hash256;
use stela_tests::helpers::{build_chain, build_fork, chain_hash};

/// The worked registry: genesis plus checkpoints at 100 and 500, using the
/// fork-0 chain's own hashes so resolver lookups can hit.
fn scenario_set() -> CheckpointSet {
    CheckpointSet::from_entries([
        (0, chain_hash(0, 0)),
        (100, chain_hash(100, 0)),
        (500, chain_hash(500, 0)),
    ])
}

#[test]
fn hardened_accepts_canonical_block() {
    let set = scenario_set();
    assert!(check_hardened_with(&set, 100, &chain_hash(100, 0)).is_ok());
}

#[test]
fn hardened_rejects_forged_block() {
    let set = scenario_set();
    let forged = Hash256([0xEE; 32]);
    let err = check_hardened_with(&set, 100, &forged).unwrap_err();
    let CheckpointError::Mismatch { height, expected, got } = err;
    assert_eq!(height, 100);
    assert_eq!(expected, chain_hash(100, 0));
    assert_eq!(got, forged);
}

#[test]
fn hardened_ignores_uncheckpointed_height() {
    let set = scenario_set();
    assert!(check_hardened_with(&set, 250, &Hash256([0x77; 32])).is_ok());
}

#[test]
fn estimate_reports_highest_checkpoint() {
    assert_eq!(total_blocks_estimate_with(&scenario_set()), 500);
}

#[test]
fn resolver_tracks_sync_progress() {
    let set = scenario_set();
    let mut index = BlockIndex::new();

    // Synced to height 50: only the genesis checkpoint is known.
    build_chain(&mut index, 50);
    let anchor = last_checkpoint_with(&set, &index).unwrap();
    assert_eq!(index.get(anchor).height, 0);

    // Synced past 100: the height-100 checkpoint becomes the anchor.
    let mut index = BlockIndex::new();
    build_chain(&mut index, 120);
    let anchor = last_checkpoint_with(&set, &index).unwrap();
    assert_eq!(index.get(anchor).height, 100);

    // Synced past 500: the highest checkpoint wins.
    let mut index = BlockIndex::new();
    build_chain(&mut index, 600);
    let anchor = last_checkpoint_with(&set, &index).unwrap();
    assert_eq!(index.get(anchor).height, 500);
}

#[test]
fn resolver_empty_index_has_no_anchor() {
    let index = BlockIndex::new();
    assert_eq!(last_checkpoint_with(&scenario_set(), &index), None);
}

#[test]
fn resolver_no_anchor_before_any_mainnet_block_synced() {
    // A node that has only synced blocks unknown to the mainnet table has no
    // anchor yet; that is an expected early-sync state, not an error.
    let mut index = BlockIndex::new();
    build_chain(&mut index, 50);
    assert_eq!(last_checkpoint(NetworkType::Mainnet, &index), None);
}

#[test]
fn deep_reorg_refused_shallow_reorg_allowed() {
    let mut index = BlockIndex::new();
    build_chain(&mut index, 8000);

    let selected = auto_select_sync_checkpoint(&index).unwrap();
    assert_eq!(index.get(selected).height, 3000);

    // A reorg rewinding to 3000 or deeper is refused; one block above is fine.
    assert!(!check_sync(&index, 3000));
    assert!(check_sync(&index, 3001));
}

#[test]
fn short_chain_sync_checkpoint_is_genesis() {
    let mut index = BlockIndex::new();
    build_chain(&mut index, 3000);

    let selected = auto_select_sync_checkpoint(&index).unwrap();
    assert_eq!(index.get(selected).height, 0);

    assert!(!check_sync(&index, 0));
    assert!(check_sync(&index, 1));
}

#[test]
fn attacker_branch_cannot_cross_either_defense() {
    let mut index = BlockIndex::new();
    build_chain(&mut index, 8000);
    // Attacker mines a long branch forking at height 2999, below the sync
    // checkpoint, and presents a competing block at checkpointed height 500
    // on yet another branch.
    let branch_tip = build_fork(&mut index, 2999, 100, 1);

    // The forged block at a hardened height fails the table check.
    let set = scenario_set();
    assert!(check_hardened_with(&set, 500, &chain_hash(500, 1)).is_err());

    // The deep reorg fails the sync check regardless of branch length.
    let fork_base_height = 2999;
    assert!(!check_sync(&index, fork_base_height));

    // The branch exists in the index (headers are stored), but acceptance
    // policy refuses to reorganize onto it.
    assert_eq!(index.get(branch_tip).height, 2999 + 100);
}

#[test]
fn sync_checkpoint_advances_with_tip() {
    let mut index = BlockIndex::new();
    let tip = build_chain(&mut index, 6000);
    let first = auto_select_sync_checkpoint(&index).unwrap();
    assert_eq!(index.get(first).height, 1000);

    // Extend the best chain by 500 blocks; the floating checkpoint follows.
    let mut parent = index.get(tip).hash;
    let mut new_tip = tip;
    for height in 6001..=6500 {
        let hash = chain_hash(height, 0);
        new_tip = index.insert(hash, &parent).unwrap();
        parent = hash;
    }
    index.set_best_tip(new_tip).unwrap();

    let second = auto_select_sync_checkpoint(&index).unwrap();
    assert_eq!(index.get(second).height, 1500);
}

#[test]
fn compiled_in_tables_wired_through_network_mode() {
    // Mainnet: populated table, estimate matches the highest entry, genesis
    // hash is enforced at height 0.
    assert_eq!(total_blocks_estimate(NetworkType::Mainnet), 175000);
    let genesis: Hash256 = NetworkType::Mainnet.genesis_hash_hex().parse().unwrap();
    assert!(check_hardened(NetworkType::Mainnet, 0, &genesis).is_ok());
    assert!(check_hardened(NetworkType::Mainnet, 0, &Hash256([0x01; 32])).is_err());

    // Testnet: empty table, nothing constrained.
    assert_eq!(total_blocks_estimate(NetworkType::Testnet), 0);
    assert!(check_hardened(NetworkType::Testnet, 0, &Hash256([0x01; 32])).is_ok());
    assert!(CheckpointSet::for_network(NetworkType::Testnet).is_empty());
}
