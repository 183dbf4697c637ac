//! Shared test helpers for building deterministic block indexes.

use stela_core::chain_index::{BlockIndex, NodeId};
use stela_core::types::Hash256;

/// Deterministic block hash for `height` on branch `fork`.
///
/// Distinct `(height, fork)` pairs always produce distinct hashes, so forked
/// chains never collide with the main branch.
pub fn chain_hash(height: u64, fork: u8) -> Hash256 {
    let mut data = [0u8; 9];
    data[..8].copy_from_slice(&height.to_le_bytes());
    data[8] = fork;
    Hash256(blake3::hash(&data).into())
}

/// Build a linear chain from genesis up to `tip_height` on fork 0 and set
/// the best tip. Returns the tip's id.
pub fn build_chain(index: &mut BlockIndex, tip_height: u64) -> NodeId {
    let mut id = index
        .insert_genesis(chain_hash(0, 0))
        .expect("index starts empty");
    for height in 1..=tip_height {
        id = index
            .insert(chain_hash(height, 0), &chain_hash(height - 1, 0))
            .expect("parent inserted in previous iteration");
    }
    index.set_best_tip(id).expect("tip id just minted");
    id
}

/// Extend the index with a side branch of `len` blocks forking off the fork-0
/// block at `fork_height`. Returns the branch tip's id; the best tip is left
/// untouched.
pub fn build_fork(index: &mut BlockIndex, fork_height: u64, len: u64, fork: u8) -> NodeId {
    assert_ne!(fork, 0, "fork 0 is the main branch");
    let mut parent = chain_hash(fork_height, 0);
    let mut id = None;
    for offset in 1..=len {
        let hash = chain_hash(fork_height + offset, fork);
        id = Some(index.insert(hash, &parent).expect("fork parent exists"));
        parent = hash;
    }
    id.expect("fork length is at least 1")
}
