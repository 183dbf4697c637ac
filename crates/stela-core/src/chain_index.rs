//! Append-only block-index arena.
//!
//! The block index is the set of all known block headers, keyed by hash and
//! forming a parent-linked tree. Entries live in a dense arena and are
//! addressed by stable [`NodeId`]s; each entry records its parent's id, so a
//! backward chain walk is plain index-following. Entries are appended and
//! never removed or mutated, which keeps every minted `NodeId` valid for the
//! life of the index.
//!
//! Not thread-safe — callers sharing an index across validation threads
//! should wrap it in a `RwLock` and hold the read guard for the full
//! duration of any backward walk.

use std::collections::HashMap;

use crate::error::ChainIndexError;
use crate::types::Hash256;

/// Stable handle to an entry in a [`BlockIndex`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One known block header: its height, hash, and parent link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexEntry {
    /// Distance from genesis.
    pub height: u64,
    /// Block header hash.
    pub hash: Hash256,
    /// Arena id of the parent entry. `None` only for genesis.
    pub parent: Option<NodeId>,
}

/// Arena of known block headers with hash lookup and a best-tip cursor.
#[derive(Debug, Default)]
pub struct BlockIndex {
    entries: Vec<IndexEntry>,
    by_hash: HashMap<Hash256, NodeId>,
    best_tip: Option<NodeId>,
}

impl BlockIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the genesis entry at height 0.
    ///
    /// # Errors
    ///
    /// Returns [`ChainIndexError::GenesisExists`] if the index already has
    /// entries.
    pub fn insert_genesis(&mut self, hash: Hash256) -> Result<NodeId, ChainIndexError> {
        if !self.entries.is_empty() {
            return Err(ChainIndexError::GenesisExists);
        }
        let id = NodeId(0);
        self.entries.push(IndexEntry {
            height: 0,
            hash,
            parent: None,
        });
        self.by_hash.insert(hash, id);
        self.best_tip = Some(id);
        Ok(id)
    }

    /// Insert a block whose parent is already indexed.
    ///
    /// The new entry's height is the parent's height plus one. The best-tip
    /// cursor is not moved; callers decide which branch is preferred via
    /// [`set_best_tip`](Self::set_best_tip).
    ///
    /// # Errors
    ///
    /// - [`ChainIndexError::DuplicateBlock`] if `hash` is already indexed
    /// - [`ChainIndexError::UnknownParent`] if `parent` is not indexed
    pub fn insert(&mut self, hash: Hash256, parent: &Hash256) -> Result<NodeId, ChainIndexError> {
        if self.by_hash.contains_key(&hash) {
            return Err(ChainIndexError::DuplicateBlock(hash.to_string()));
        }
        let parent_id = self
            .lookup(parent)
            .ok_or_else(|| ChainIndexError::UnknownParent(parent.to_string()))?;
        let height = self.entries[parent_id.0].height + 1;
        let id = NodeId(self.entries.len());
        self.entries.push(IndexEntry {
            height,
            hash,
            parent: Some(parent_id),
        });
        self.by_hash.insert(hash, id);
        Ok(id)
    }

    /// Read an entry by id.
    ///
    /// Ids are only minted by this index and entries are never removed, so
    /// any id obtained from it stays valid. Panics on an id from a different
    /// index, like any out-of-bounds slice access.
    pub fn get(&self, id: NodeId) -> &IndexEntry {
        &self.entries[id.0]
    }

    /// Find an entry's id by block hash.
    pub fn lookup(&self, hash: &Hash256) -> Option<NodeId> {
        self.by_hash.get(hash).copied()
    }

    /// Whether a block hash is indexed.
    pub fn contains(&self, hash: &Hash256) -> bool {
        self.by_hash.contains_key(hash)
    }

    /// The parent id of an entry, `None` for genesis.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).parent
    }

    /// Mark an entry as the current best chain head.
    ///
    /// # Errors
    ///
    /// Returns [`ChainIndexError::UnknownNode`] if `id` is out of range.
    pub fn set_best_tip(&mut self, id: NodeId) -> Result<(), ChainIndexError> {
        if id.0 >= self.entries.len() {
            return Err(ChainIndexError::UnknownNode(id.0));
        }
        self.best_tip = Some(id);
        Ok(())
    }

    /// The current best chain head, if any entry has been inserted.
    pub fn best_tip(&self) -> Option<NodeId> {
        self.best_tip
    }

    /// Number of indexed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
