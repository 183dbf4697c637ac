//! Compiled-in checkpoint tables.
//!
//! Each network carries an immutable table of `(height, hash)` pairs built
//! once at first access and read concurrently ever after. Adding an entry is
//! a one-line change to the literal table below.
//!
//! Entries are chosen conservatively: blocks deep enough that every honest
//! node has them, with hashes verified against multiple independent sources
//! before embedding.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use stela_core::constants::{MAINNET_GENESIS_HASH, NetworkType};
use stela_core::types::Hash256;

/// Mainnet checkpoints as `(height, header hash)` hex pairs.
///
/// Heights are strictly increasing; each hash is the canonical mainnet block
/// hash at that height at the time of embedding.
const MAINNET_TABLE: &[(u64, &str)] = &[
    (0, MAINNET_GENESIS_HASH),
    (100, "67fcc63c864e6afec93a9d236111995eec43b6e680146b7d06ee316019435039"),
    (500, "8a4ec57370422defcbe7ac25f995582c0b6d1f85617aedbb4917354e2aec28b8"),
    (1000, "ad9681dcf9ddc74cf6b7c29bff0d01a3e58b7fe9388f6baa66852c4bd35e7410"),
    (2500, "c6e65f65f0446a276e92600fc963abea63327490e6d1822dba473a2fc7dd1155"),
    (5000, "d51100c5e497531fdcfb20c18405d73a15170b0fdba8643d31c71dde060c32ed"),
    (10000, "177b5394559971b8d5998618fa776579661da75f983cb914e169aae2a6ca85ac"),
    (15000, "806cef87ba34a3ccffb6fa763b604d8042150a6515f6e85fb9018210543f4c0b"),
    (50000, "95046a8e94aeab9d52e808f70c6a5a1d204c9c3c0d633538f3489d1fd27c2f99"),
    (100000, "28b899161dd751e7078571a9856323a45833dfc4f74d0738e7ad9b294b23fab3"),
    (150000, "13a00139a3d936ba644fb40815f5e912ec85a9663464f39b8e0eece9ffda7a4c"),
    (175000, "c8f7b036ca014bac34806a2faa5ef761d82f57869ecdaef2b9bc3adc7d942754"),
];

static MAINNET: LazyLock<CheckpointSet> =
    LazyLock::new(|| CheckpointSet::from_table(MAINNET_TABLE));

/// Testnet has no checkpoints.
static TESTNET: LazyLock<CheckpointSet> = LazyLock::new(|| CheckpointSet::from_table(&[]));

/// Immutable table of checkpoint heights to block hashes.
///
/// Ordered ascending by height; heights are unique. Constructed once per
/// network before validation begins and never mutated, so concurrent reads
/// need no synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckpointSet {
    entries: BTreeMap<u64, Hash256>,
}

impl CheckpointSet {
    /// Build a set from a literal `(height, hex hash)` table.
    ///
    /// Panics on malformed hex or duplicate heights; the tables are
    /// hard-coded constants, so either is a build defect.
    fn from_table(table: &[(u64, &str)]) -> Self {
        let mut entries = BTreeMap::new();
        for &(height, hex_hash) in table {
            let hash: Hash256 = hex_hash
                .parse()
                .expect("hard-coded checkpoint hash is valid hex");
            let previous = entries.insert(height, hash);
            assert!(previous.is_none(), "duplicate checkpoint height {height}");
        }
        Self { entries }
    }

    /// Build a set from already-parsed entries.
    ///
    /// This is the testable constructor: production code reads the static
    /// per-network tables via [`for_network`](Self::for_network), while
    /// tests supply their own entries.
    pub fn from_entries(entries: impl IntoIterator<Item = (u64, Hash256)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// The active checkpoint set for a network.
    pub fn for_network(network: NetworkType) -> &'static CheckpointSet {
        match network {
            NetworkType::Mainnet => &MAINNET,
            NetworkType::Testnet => &TESTNET,
        }
    }

    /// The checkpoint hash at `height`, if that height is checkpointed.
    ///
    /// Absence is an expected outcome, not a failure: most heights carry no
    /// checkpoint.
    pub fn lookup(&self, height: u64) -> Option<&Hash256> {
        self.entries.get(&height)
    }

    /// The greatest checkpointed height, or 0 if the set is empty.
    pub fn latest_height(&self) -> u64 {
        self.entries.keys().next_back().copied().unwrap_or(0)
    }

    /// Iterate entries in strictly descending height order.
    pub fn iter_descending(&self) -> impl Iterator<Item = (u64, &Hash256)> {
        self.entries.iter().rev().map(|(height, hash)| (*height, hash))
    }

    /// Number of checkpoints in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set holds no checkpoints.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
