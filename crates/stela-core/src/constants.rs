//! Protocol constants for the Stela network.

/// Maximum permitted reorganization depth, in blocks, behind the current
/// best tip. The floating sync checkpoint sits this far below the tip.
pub const CHECKPOINT_SPAN: u64 = 5000;

/// Mainnet genesis block header hash.
pub const MAINNET_GENESIS_HASH: &str =
    "00000e3a847f0713cf5d425f3188dd2b1e0ea25bd17d485ae0317d0a4dbaa44c";

/// Testnet genesis block header hash.
pub const TESTNET_GENESIS_HASH: &str =
    "0000f7ce2a5bcbf29e76fa0fd07a7c1e5318cc6ef3f5d31a8e2eb3e0ae22017d";

/// Network type: Mainnet or Testnet.
///
/// Selects which compiled-in checkpoint table is active. Threaded as an
/// explicit parameter through every checkpoint entry point rather than
/// consulted as ambient global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NetworkType {
    /// Production network.
    #[default]
    Mainnet,
    /// Public test network. Carries no checkpoints.
    Testnet,
}

impl NetworkType {
    /// Four-byte network identifier prepended to all P2P messages.
    pub fn magic_bytes(&self) -> [u8; 4] {
        match self {
            Self::Mainnet => [0x53, 0x54, 0x4C, 0x41], // "STLA"
            Self::Testnet => [0x53, 0x54, 0x4C, 0x54], // "STLT"
        }
    }

    /// Genesis block header hash for this network, as hex.
    pub const fn genesis_hash_hex(&self) -> &'static str {
        match self {
            Self::Mainnet => MAINNET_GENESIS_HASH,
            Self::Testnet => TESTNET_GENESIS_HASH,
        }
    }
}
