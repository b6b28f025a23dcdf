//! Consensus and transaction checkpoints
//!
//! Checkpoints pin the locally derived overlay state to externally published
//! values at fixed heights, to detect silent divergence between
//! implementations. Lists are compiled in and empty by default; a network
//! only carries entries once its maintainers publish them.

use crate::network::Network;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Checkpoints are only defined at heights that are a multiple of this
pub const CHECKPOINT_INTERVAL: u32 = 10_000;

/// A consensus verification checkpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusCheckpoint {
    /// Block height
    pub height: u32,
    /// Expected block hash (hex)
    pub block_hash: String,
    /// Expected rolling consensus digest over overlay state (hex)
    pub consensus_hash: String,
}

/// A historical transaction expected to exist locally
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionCheckpoint {
    /// Block height the transaction was confirmed in
    pub height: u32,
    /// Transaction identifier (hex)
    pub txid: String,
}

/// Consensus checkpoints for a network
pub fn consensus_checkpoints(network: Network) -> Vec<ConsensusCheckpoint> {
    match network {
        Network::Mainnet => Vec::new(),
        Network::Testnet => Vec::new(),
        Network::Regtest => Vec::new(),
    }
}

/// Transaction checkpoints for a network
pub fn transaction_checkpoints(network: Network) -> Vec<TransactionCheckpoint> {
    match network {
        Network::Mainnet => Vec::new(),
        Network::Testnet => Vec::new(),
        Network::Regtest => Vec::new(),
    }
}

/// Find the checkpoint defined at exactly the given height
///
/// Lists contain at most one entry per height; the first match wins.
pub fn checkpoint_at_height(
    checkpoints: &[ConsensusCheckpoint],
    height: u32,
) -> Result<&ConsensusCheckpoint> {
    checkpoints
        .iter()
        .find(|cp| cp.height == height)
        .ok_or(Error::CheckpointNotFound(height))
}
