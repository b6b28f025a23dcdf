//! Owned per-network parameter store
//!
//! Replaces the ambient global parameter singletons of older clients with a
//! single value owning exactly one [`ConsensusParams`] per network. The
//! block-processing path owns the store; mutation goes through `&mut`, so
//! the single-writer discipline is enforced by the borrow checker rather
//! than a lock.

use overlay_params::{ConsensusParams, Network};

/// The live consensus parameters for all three networks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamsStore {
    mainnet: ConsensusParams,
    testnet: ConsensusParams,
    regtest: ConsensusParams,
}

impl ParamsStore {
    /// Create a store with the compiled-in defaults for every network
    pub const fn new() -> Self {
        Self {
            mainnet: ConsensusParams::mainnet(),
            testnet: ConsensusParams::testnet(),
            regtest: ConsensusParams::regtest(),
        }
    }

    /// Parameters for a network
    pub const fn params(&self, network: Network) -> &ConsensusParams {
        match network {
            Network::Mainnet => &self.mainnet,
            Network::Testnet => &self.testnet,
            Network::Regtest => &self.regtest,
        }
    }

    /// Mutable parameters for a network
    ///
    /// Only the feature activation registry should take this path.
    pub fn params_mut(&mut self, network: Network) -> &mut ConsensusParams {
        match network {
            Network::Mainnet => &mut self.mainnet,
            Network::Testnet => &mut self.testnet,
            Network::Regtest => &mut self.regtest,
        }
    }

    /// Parameters for a network selected by name
    ///
    /// Unknown names fall back to mainnet. Callers are internal and a safe
    /// default beats a crash in the middle of block processing.
    pub fn params_by_name(&self, name: &str) -> &ConsensusParams {
        match Network::from_name(name) {
            Ok(network) => self.params(network),
            Err(_) => {
                tracing::debug!(network = name, "unknown network, using mainnet parameters");
                &self.mainnet
            }
        }
    }

    /// Discard all activation mutations and return to compiled-in defaults
    ///
    /// Used between test scenarios and when a reorganization drops below an
    /// activation point, before history is replayed.
    pub fn reset(&mut self) {
        *self = Self::new();
        tracing::info!("consensus parameters reset to defaults");
    }
}

impl Default for ParamsStore {
    fn default() -> Self {
        Self::new()
    }
}
