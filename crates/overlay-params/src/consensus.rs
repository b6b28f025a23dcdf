//! Consensus parameters for the overlay protocol
//!
//! One [`ConsensusParams`] instance exists per network. All rule thresholds
//! are block heights; a feature that is not scheduled uses the
//! [`ConsensusParams::NEVER`] sentinel so height comparisons stay total.

use crate::network::Network;

/// Consensus parameters
///
/// Every field is a block height threshold. Fields are plain `pub` because
/// the feature activation registry mutates them in place; everything else
/// treats the struct as read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsensusParams {
    /// First block the overlay protocol is live
    pub genesis_block: u32,

    /// Minimum number of blocks of notice before a feature activation
    pub min_activation_blocks: u32,
    /// Maximum number of blocks of notice before a feature activation
    pub max_activation_blocks: u32,

    /// Waiting period after enabling freezing before tokens may be frozen
    pub freeze_wait_period: u32,

    /// Block to enable pay-to-pubkey-hash support
    pub pubkeyhash_block: u32,
    /// Block to enable pay-to-script-hash support
    pub scripthash_block: u32,
    /// Block to enable bare-multisig based encoding
    pub multisig_block: u32,
    /// Block to enable null-data (OP_RETURN) based encoding
    pub nulldata_block: u32,

    /// Block to enable alert and activation system messages
    pub alert_block: u32,
    /// Block to enable simple send transactions
    pub send_block: u32,
    /// Block to enable distributed exchange transactions
    pub dex_block: u32,
    /// Block to enable property issuance transactions
    pub property_block: u32,
    /// Block to enable managed property transactions
    pub managed_property_block: u32,
    /// Block to enable send-to-owners transactions
    pub sto_block: u32,
    /// Block to enable send-all transactions
    pub send_all_block: u32,
    /// Block to enable cross-property send-to-owners (v1)
    pub cross_property_sto_block: u32,
    /// Block to enable any-data payloads
    pub any_data_block: u32,
    /// Block to enable non-fungible tokens
    pub nonfungible_block: u32,

    /// Block to activate the waiting period for enabling freezing
    pub freeze_notice_block: u32,
    /// Block to activate trading of any token on the distributed exchange
    pub free_dex_block: u32,
    /// Block to restrict NFT issuer data updates to the issuer
    pub nonfungible_issuer_block: u32,
}

impl ConsensusParams {
    /// Sentinel height for "not scheduled"
    ///
    /// Far beyond any height a real chain will reach, so `height >= field`
    /// remains a total comparison with no special casing.
    pub const NEVER: u32 = u32::MAX;

    /// Consensus parameters for mainnet
    pub const fn mainnet() -> Self {
        let genesis = 3_454_000;
        Self {
            genesis_block: genesis,
            // Notice range for feature activations, ~2 to ~12 weeks
            min_activation_blocks: 20_160,
            max_activation_blocks: 120_960,
            freeze_wait_period: 4_096,
            pubkeyhash_block: 0,
            scripthash_block: genesis,
            multisig_block: 0,
            nulldata_block: genesis,
            alert_block: 0,
            send_block: genesis,
            dex_block: genesis,
            property_block: genesis,
            managed_property_block: genesis,
            sto_block: genesis,
            send_all_block: genesis,
            cross_property_sto_block: Self::NEVER,
            any_data_block: 0,
            nonfungible_block: 3_624_000,
            freeze_notice_block: Self::NEVER,
            free_dex_block: genesis,
            nonfungible_issuer_block: Self::NEVER,
        }
    }

    /// Consensus parameters for testnet
    ///
    /// Testnet has no notice window, so activations take effect at any
    /// future height.
    pub const fn testnet() -> Self {
        Self {
            genesis_block: 101,
            min_activation_blocks: 0,
            max_activation_blocks: 9_999_999,
            freeze_wait_period: 0,
            pubkeyhash_block: 0,
            scripthash_block: 0,
            multisig_block: 0,
            nulldata_block: 0,
            alert_block: 0,
            send_block: 0,
            dex_block: 0,
            property_block: 0,
            managed_property_block: 0,
            sto_block: 0,
            send_all_block: 0,
            cross_property_sto_block: 0,
            any_data_block: 0,
            nonfungible_block: 0,
            freeze_notice_block: 0,
            free_dex_block: 0,
            nonfungible_issuer_block: 0,
        }
    }

    /// Consensus parameters for regtest
    ///
    /// A short notice window (5..=10 blocks) keeps the activation machinery
    /// exercisable in functional tests.
    pub const fn regtest() -> Self {
        Self {
            genesis_block: 101,
            min_activation_blocks: 5,
            max_activation_blocks: 10,
            freeze_wait_period: 10,
            pubkeyhash_block: 0,
            scripthash_block: 0,
            multisig_block: 0,
            nulldata_block: 0,
            alert_block: 0,
            send_block: 0,
            dex_block: 0,
            property_block: 0,
            managed_property_block: 0,
            sto_block: 0,
            send_all_block: 0,
            cross_property_sto_block: Self::NEVER,
            any_data_block: 0,
            nonfungible_block: 0,
            freeze_notice_block: Self::NEVER,
            free_dex_block: Self::NEVER,
            nonfungible_issuer_block: Self::NEVER,
        }
    }

    /// Get consensus params by network
    pub const fn from_network(network: Network) -> Self {
        match network {
            Network::Mainnet => Self::mainnet(),
            Network::Testnet => Self::testnet(),
            Network::Regtest => Self::regtest(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_params() {
        let params = ConsensusParams::mainnet();
        assert_eq!(params.genesis_block, 3_454_000);
        assert_eq!(params.min_activation_blocks, 20_160);
        assert_eq!(params.send_block, params.genesis_block);
        assert_eq!(params.cross_property_sto_block, ConsensusParams::NEVER);
    }

    #[test]
    fn test_notice_window_ordering() {
        for network in Network::ALL {
            let params = ConsensusParams::from_network(network);
            assert!(
                params.min_activation_blocks <= params.max_activation_blocks,
                "notice window inverted on {network}"
            );
        }
    }

    #[test]
    fn test_testnet_unrestricted() {
        let params = ConsensusParams::testnet();
        assert_eq!(params.min_activation_blocks, 0);
        assert_eq!(params.send_block, 0);
        assert_eq!(params.free_dex_block, 0);
    }

    #[test]
    fn test_from_network() {
        assert_eq!(
            ConsensusParams::from_network(Network::Regtest),
            ConsensusParams::regtest()
        );
        assert_eq!(ConsensusParams::regtest().min_activation_blocks, 5);
    }
}
