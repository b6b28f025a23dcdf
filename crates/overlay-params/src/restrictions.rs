//! Transaction type identifiers and the restriction table
//!
//! The restriction table is the compiled-in mapping of (transaction type,
//! version) pairs to the block heights at which they become valid. Rows are
//! rebuilt from the live [`ConsensusParams`] fields on every call, so a
//! feature activation is visible to the very next query.

use crate::consensus::ConsensusParams;
use serde::{Deserialize, Serialize};

/// Simple send
pub const TX_SIMPLE_SEND: u16 = 0;
/// Send to owners
pub const TX_SEND_TO_OWNERS: u16 = 3;
/// Send all tokens
pub const TX_SEND_ALL: u16 = 4;
/// Send a non-fungible token
pub const TX_SEND_NONFUNGIBLE: u16 = 5;
/// Offer tokens for sale on the distributed exchange
pub const TX_TRADE_OFFER: u16 = 20;
/// Accept an open distributed exchange offer
pub const TX_ACCEPT_OFFER: u16 = 22;
/// Create a fixed-supply property
pub const TX_CREATE_PROPERTY_FIXED: u16 = 50;
/// Create a crowdsale property
pub const TX_CREATE_PROPERTY_VARIABLE: u16 = 51;
/// Close a crowdsale early
pub const TX_CLOSE_CROWDSALE: u16 = 53;
/// Create a managed property
pub const TX_CREATE_PROPERTY_MANAGED: u16 = 54;
/// Grant tokens of a managed property
pub const TX_GRANT_TOKENS: u16 = 55;
/// Revoke tokens of a managed property
pub const TX_REVOKE_TOKENS: u16 = 56;
/// Change the issuer of a property
pub const TX_CHANGE_ISSUER: u16 = 70;
/// Enable address freezing for a managed property
pub const TX_ENABLE_FREEZING: u16 = 71;
/// Disable address freezing for a managed property
pub const TX_DISABLE_FREEZING: u16 = 72;
/// Freeze tokens of a managed property
pub const TX_FREEZE_TOKENS: u16 = 185;
/// Unfreeze tokens of a managed property
pub const TX_UNFREEZE_TOKENS: u16 = 186;
/// Embed an arbitrary data payload
pub const TX_ANY_DATA: u16 = 200;
/// Set non-fungible token data
pub const TX_NONFUNGIBLE_DATA: u16 = 201;
/// Feature deactivation system message
pub const TX_DEACTIVATION: u16 = 0xFFFD;
/// Feature activation system message
pub const TX_ACTIVATION: u16 = 0xFFFE;
/// Alert system message
pub const TX_ALERT: u16 = 0xFFFF;

/// First packet version
pub const TX_VERSION_0: u16 = 0;
/// Second packet version
pub const TX_VERSION_1: u16 = 1;
/// Version wildcard used by system messages
pub const TX_VERSION_ANY: u16 = 0xFFFF;

/// A single row of the transaction restriction table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRestriction {
    /// Transaction type
    pub tx_type: u16,
    /// Transaction version
    pub version: u16,
    /// Whether the property identifier may be the native-coin wildcard
    pub allow_wildcard: bool,
    /// Block at which the transaction type becomes valid
    pub activation_block: u32,
}

impl ConsensusParams {
    /// Returns the restriction table for these parameters
    ///
    /// Order is insertion order; lookups scan the whole table and match on
    /// exact type and version, so ordering does not affect correctness.
    pub fn restrictions(&self) -> Vec<TransactionRestriction> {
        let r = |tx_type, version, allow_wildcard, activation_block| TransactionRestriction {
            tx_type,
            version,
            allow_wildcard,
            activation_block,
        };

        vec![
            r(TX_ALERT, TX_VERSION_ANY, true, self.alert_block),
            r(TX_ACTIVATION, TX_VERSION_ANY, true, self.alert_block),
            r(TX_DEACTIVATION, TX_VERSION_ANY, true, self.alert_block),
            //
            r(TX_SIMPLE_SEND, TX_VERSION_0, false, self.send_block),
            //
            r(TX_TRADE_OFFER, TX_VERSION_0, false, self.dex_block),
            r(TX_TRADE_OFFER, TX_VERSION_1, false, self.dex_block),
            r(TX_ACCEPT_OFFER, TX_VERSION_0, false, self.dex_block),
            //
            r(TX_CREATE_PROPERTY_FIXED, TX_VERSION_0, false, self.property_block),
            r(TX_CREATE_PROPERTY_VARIABLE, TX_VERSION_0, false, self.property_block),
            r(TX_CREATE_PROPERTY_VARIABLE, TX_VERSION_1, false, self.property_block),
            r(TX_CLOSE_CROWDSALE, TX_VERSION_0, false, self.property_block),
            //
            r(TX_CREATE_PROPERTY_MANAGED, TX_VERSION_0, false, self.managed_property_block),
            r(TX_GRANT_TOKENS, TX_VERSION_0, false, self.managed_property_block),
            r(TX_REVOKE_TOKENS, TX_VERSION_0, false, self.managed_property_block),
            r(TX_CHANGE_ISSUER, TX_VERSION_0, false, self.managed_property_block),
            r(TX_ENABLE_FREEZING, TX_VERSION_0, false, self.managed_property_block),
            r(TX_DISABLE_FREEZING, TX_VERSION_0, false, self.managed_property_block),
            r(TX_FREEZE_TOKENS, TX_VERSION_0, false, self.managed_property_block),
            r(TX_UNFREEZE_TOKENS, TX_VERSION_0, false, self.managed_property_block),
            //
            r(TX_SEND_TO_OWNERS, TX_VERSION_0, false, self.sto_block),
            r(TX_SEND_TO_OWNERS, TX_VERSION_1, false, self.cross_property_sto_block),
            //
            r(TX_SEND_ALL, TX_VERSION_0, false, self.send_all_block),
            //
            r(TX_ANY_DATA, TX_VERSION_0, true, self.any_data_block),
            //
            r(TX_SEND_NONFUNGIBLE, TX_VERSION_0, false, self.nonfungible_block),
            r(TX_NONFUNGIBLE_DATA, TX_VERSION_0, false, self.nonfungible_block),
        ]
    }
}
