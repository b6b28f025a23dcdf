//! Permission resolution for transactions and scripts
//!
//! Pure, height-parameterized decision functions over the restriction
//! table and script enablement heights. Absence of a matching rule is a
//! deny, never an allow.

use overlay_params::property::{is_test_ecosystem, PROPERTY_NATIVE};
use overlay_params::ConsensusParams;
use serde::{Deserialize, Serialize};

/// Script categories relevant to overlay transaction encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScriptType {
    /// Pay-to-pubkey
    PubKey,
    /// Pay-to-pubkey-hash
    PubKeyHash,
    /// Pay-to-script-hash
    ScriptHash,
    /// Bare multisig
    Multisig,
    /// Null-data (OP_RETURN)
    NullData,
    /// Pay-to-witness-pubkey-hash
    WitnessV0KeyHash,
    /// Pay-to-witness-script-hash
    WitnessV0ScriptHash,
    /// Anything the host chain classifies as non-standard
    NonStandard,
}

/// Checks if the script type is allowed as input
pub fn is_allowed_input_type(params: &ConsensusParams, script_type: ScriptType, block: u32) -> bool {
    match script_type {
        ScriptType::PubKeyHash => params.pubkeyhash_block <= block,
        ScriptType::ScriptHash => params.scripthash_block <= block,
        _ => false,
    }
}

/// Checks if the script type qualifies as output
pub fn is_allowed_output_type(
    params: &ConsensusParams,
    script_type: ScriptType,
    block: u32,
) -> bool {
    match script_type {
        ScriptType::PubKeyHash => params.pubkeyhash_block <= block,
        ScriptType::ScriptHash => params.scripthash_block <= block,
        ScriptType::Multisig => params.multisig_block <= block,
        ScriptType::NullData => params.nulldata_block <= block,
        _ => false,
    }
}

/// Checks if the transaction type and version is supported and enabled
///
/// Test-ecosystem properties are exempt from height gating so new
/// transaction types can be exercised ahead of their mainstream
/// activation. A property identifier of 0 (the native coin) is a wildcard
/// and must be explicitly allowed by the matching table row; that check
/// runs before the ecosystem exemption.
pub fn is_transaction_type_allowed(
    params: &ConsensusParams,
    block: u32,
    property_id: u32,
    tx_type: u16,
    version: u16,
) -> bool {
    for entry in params.restrictions() {
        if entry.tx_type != tx_type || entry.version != version {
            continue;
        }
        if property_id == PROPERTY_NATIVE && !entry.allow_wildcard {
            continue;
        }
        if is_test_ecosystem(property_id) {
            return true;
        }
        if block >= entry.activation_block {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use overlay_params::property::{PROPERTY_MAIN_TOKEN, PROPERTY_TEST_TOKEN};
    use overlay_params::restrictions::{
        TX_ANY_DATA, TX_SEND_TO_OWNERS, TX_SIMPLE_SEND, TX_VERSION_0, TX_VERSION_1,
    };

    #[test]
    fn test_absent_pairs_denied() {
        let params = ConsensusParams::testnet();
        // Type not in the table at all.
        assert!(!is_transaction_type_allowed(&params, u32::MAX, 1, 40, TX_VERSION_0));
        // Known type, version not in the table.
        assert!(!is_transaction_type_allowed(&params, u32::MAX, 1, TX_SIMPLE_SEND, TX_VERSION_1));
        // Test ecosystem does not rescue an absent pair.
        assert!(!is_transaction_type_allowed(
            &params,
            u32::MAX,
            PROPERTY_TEST_TOKEN,
            40,
            TX_VERSION_0
        ));
    }

    #[test]
    fn test_height_gating() {
        let params = ConsensusParams::mainnet();
        let genesis = params.genesis_block;
        assert!(!is_transaction_type_allowed(
            &params,
            genesis - 1,
            PROPERTY_MAIN_TOKEN,
            TX_SIMPLE_SEND,
            TX_VERSION_0
        ));
        assert!(is_transaction_type_allowed(
            &params,
            genesis,
            PROPERTY_MAIN_TOKEN,
            TX_SIMPLE_SEND,
            TX_VERSION_0
        ));
    }

    #[test]
    fn test_wildcard_requires_opt_in() {
        let params = ConsensusParams::testnet();
        // Simple send does not allow the native-coin wildcard, even past
        // its activation height.
        assert!(!is_transaction_type_allowed(
            &params,
            u32::MAX,
            PROPERTY_NATIVE,
            TX_SIMPLE_SEND,
            TX_VERSION_0
        ));
        // Any-data opts in.
        assert!(is_transaction_type_allowed(
            &params,
            u32::MAX,
            PROPERTY_NATIVE,
            TX_ANY_DATA,
            TX_VERSION_0
        ));
    }

    #[test]
    fn test_test_ecosystem_exempt_from_height() {
        let params = ConsensusParams::mainnet();
        assert!(is_transaction_type_allowed(
            &params,
            0,
            PROPERTY_TEST_TOKEN,
            TX_SIMPLE_SEND,
            TX_VERSION_0
        ));
        // Cross-property STO is not scheduled on mainnet, still allowed in
        // the test ecosystem.
        assert!(is_transaction_type_allowed(
            &params,
            0,
            PROPERTY_TEST_TOKEN,
            TX_SEND_TO_OWNERS,
            TX_VERSION_1
        ));
        // The same pair in the main ecosystem stays height gated.
        assert!(!is_transaction_type_allowed(
            &params,
            0,
            PROPERTY_MAIN_TOKEN,
            TX_SIMPLE_SEND,
            TX_VERSION_0
        ));
    }

    #[test]
    fn test_input_types() {
        let params = ConsensusParams::mainnet();
        let genesis = params.genesis_block;
        assert!(is_allowed_input_type(&params, ScriptType::PubKeyHash, 0));
        assert!(!is_allowed_input_type(&params, ScriptType::ScriptHash, genesis - 1));
        assert!(is_allowed_input_type(&params, ScriptType::ScriptHash, genesis));
        // Only P2PKH and P2SH can ever be inputs.
        assert!(!is_allowed_input_type(&params, ScriptType::Multisig, u32::MAX));
        assert!(!is_allowed_input_type(&params, ScriptType::NullData, u32::MAX));
        assert!(!is_allowed_input_type(&params, ScriptType::NonStandard, u32::MAX));
    }

    #[test]
    fn test_output_types() {
        let params = ConsensusParams::mainnet();
        let genesis = params.genesis_block;
        assert!(is_allowed_output_type(&params, ScriptType::Multisig, 0));
        assert!(!is_allowed_output_type(&params, ScriptType::NullData, genesis - 1));
        assert!(is_allowed_output_type(&params, ScriptType::NullData, genesis));
        assert!(!is_allowed_output_type(&params, ScriptType::PubKey, u32::MAX));
        assert!(!is_allowed_output_type(
            &params,
            ScriptType::WitnessV0KeyHash,
            u32::MAX
        ));
        assert!(!is_allowed_output_type(&params, ScriptType::NonStandard, u32::MAX));
    }
}
