//! Property-based tests for overlay-rules
//!
//! Uses proptest to verify rule invariants across randomized inputs

use overlay_params::checkpoints::ConsensusCheckpoint;
use overlay_params::{ConsensusParams, Network};
use overlay_rules::{
    is_feature_activated, is_transaction_type_allowed, verify_checkpoint, ActivationOrigin,
    ActivationRegistry, ConsensusDigest, Feature, ParamsStore,
};
use proptest::prelude::*;

/// Digest source for heights where the digest must not be consulted
struct PanicDigest;

impl ConsensusDigest for PanicDigest {
    fn consensus_digest(&self) -> String {
        panic!("consensus digest must not be computed");
    }
}

/// Generate a feature known to this client
fn feature_strategy() -> impl Strategy<Value = Feature> {
    prop::sample::select(Feature::ALL.to_vec())
}

/// Generate realistic block heights
fn height_strategy() -> impl Strategy<Value = u32> {
    0u32..5_000_000
}

proptest! {
    /// Property: on regtest, an activation is accepted exactly when the
    /// notice falls inside the 5..=10 block window
    #[test]
    fn prop_notice_window_is_inclusive(
        current in height_strategy(),
        offset in 0u32..=20
    ) {
        let mut store = ParamsStore::new();
        let mut registry = ActivationRegistry::new();
        let params = store.params(Network::Regtest);
        let (min, max) = (params.min_activation_blocks, params.max_activation_blocks);

        let accepted = registry.activate_feature(
            &mut store,
            Network::Regtest,
            Feature::CrossPropertySto.id(),
            current + offset,
            0,
            current,
            ActivationOrigin::Live,
        );
        prop_assert_eq!(accepted, (min..=max).contains(&offset));
    }

    /// Property: a (type, version) pair absent from the restriction table
    /// is denied for every height and property
    #[test]
    fn prop_absent_pairs_always_denied(
        tx_type in any::<u16>(),
        version in 0u16..4,
        block in any::<u32>(),
        property_id in any::<u32>()
    ) {
        let params = ConsensusParams::testnet();
        prop_assume!(!params
            .restrictions()
            .iter()
            .any(|e| e.tx_type == tx_type && e.version == version));

        prop_assert!(!is_transaction_type_allowed(
            &params, block, property_id, tx_type, version
        ));
    }

    /// Property: heights off the checkpoint interval pass without touching
    /// the table or the digest
    #[test]
    fn prop_off_interval_heights_pass(
        height in any::<u32>(),
        hash in "[0-9a-f]{64}"
    ) {
        prop_assume!(height % 10_000 != 0);
        let checkpoints = vec![ConsensusCheckpoint {
            height: height - height % 10_000,
            block_hash: "aa".repeat(32),
            consensus_hash: "bb".repeat(32),
        }];
        prop_assert!(verify_checkpoint(&checkpoints, height, &hash, &PanicDigest));
    }

    /// Property: an activation is never effective before its target height
    /// and always effective at it
    #[test]
    fn prop_activation_boundary_exact(
        feature in feature_strategy(),
        target in 1u32..5_000_000
    ) {
        let mut params = ConsensusParams::regtest();
        feature.set_activation_block(&mut params, target);
        prop_assert!(!is_feature_activated(&params, feature.id(), target - 1));
        prop_assert!(is_feature_activated(&params, feature.id(), target));
    }

    /// Property: reset followed by replaying the same activation sequence
    /// reproduces identical parameters
    #[test]
    fn prop_replay_is_deterministic(
        schedule in prop::collection::vec((feature_strategy(), 1u32..1_000_000), 1..8)
    ) {
        let mut store = ParamsStore::new();
        let mut registry = ActivationRegistry::new();

        let replay = |store: &mut ParamsStore, registry: &mut ActivationRegistry| {
            for (feature, target) in &schedule {
                registry.activate_feature(
                    store,
                    Network::Regtest,
                    feature.id(),
                    *target,
                    0,
                    0,
                    ActivationOrigin::StartupReplay,
                );
            }
        };

        replay(&mut store, &mut registry);
        let first = store.clone();

        store.reset();
        replay(&mut store, &mut registry);
        prop_assert_eq!(store, first);
    }
}
