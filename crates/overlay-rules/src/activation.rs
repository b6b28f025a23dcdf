//! Feature activation and deactivation
//!
//! Activation requests arrive in system messages that a collaborator has
//! already authenticated; this module only enforces eligibility and applies
//! the result to the parameter store. Refused requests make no state change
//! and the carrying transaction is treated as a no-op by the caller.

use crate::feature::{feature_name, Feature};
use crate::store::ParamsStore;
use chrono::{DateTime, Utc};
use overlay_params::{ConsensusParams, Network};
use serde::{Deserialize, Serialize};

/// Numeric version of this client, compared against the minimum client
/// version carried by activation messages
pub const CLIENT_VERSION: u32 = 1_100_000;

/// Blocks after which an emergency deactivation alert expires
const DEACTIVATION_ALERT_EXPIRY: u32 = 1024;

/// Where an activation request originated
///
/// Node startup replays the committed history of activations to re-derive
/// the parameter state. Those requests already passed the notice-window
/// check when they were accepted live, so the window is not re-checked;
/// re-deriving state from history must never re-reject an accepted
/// decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationOrigin {
    /// Live block processing; the notice window is enforced
    Live,
    /// Startup replay of already-committed activations
    StartupReplay,
}

/// Append-only record of a processed activation request
///
/// Recorded for every processed request, including unrecognized feature
/// identifiers, so the activation history stays auditable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingActivation {
    /// Wire identifier of the feature
    pub feature_id: u16,
    /// Height at which the feature goes live
    pub activation_block: u32,
    /// Minimum client version able to support the feature
    pub min_client_version: u32,
    /// Human-readable feature name
    pub feature_name: String,
    /// When this record was created
    pub recorded_at: DateTime<Utc>,
}

/// Classification of a broadcast alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertKind {
    /// A feature this client cannot support will activate; the node must
    /// upgrade or shut down at the activation height
    UnsupportedActivation,
    /// A live feature was deactivated with zero delay
    EmergencyDeactivation,
}

/// An operator-facing alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// What happened
    pub kind: AlertKind,
    /// Height at which the alert stops being relevant
    pub expiry_block: u32,
    /// Operator-facing message
    pub message: String,
}

/// Sink for operator alerts
///
/// The host wires this to its alert-broadcast mechanism; the default
/// implementation only logs.
pub trait AlertSink: Send + Sync {
    /// Deliver an alert to the operator
    fn broadcast(&self, alert: &Alert);
}

/// Alert sink that routes alerts to the log
#[derive(Debug, Default)]
pub struct LogAlertSink;

impl AlertSink for LogAlertSink {
    fn broadcast(&self, alert: &Alert) {
        tracing::warn!(kind = ?alert.kind, expiry_block = alert.expiry_block, "{}", alert.message);
    }
}

/// Processes feature activations and deactivations
///
/// Owns the append-only activation log and the alert sink. All parameter
/// mutation in the process goes through this registry.
pub struct ActivationRegistry {
    activations: Vec<PendingActivation>,
    alert_sink: Box<dyn AlertSink>,
}

impl ActivationRegistry {
    /// Create a registry that logs its alerts
    pub fn new() -> Self {
        Self::with_alert_sink(Box::new(LogAlertSink))
    }

    /// Create a registry with a custom alert sink
    pub fn with_alert_sink(alert_sink: Box<dyn AlertSink>) -> Self {
        Self {
            activations: Vec::new(),
            alert_sink,
        }
    }

    /// Activate a feature at a specific block height
    ///
    /// Returns `false` and changes nothing when the notice window is not
    /// respected (live requests only), when the feature is already live, or
    /// when the feature identifier is unknown to this client. An unknown
    /// identifier means the network has moved ahead of this client: the
    /// request is still recorded and an alert schedules a shutdown at the
    /// activation height.
    pub fn activate_feature(
        &mut self,
        store: &mut ParamsStore,
        network: Network,
        feature_id: u16,
        activation_block: u32,
        min_client_version: u32,
        current_block: u32,
        origin: ActivationOrigin,
    ) -> bool {
        tracing::info!(
            feature_id,
            activation_block,
            ?origin,
            "feature activation requested"
        );

        let params = store.params(network);

        if origin == ActivationOrigin::Live {
            let earliest = current_block.saturating_add(params.min_activation_blocks);
            let latest = current_block.saturating_add(params.max_activation_blocks);
            if activation_block < earliest || activation_block > latest {
                tracing::warn!(feature_id, "feature activation refused by notice checks");
                return false;
            }
        }

        if is_feature_activated(params, feature_id, current_block) {
            tracing::warn!(feature_id, "feature activation refused, already live");
            return false;
        }

        let name = feature_name(feature_id);
        self.activations.push(PendingActivation {
            feature_id,
            activation_block,
            min_client_version,
            feature_name: name.to_string(),
            recorded_at: Utc::now(),
        });

        let feature = match Feature::try_from(feature_id) {
            Ok(feature) => feature,
            Err(_) => {
                // The network activated something newer than this client.
                self.warn_unsupported(feature_id, name, activation_block);
                return false;
            }
        };

        feature.set_activation_block(store.params_mut(network), activation_block);
        tracing::info!(
            feature_id,
            feature = name,
            activation_block,
            "feature activation processed"
        );

        if min_client_version > CLIENT_VERSION {
            self.warn_unsupported(feature_id, name, activation_block);
        }

        true
    }

    /// Deactivate a feature immediately
    ///
    /// There is no notice period: deactivation is reserved for emergencies,
    /// requires no client upgrade and no user action, and only removes
    /// capability.
    pub fn deactivate_feature(
        &mut self,
        store: &mut ParamsStore,
        network: Network,
        feature_id: u16,
        current_block: u32,
    ) -> bool {
        tracing::info!(feature_id, "immediate feature deactivation requested");

        if !is_feature_activated(store.params(network), feature_id, current_block) {
            tracing::warn!(feature_id, "feature deactivation refused, not live");
            return false;
        }

        let Ok(feature) = Feature::try_from(feature_id) else {
            // An unknown feature can never report as activated.
            return false;
        };

        feature.set_activation_block(store.params_mut(network), ConsensusParams::NEVER);
        tracing::info!(
            feature_id,
            feature = feature.name(),
            "feature deactivation processed"
        );

        self.alert_sink.broadcast(&Alert {
            kind: AlertKind::EmergencyDeactivation,
            expiry_block: current_block.saturating_add(DEACTIVATION_ALERT_EXPIRY),
            message: format!(
                "An emergency deactivation of feature ID {} ({}) has occurred",
                feature_id,
                feature.name()
            ),
        });

        true
    }

    /// Every activation request processed so far, in order
    pub fn activations(&self) -> &[PendingActivation] {
        &self.activations
    }

    /// Recorded activations that have not yet reached their height
    pub fn pending_activations(&self, current_block: u32) -> Vec<&PendingActivation> {
        self.activations
            .iter()
            .filter(|a| a.activation_block > current_block)
            .collect()
    }

    /// Recorded activations whose height has been reached
    pub fn completed_activations(&self, current_block: u32) -> Vec<&PendingActivation> {
        self.activations
            .iter()
            .filter(|a| a.activation_block <= current_block)
            .collect()
    }

    fn warn_unsupported(&self, feature_id: u16, name: &str, activation_block: u32) {
        tracing::warn!(
            feature_id,
            activation_block,
            "this client will be out of consensus and shut down at the activation height"
        );
        self.alert_sink.broadcast(&Alert {
            kind: AlertKind::UnsupportedActivation,
            expiry_block: activation_block,
            message: format!(
                "Your client must be updated and will shut down at block {activation_block} \
                 (unsupported feature {feature_id} ('{name}') activated)"
            ),
        });
    }
}

impl Default for ActivationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a feature is live at the given block
///
/// Unknown feature identifiers are never live.
pub fn is_feature_activated(params: &ConsensusParams, feature_id: u16, block: u32) -> bool {
    match Feature::from_id(feature_id) {
        Some(feature) => block >= feature.activation_block(params),
        None => false,
    }
}
