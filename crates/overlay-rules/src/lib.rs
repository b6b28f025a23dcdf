//! Overlay protocol consensus rule resolution
//!
//! Answers the three consensus-critical questions for every candidate
//! transaction or block: whether a transaction type/version is permitted at
//! a height, whether an optional feature is live, and whether locally
//! derived state matches published checkpoints.
//!
//! Every decision function returns a plain `bool`; the decision to halt,
//! warn, or continue belongs to the caller, which knows whether it is in
//! startup replay or live block processing.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod activation;
pub mod checkpoint;
pub mod feature;
pub mod rules;
pub mod store;

pub use activation::{
    is_feature_activated, ActivationOrigin, ActivationRegistry, Alert, AlertKind, AlertSink,
    LogAlertSink, PendingActivation, CLIENT_VERSION,
};
pub use checkpoint::{
    verify_checkpoint, verify_transaction_existence, ConsensusDigest, TxHistory,
};
pub use feature::{feature_name, Feature};
pub use rules::{
    is_allowed_input_type, is_allowed_output_type, is_transaction_type_allowed, ScriptType,
};
pub use store::ParamsStore;

/// Error types for rule operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Feature identifier not known to this client
    #[error("Unknown feature: {0}")]
    UnknownFeature(u16),

    /// Parameter lookup error
    #[error(transparent)]
    Params(#[from] overlay_params::Error),
}

/// Result type for rule operations
pub type Result<T> = std::result::Result<T, Error>;
