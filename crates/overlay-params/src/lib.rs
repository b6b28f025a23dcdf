//! Overlay protocol network parameters and constants
//!
//! This crate provides network-specific consensus parameters, transaction
//! type identifiers, the transaction restriction table, property/ecosystem
//! identifiers, and checkpoint data for the overlay token protocol.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod checkpoints;
pub mod consensus;
pub mod network;
pub mod property;
pub mod restrictions;

pub use checkpoints::{
    checkpoint_at_height, consensus_checkpoints, transaction_checkpoints, ConsensusCheckpoint,
    TransactionCheckpoint, CHECKPOINT_INTERVAL,
};
pub use consensus::ConsensusParams;
pub use network::Network;
pub use restrictions::TransactionRestriction;

/// Error types for parameter operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid network specified
    #[error("Invalid network: {0}")]
    InvalidNetwork(String),

    /// Checkpoint not found
    #[error("No checkpoint found for height {0}")]
    CheckpointNotFound(u32),
}

/// Result type for parameter operations
pub type Result<T> = std::result::Result<T, Error>;
