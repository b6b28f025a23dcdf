//! Checkpoint verification
//!
//! Compares locally derived overlay state against hardcoded published
//! values. A mismatch means this node's ledger view is provably wrong; the
//! caller is expected to halt rather than keep building on it.

use overlay_params::checkpoints::{
    checkpoint_at_height, ConsensusCheckpoint, TransactionCheckpoint, CHECKPOINT_INTERVAL,
};

/// Source of the rolling consensus digest over overlay ledger state
///
/// The digest is opaque to this crate; it is only compared for equality.
pub trait ConsensusDigest {
    /// Current rolling consensus digest (hex)
    fn consensus_digest(&self) -> String;
}

/// Local index of historical overlay transactions
pub trait TxHistory {
    /// Whether the transaction identifier is present locally
    fn contains_transaction(&self, txid: &str) -> bool;
}

/// Compares a block height, block hash and consensus digest against the
/// checkpoint list
///
/// Checkpoints only exist at multiples of [`CHECKPOINT_INTERVAL`], so every
/// other height passes without a table lookup. On a checkpointed height, a
/// block-hash mismatch fails before the digest is computed: a wrong block
/// hash means the whole chain view is wrong and the derived state is not
/// worth comparing.
pub fn verify_checkpoint(
    checkpoints: &[ConsensusCheckpoint],
    height: u32,
    block_hash: &str,
    state: &impl ConsensusDigest,
) -> bool {
    if height % CHECKPOINT_INTERVAL != 0 {
        return true;
    }

    let Ok(checkpoint) = checkpoint_at_height(checkpoints, height) else {
        // Nothing published for this height.
        return true;
    };

    if block_hash != checkpoint.block_hash {
        tracing::error!(
            height,
            expected = %checkpoint.block_hash,
            received = %block_hash,
            "checkpoint block hash mismatch"
        );
        return false;
    }

    let digest = state.consensus_digest();
    if digest != checkpoint.consensus_hash {
        tracing::error!(
            height,
            expected = %checkpoint.consensus_hash,
            received = %digest,
            "checkpoint consensus digest mismatch"
        );
        return false;
    }

    true
}

/// Verifies that every checkpointed historical transaction up to the given
/// height exists in the local history index
///
/// Each missing transaction is reported individually; the scan continues so
/// the operator sees the full damage, then the function fails as a whole.
pub fn verify_transaction_existence(
    checkpoints: &[TransactionCheckpoint],
    height: u32,
    history: &impl TxHistory,
) -> bool {
    tracing::info!(height, "verifying existence of historical transactions");

    let mut all_present = true;
    for checkpoint in checkpoints {
        if height < checkpoint.height {
            continue;
        }
        if !history.contains_transaction(&checkpoint.txid) {
            tracing::error!(
                txid = %checkpoint.txid,
                height = checkpoint.height,
                "historical transaction missing from local index"
            );
            all_present = false;
        }
    }

    all_present
}
