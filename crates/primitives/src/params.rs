//! Checkpoint module parameters and per-root chain parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::buf::Buf20;

/// Parameters governing checkpoint acceptance.
///
/// These are chain parameters agreed on by all validators; changing them is a
/// governance action, not a node-local setting.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CheckpointParams {
    /// Upper bound on `end_block - start_block + 1` for a proposal.
    pub max_checkpoint_length: u64,

    /// How long a buffered checkpoint blocks the slot before it may be
    /// replaced without an ack.
    pub checkpoint_buffer_time: Duration,

    /// Granularity the root-chain contract uses to key header records.
    pub child_block_interval: u64,
}

impl Default for CheckpointParams {
    fn default() -> Self {
        Self {
            max_checkpoint_length: 1024,
            checkpoint_buffer_time: Duration::from_secs(1000),
            child_block_interval: 10000,
        }
    }
}

/// Contract addresses and activation height for one root chain.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ChainParams {
    /// Checkpoint contract on an EVM-style root chain.
    pub root_chain_address: Buf20,

    /// Checkpoint contract on Tron. Tron addresses decode differently, so the
    /// raw 20 bytes are kept and interpreted by the Tron reader.
    pub tron_chain_address: Buf20,

    /// Staking manager on Tron, consulted for synced checkpoint ids.
    pub tron_staking_manager_address: Buf20,

    /// First child-chain block this root chain accepts checkpoints from.
    pub activation_height: u64,
}
