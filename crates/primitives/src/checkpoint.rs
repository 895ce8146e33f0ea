//! Checkpoint data model.

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::buf::{Buf20, Buf32};

/// An interval of the child chain together with the Merkle root of its block
/// headers.
///
/// A checkpoint starts life in the per-root buffer when a validated proposal
/// arrives and becomes committed when the matching ack lands. The `timestamp`
/// is the bridge block-time at buffering and bounds the buffer's TTL.
#[derive(
    Clone, Debug, Eq, PartialEq, Arbitrary, BorshDeserialize, BorshSerialize, Deserialize, Serialize,
)]
pub struct Checkpoint {
    /// First child-chain block covered by this checkpoint.
    pub start_block: u64,

    /// Last child-chain block covered, inclusive.
    pub end_block: u64,

    /// Merkle root of the child-chain block headers over the interval.
    pub root_hash: Buf32,

    /// Bridge-chain address of the validator that proposed the checkpoint.
    pub proposer: Buf20,

    /// Identifier of the child chain the interval belongs to.
    pub bor_chain_id: String,

    /// Bridge block-time (unix seconds) when the checkpoint entered the
    /// buffer. Zero for committed entries that predate buffering.
    pub timestamp: u64,
}

impl Checkpoint {
    pub fn new(
        start_block: u64,
        end_block: u64,
        root_hash: Buf32,
        proposer: Buf20,
        bor_chain_id: String,
        timestamp: u64,
    ) -> Self {
        Self {
            start_block,
            end_block,
            root_hash,
            proposer,
            bor_chain_id,
            timestamp,
        }
    }
}
