//! Checkpoint message kinds.
//!
//! Messages are immutable values; everything the handlers persist is derived
//! from them plus the keeper's state.

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use causeway_primitives::buf::{Buf20, Buf32};
use causeway_primitives::root_chain::RootChainType;

use crate::errors::CheckpointError;

/// Propose a checkpoint of the child-chain interval `[start_block,
/// end_block]` for one root chain.
#[derive(
    Clone, Debug, Eq, PartialEq, Arbitrary, BorshDeserialize, BorshSerialize, Deserialize, Serialize,
)]
pub struct MsgCheckpoint {
    pub proposer: Buf20,
    pub start_block: u64,
    pub end_block: u64,

    /// Merkle root of the child-chain block headers over the interval.
    pub root_hash: Buf32,

    /// Merkle root of the bridge's account state at proposal time.
    pub account_root_hash: Buf32,

    pub bor_chain_id: String,
    pub root_chain: RootChainType,
}

/// Confirm that a buffered checkpoint was accepted by the root-chain
/// contract under header block `number`.
#[derive(
    Clone, Debug, Eq, PartialEq, Arbitrary, BorshDeserialize, BorshSerialize, Deserialize, Serialize,
)]
pub struct MsgCheckpointAck {
    pub number: u64,
    pub proposer: Buf20,
    pub start_block: u64,
    pub end_block: u64,
    pub root_hash: Buf32,
    pub root_chain: RootChainType,
}

/// Mirror a checkpoint that an off-chain process submitted directly to a
/// secondary root chain.
#[derive(
    Clone, Debug, Eq, PartialEq, Arbitrary, BorshDeserialize, BorshSerialize, Deserialize, Serialize,
)]
pub struct MsgCheckpointSync {
    pub number: u64,
    pub proposer: Buf20,
    pub start_block: u64,
    pub end_block: u64,
    pub root_chain: RootChainType,
}

/// Clear the sync shadow once the mirrored checkpoint is visible from the
/// staking manager.
#[derive(
    Clone, Debug, Eq, PartialEq, Arbitrary, BorshDeserialize, BorshSerialize, Deserialize, Serialize,
)]
pub struct MsgCheckpointSyncAck {
    pub number: u64,
    pub root_chain: RootChainType,
}

/// The closed set of message kinds this module handles.
#[derive(
    Clone, Debug, Eq, PartialEq, Arbitrary, BorshDeserialize, BorshSerialize, Deserialize, Serialize,
)]
pub enum CheckpointMsg {
    Checkpoint(MsgCheckpoint),
    CheckpointAck(MsgCheckpointAck),
    CheckpointSync(MsgCheckpointSync),
    CheckpointSyncAck(MsgCheckpointSyncAck),
}

impl CheckpointMsg {
    /// Action string, used as the `action` event attribute and as the wire
    /// kind tag.
    pub fn msg_type(&self) -> &'static str {
        match self {
            CheckpointMsg::Checkpoint(_) => "checkpoint",
            CheckpointMsg::CheckpointAck(_) => "checkpoint-ack",
            CheckpointMsg::CheckpointSync(_) => "checkpoint-sync",
            CheckpointMsg::CheckpointSyncAck(_) => "checkpoint-sync-ack",
        }
    }

    /// Root chain the message is keyed by.
    pub fn root_chain(&self) -> RootChainType {
        match self {
            CheckpointMsg::Checkpoint(m) => m.root_chain,
            CheckpointMsg::CheckpointAck(m) => m.root_chain,
            CheckpointMsg::CheckpointSync(m) => m.root_chain,
            CheckpointMsg::CheckpointSyncAck(m) => m.root_chain,
        }
    }

    /// Decodes a message delivered as a kind tag plus borsh body.
    ///
    /// Kinds this module does not route resolve to
    /// [`CheckpointError::UnknownRequest`]; a routable kind with a garbled
    /// body is [`CheckpointError::MsgDecode`].
    pub fn decode(kind: &str, body: &[u8]) -> Result<CheckpointMsg, CheckpointError> {
        let msg = match kind {
            "checkpoint" => CheckpointMsg::Checkpoint(decode_body(body)?),
            "checkpoint-ack" => CheckpointMsg::CheckpointAck(decode_body(body)?),
            "checkpoint-sync" => CheckpointMsg::CheckpointSync(decode_body(body)?),
            "checkpoint-sync-ack" => CheckpointMsg::CheckpointSyncAck(decode_body(body)?),
            _ => return Err(CheckpointError::UnknownRequest),
        };
        Ok(msg)
    }
}

fn decode_body<T: BorshDeserialize>(body: &[u8]) -> Result<T, CheckpointError> {
    borsh::from_slice(body).map_err(|_| CheckpointError::MsgDecode)
}
