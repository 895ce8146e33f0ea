//! Typed results for the checkpoint handlers.
//!
//! Consumers match on the kind (or its numeric code), never on the message
//! text. `NoAck` is informational rather than a fault: it tells the submitter
//! when the occupied buffer slot frees up.

use causeway_db::errors::DbError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Merkle root mismatch or interval longer than the configured maximum.
    #[error("checkpoint does not match the child chain")]
    InvalidBlockInput,

    /// Side-phase message contents disagree with root-chain state.
    #[error("message does not match root-chain contract state")]
    InvalidAck,

    /// The tag has no configured root chain of the required shape.
    #[error("wrong root chain type")]
    WrongRootChainType,

    /// Proposal overlaps the committed tip.
    #[error("checkpoint already exists for the interval")]
    OldCheckpoint,

    /// Proposal leaves a gap after the committed tip.
    #[error("checkpoint not in continuity with the committed tip")]
    DiscontinuousCheckpoint,

    /// First checkpoint not at the activation height, or the side tx was not
    /// approved.
    #[error("invalid block details")]
    BadBlockDetails,

    /// A pending entry blocks the slot until ack or expiry (unix seconds).
    #[error("ack required; buffer is occupied until {expiry}")]
    NoAck { expiry: u64 },

    /// Ack without a buffered checkpoint, or contradicting the buffered one.
    #[error("ack does not match the buffered checkpoint")]
    BadAck,

    /// Committed-store lookup found nothing for the tag.
    #[error("no checkpoint found")]
    NoCheckpointFound,

    /// Message kind this module does not handle.
    #[error("unrecognized checkpoint message kind")]
    UnknownRequest,

    /// Recognized kind whose body failed to decode.
    #[error("malformed checkpoint message body")]
    MsgDecode,

    #[error("db: {0}")]
    Db(#[from] DbError),
}

impl CheckpointError {
    /// Stable numeric code, the part consumers key on.
    pub fn code(&self) -> u32 {
        match self {
            CheckpointError::InvalidBlockInput => 2501,
            CheckpointError::InvalidAck => 2502,
            CheckpointError::WrongRootChainType => 2503,
            CheckpointError::OldCheckpoint => 2504,
            CheckpointError::DiscontinuousCheckpoint => 2505,
            CheckpointError::BadBlockDetails => 2506,
            CheckpointError::NoAck { .. } => 2507,
            CheckpointError::BadAck => 2508,
            CheckpointError::NoCheckpointFound => 2509,
            CheckpointError::UnknownRequest => 2510,
            CheckpointError::MsgDecode => 2511,
            CheckpointError::Db(_) => 2599,
        }
    }
}
