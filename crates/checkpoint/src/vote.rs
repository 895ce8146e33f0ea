//! Side-transaction vote type.

use std::fmt;

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

/// Aggregated outcome of the validators' side-phase vote on a message.
///
/// `Skip` means the validator set never took a position (e.g. the message
/// expired out of the vote window); post handlers treat anything other than
/// `Yes` as a rejection.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Arbitrary,
    BorshDeserialize,
    BorshSerialize,
    Deserialize,
    Serialize,
)]
pub enum SideTxResult {
    Yes,
    No,
    Skip,
}

impl SideTxResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            SideTxResult::Yes => "yes",
            SideTxResult::No => "no",
            SideTxResult::Skip => "skip",
        }
    }
}

impl fmt::Display for SideTxResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validator's answer in the side phase: the vote, plus the error code
/// when the vote is `No`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SideTxResponse {
    pub result: SideTxResult,
    pub code: Option<u32>,
}

impl SideTxResponse {
    pub fn yes() -> Self {
        Self {
            result: SideTxResult::Yes,
            code: None,
        }
    }

    pub fn no(err: &crate::errors::CheckpointError) -> Self {
        Self {
            result: SideTxResult::No,
            code: Some(err.code()),
        }
    }
}
