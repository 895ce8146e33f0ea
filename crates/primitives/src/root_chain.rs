//! Root chain tags.
//!
//! Every piece of checkpoint state is keyed by the root chain it is destined
//! for. `Stake` is the canonical chain whose acks also drive proposer
//! rotation.

use std::fmt;
use std::str::FromStr;

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed enumeration of the external settlement chains plus the local stake
/// chain.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Arbitrary,
    BorshDeserialize,
    BorshSerialize,
    Deserialize,
    Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RootChainType {
    Stake,
    Eth,
    Bsc,
    Tron,
}

impl RootChainType {
    /// All tags, in a fixed order. Useful for per-tag iteration.
    pub const ALL: [RootChainType; 4] = [
        RootChainType::Stake,
        RootChainType::Eth,
        RootChainType::Bsc,
        RootChainType::Tron,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RootChainType::Stake => "stake",
            RootChainType::Eth => "eth",
            RootChainType::Bsc => "bsc",
            RootChainType::Tron => "tron",
        }
    }
}

impl fmt::Display for RootChainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown root chain type {0:?}")]
pub struct ParseRootChainTypeError(String);

impl FromStr for RootChainType {
    type Err = ParseRootChainTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stake" => Ok(RootChainType::Stake),
            "eth" => Ok(RootChainType::Eth),
            "bsc" => Ok(RootChainType::Bsc),
            "tron" => Ok(RootChainType::Tron),
            other => Err(ParseRootChainTypeError(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RootChainType;

    #[test]
    fn test_roundtrip_str() {
        for rc in RootChainType::ALL {
            assert_eq!(rc.as_str().parse::<RootChainType>().unwrap(), rc);
        }
    }
}
