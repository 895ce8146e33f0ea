//! Interfaces onto the neighbouring bridge modules.

use causeway_primitives::params::ChainParams;
use causeway_primitives::root_chain::RootChainType;

use crate::errors::CheckpointError;

/// Chain-parameter module: contract addresses and activation heights.
pub trait ChainKeeper {
    /// Canonical chain params (carry the Eth and Tron contract addresses).
    fn chain_params(&self) -> ChainParams;

    /// Per-root override params; `Err(WrongRootChainType)` when the tag has
    /// no dedicated configuration.
    fn root_chain_params(&self, root: RootChainType) -> Result<ChainParams, CheckpointError>;

    /// First child-chain block `root` accepts checkpoints from.
    fn chain_activation_height(&self, root: RootChainType) -> u64;
}

/// Staking module surface the ack path needs: advancing the proposer
/// rotation accumulator.
pub trait StakingKeeper {
    fn increment_accum(&self, times: u64);
}
