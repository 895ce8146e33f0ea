//! Root-chain oracle interface.
//!
//! The side phase is the only place these calls happen. Implementations talk
//! to real root-chain RPC endpoints and must bound every call with a timeout;
//! the validators treat any error here as a `No` vote, so a hung or flaky
//! endpoint degrades to rejection, never to a wrong acceptance.

use causeway_primitives::buf::{Buf20, Buf32};
use causeway_primitives::root_chain::RootChainType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContractCallError {
    #[error("root chain rpc transport: {0}")]
    Transport(String),

    #[error("root chain call timed out")]
    Timeout,

    #[error("no header block {0} on the root chain")]
    HeaderNotFound(u64),
}

/// Handle for a bound root-chain contract. Obtained through
/// [`ContractCaller::get_root_chain_instance`] and passed back into header
/// queries; callers never look inside.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RootChainInstance {
    address: Buf20,
    root: RootChainType,
}

impl RootChainInstance {
    pub fn new(address: Buf20, root: RootChainType) -> Self {
        Self { address, root }
    }

    pub fn address(&self) -> Buf20 {
        self.address
    }

    pub fn root(&self) -> RootChainType {
        self.root
    }
}

/// One committed header-block record as the root-chain contract reports it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HeaderInfo {
    pub root_hash: Buf32,
    pub start_block: u64,
    pub end_block: u64,
    pub created_at: u64,
    pub proposer: Buf20,
}

/// Read-only oracle over the root chains and the child chain.
pub trait ContractCaller {
    /// Recomputes the Merkle root of the child-chain headers over
    /// `[start, end]` and compares it to `root_hash`. Intervals longer than
    /// `max_checkpoint_length` are rejected outright.
    fn validate_checkpoint(
        &self,
        start: u64,
        end: u64,
        root_hash: Buf32,
        max_checkpoint_length: u64,
    ) -> Result<bool, ContractCallError>;

    /// Binds the checkpoint contract at `address` on an EVM-style root chain.
    fn get_root_chain_instance(
        &self,
        address: Buf20,
        root: RootChainType,
    ) -> Result<RootChainInstance, ContractCallError>;

    /// Fetches the header-block record `number` from a bound contract.
    fn get_header_info(
        &self,
        number: u64,
        instance: &RootChainInstance,
        child_block_interval: u64,
    ) -> Result<HeaderInfo, ContractCallError>;

    /// Fetches a header-block record from the Tron contract. Tron address
    /// encoding differs from the EVM chains, so it does not go through
    /// [`RootChainInstance`].
    fn get_tron_header_info(
        &self,
        number: u64,
        tron_address: Buf20,
        child_block_interval: u64,
    ) -> Result<HeaderInfo, ContractCallError>;

    /// Highest checkpoint id the staking manager has seen synced for `root`.
    fn get_synced_checkpoint_id(
        &self,
        staking_manager: Buf20,
        root: RootChainType,
    ) -> Result<u64, ContractCallError>;

    /// Current child-chain tip as the canonical root chain sees it.
    fn current_child_block(&self) -> Result<u64, ContractCallError>;
}
