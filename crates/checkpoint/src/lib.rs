//! Checkpoint coordination core.
//!
//! Validators propose checkpoints of the child chain, vote on them by
//! independently consulting the destination root chain, and later acknowledge
//! that the checkpoint landed there. Consensus delivers every message twice:
//! once in the *side phase*, where each validator runs the out-of-band oracle
//! check and votes, and once in the *post phase*, where the aggregated vote
//! is applied to persistent state. The side phase never writes; the post
//! phase never looks outside replicated state.

pub mod chain_keeper;
pub mod context;
pub mod contract;
pub mod errors;
pub mod events;
pub mod keeper;
pub mod msgs;
pub mod post_handler;
pub mod side_handler;
pub mod vote;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use errors::CheckpointError;
pub use keeper::Keeper;
pub use vote::SideTxResult;
