//! Trait definitions for low level checkpoint storage.
//!
//! Everything here is keyed by [`RootChainType`]; distinct tags must never
//! observe each other's writes. Operations are NOT validated at this level
//! beyond per-tag number monotonicity; protocol rules live in the keeper and
//! handlers above.

use causeway_primitives::checkpoint::Checkpoint;
use causeway_primitives::root_chain::RootChainType;

use crate::DbResult;

/// Store for the per-root committed checkpoint log and ack counters.
pub trait CheckpointDatabase {
    /// Appends a checkpoint under `number`. Returns an error if `number` is
    /// not strictly greater than the last stored number for the tag.
    fn put_checkpoint(
        &self,
        root: RootChainType,
        number: u64,
        ckpt: Checkpoint,
    ) -> DbResult<()>;

    /// Gets a committed checkpoint by number, if present.
    fn get_checkpoint(&self, root: RootChainType, number: u64) -> DbResult<Option<Checkpoint>>;

    /// Gets the highest-numbered committed checkpoint for the tag.
    fn get_last_checkpoint(&self, root: RootChainType) -> DbResult<Option<(u64, Checkpoint)>>;

    /// Gets the committed log in number order.
    fn get_checkpoints(&self, root: RootChainType) -> DbResult<Vec<(u64, Checkpoint)>>;

    /// Gets the ack counter, zero if never written.
    fn get_ack_count(&self, root: RootChainType) -> DbResult<u64>;

    /// Overwrites the ack counter.
    fn put_ack_count(&self, root: RootChainType, count: u64) -> DbResult<()>;
}

/// Single-slot staging areas: one pending proposal and one pending sync per
/// tag. The slot holds at most one entry; TTL policy is enforced above.
pub trait CheckpointBufferDatabase {
    fn get_checkpoint_buffer(&self, root: RootChainType) -> DbResult<Option<Checkpoint>>;

    fn set_checkpoint_buffer(&self, root: RootChainType, ckpt: Checkpoint) -> DbResult<()>;

    fn clear_checkpoint_buffer(&self, root: RootChainType) -> DbResult<()>;

    fn get_sync_buffer(&self, root: RootChainType) -> DbResult<Option<Checkpoint>>;

    fn set_sync_buffer(&self, root: RootChainType, ckpt: Checkpoint) -> DbResult<()>;

    fn clear_sync_buffer(&self, root: RootChainType) -> DbResult<()>;
}

/// Combined store the keeper is parameterized over.
pub trait CheckpointStore: CheckpointDatabase + CheckpointBufferDatabase {}

impl<T: CheckpointDatabase + CheckpointBufferDatabase> CheckpointStore for T {}
