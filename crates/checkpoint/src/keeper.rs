//! Checkpoint keeper: the sole writer of checkpoint state.

use std::sync::Arc;

use tracing::*;

use causeway_db::traits::CheckpointStore;
use causeway_primitives::checkpoint::Checkpoint;
use causeway_primitives::params::CheckpointParams;
use causeway_primitives::root_chain::RootChainType;

use crate::errors::CheckpointError;

/// Owns all persistent checkpoint structures, keyed by root chain. Handlers
/// are pure functions over `(ctx, keeper, msg, side_result)`; every write
/// funnels through here.
pub struct Keeper<D> {
    store: Arc<D>,
    params: CheckpointParams,
}

impl<D: CheckpointStore> Keeper<D> {
    pub fn new(store: Arc<D>, params: CheckpointParams) -> Self {
        Self { store, params }
    }

    pub fn params(&self) -> &CheckpointParams {
        &self.params
    }

    /// Committed tip for the tag; `NoCheckpointFound` when the log is empty.
    pub fn get_last_checkpoint(
        &self,
        root: RootChainType,
    ) -> Result<Checkpoint, CheckpointError> {
        self.store
            .get_last_checkpoint(root)?
            .map(|(_, ckpt)| ckpt)
            .ok_or(CheckpointError::NoCheckpointFound)
    }

    /// Committed checkpoint by header-block number.
    pub fn get_checkpoint(
        &self,
        root: RootChainType,
        number: u64,
    ) -> Result<Checkpoint, CheckpointError> {
        self.store
            .get_checkpoint(root, number)?
            .ok_or(CheckpointError::NoCheckpointFound)
    }

    /// Whole committed log in number order.
    pub fn get_checkpoints(
        &self,
        root: RootChainType,
    ) -> Result<Vec<(u64, Checkpoint)>, CheckpointError> {
        Ok(self.store.get_checkpoints(root)?)
    }

    /// Appends to the committed log under `number`.
    pub fn add_checkpoint(
        &self,
        number: u64,
        ckpt: Checkpoint,
        root: RootChainType,
    ) -> Result<(), CheckpointError> {
        self.store.put_checkpoint(root, number, ckpt)?;
        Ok(())
    }

    pub fn get_checkpoint_from_buffer(
        &self,
        root: RootChainType,
    ) -> Result<Option<Checkpoint>, CheckpointError> {
        Ok(self.store.get_checkpoint_buffer(root)?)
    }

    pub fn set_checkpoint_buffer(
        &self,
        ckpt: Checkpoint,
        root: RootChainType,
    ) -> Result<(), CheckpointError> {
        self.store.set_checkpoint_buffer(root, ckpt)?;
        Ok(())
    }

    pub fn flush_checkpoint_buffer(&self, root: RootChainType) -> Result<(), CheckpointError> {
        self.store.clear_checkpoint_buffer(root)?;
        Ok(())
    }

    pub fn get_checkpoint_sync_from_buffer(
        &self,
        root: RootChainType,
    ) -> Result<Option<Checkpoint>, CheckpointError> {
        Ok(self.store.get_sync_buffer(root)?)
    }

    pub fn set_checkpoint_sync_buffer(
        &self,
        ckpt: Checkpoint,
        root: RootChainType,
    ) -> Result<(), CheckpointError> {
        self.store.set_sync_buffer(root, ckpt)?;
        Ok(())
    }

    pub fn flush_checkpoint_sync_buffer(
        &self,
        root: RootChainType,
    ) -> Result<(), CheckpointError> {
        self.store.clear_sync_buffer(root)?;
        Ok(())
    }

    pub fn get_ack_count(&self, root: RootChainType) -> Result<u64, CheckpointError> {
        Ok(self.store.get_ack_count(root)?)
    }

    /// Bumps the per-root ack counter by one.
    pub fn update_ack_count(&self, root: RootChainType) -> Result<(), CheckpointError> {
        let count = self.store.get_ack_count(root)?;
        self.store.put_ack_count(root, count + 1)?;
        debug!(%root, ack_count = count + 1, "updated ack count");
        Ok(())
    }

    /// Unix time at which a buffered entry stops blocking its slot.
    pub fn buffer_expiry(&self, entry: &Checkpoint) -> u64 {
        entry.timestamp + self.params.checkpoint_buffer_time.as_secs()
    }

    /// Whether a buffered entry has outlived its TTL at bridge time `now`.
    pub fn is_buffer_expired(&self, entry: &Checkpoint, now: u64) -> bool {
        now >= self.buffer_expiry(entry)
    }
}
