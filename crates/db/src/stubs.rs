//! In-memory reference store.

use std::collections::BTreeMap;

use parking_lot::Mutex;
use tracing::*;

use causeway_primitives::checkpoint::Checkpoint;
use causeway_primitives::root_chain::RootChainType;

use crate::errors::DbError;
use crate::traits::{CheckpointBufferDatabase, CheckpointDatabase};
use crate::DbResult;

#[derive(Default)]
struct RootState {
    committed: BTreeMap<u64, Checkpoint>,
    ack_count: u64,
    buffer: Option<Checkpoint>,
    sync_buffer: Option<Checkpoint>,
}

#[derive(Default)]
struct InnerState {
    roots: BTreeMap<RootChainType, RootState>,
}

impl InnerState {
    fn root(&mut self, root: RootChainType) -> &mut RootState {
        self.roots.entry(root).or_default()
    }

    fn root_ref(&self, root: RootChainType) -> Option<&RootState> {
        self.roots.get(&root)
    }
}

/// Keeps everything in per-tag BTreeMaps under a mutex. Used as the store in
/// the handler test suites; a kv-backed implementation would live with the
/// node, not here.
#[derive(Default)]
pub struct StubCheckpointDb {
    state: Mutex<InnerState>,
}

impl StubCheckpointDb {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CheckpointDatabase for StubCheckpointDb {
    fn put_checkpoint(
        &self,
        root: RootChainType,
        number: u64,
        ckpt: Checkpoint,
    ) -> DbResult<()> {
        let mut st = self.state.lock();
        let rs = st.root(root);

        if let Some((last, _)) = rs.committed.last_key_value() {
            if number <= *last {
                return Err(DbError::OooInsert(root, number));
            }
        }

        rs.committed.insert(number, ckpt);
        Ok(())
    }

    fn get_checkpoint(&self, root: RootChainType, number: u64) -> DbResult<Option<Checkpoint>> {
        let st = self.state.lock();
        Ok(st.root_ref(root).and_then(|rs| rs.committed.get(&number).cloned()))
    }

    fn get_last_checkpoint(&self, root: RootChainType) -> DbResult<Option<(u64, Checkpoint)>> {
        let st = self.state.lock();
        Ok(st
            .root_ref(root)
            .and_then(|rs| rs.committed.last_key_value())
            .map(|(n, c)| (*n, c.clone())))
    }

    fn get_checkpoints(&self, root: RootChainType) -> DbResult<Vec<(u64, Checkpoint)>> {
        let st = self.state.lock();
        Ok(st
            .root_ref(root)
            .map(|rs| rs.committed.iter().map(|(n, c)| (*n, c.clone())).collect())
            .unwrap_or_default())
    }

    fn get_ack_count(&self, root: RootChainType) -> DbResult<u64> {
        let st = self.state.lock();
        Ok(st.root_ref(root).map(|rs| rs.ack_count).unwrap_or(0))
    }

    fn put_ack_count(&self, root: RootChainType, count: u64) -> DbResult<()> {
        let mut st = self.state.lock();
        st.root(root).ack_count = count;
        Ok(())
    }
}

impl CheckpointBufferDatabase for StubCheckpointDb {
    fn get_checkpoint_buffer(&self, root: RootChainType) -> DbResult<Option<Checkpoint>> {
        let st = self.state.lock();
        Ok(st.root_ref(root).and_then(|rs| rs.buffer.clone()))
    }

    fn set_checkpoint_buffer(&self, root: RootChainType, ckpt: Checkpoint) -> DbResult<()> {
        let mut st = self.state.lock();
        st.root(root).buffer = Some(ckpt);
        Ok(())
    }

    fn clear_checkpoint_buffer(&self, root: RootChainType) -> DbResult<()> {
        let mut st = self.state.lock();
        if st.root(root).buffer.take().is_some() {
            trace!(%root, "flushed checkpoint buffer");
        }
        Ok(())
    }

    fn get_sync_buffer(&self, root: RootChainType) -> DbResult<Option<Checkpoint>> {
        let st = self.state.lock();
        Ok(st.root_ref(root).and_then(|rs| rs.sync_buffer.clone()))
    }

    fn set_sync_buffer(&self, root: RootChainType, ckpt: Checkpoint) -> DbResult<()> {
        let mut st = self.state.lock();
        st.root(root).sync_buffer = Some(ckpt);
        Ok(())
    }

    fn clear_sync_buffer(&self, root: RootChainType) -> DbResult<()> {
        let mut st = self.state.lock();
        if st.root(root).sync_buffer.take().is_some() {
            trace!(%root, "flushed checkpoint sync buffer");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use causeway_primitives::buf::{Buf20, Buf32};

    use super::*;

    fn ckpt(start: u64, end: u64) -> Checkpoint {
        Checkpoint::new(start, end, Buf32::zero(), Buf20::zero(), "15001".to_owned(), 0)
    }

    #[test]
    fn test_put_get_last() {
        let db = StubCheckpointDb::new();
        db.put_checkpoint(RootChainType::Eth, 1, ckpt(100, 199)).unwrap();
        db.put_checkpoint(RootChainType::Eth, 2, ckpt(200, 299)).unwrap();

        let (n, c) = db.get_last_checkpoint(RootChainType::Eth).unwrap().unwrap();
        assert_eq!(n, 2);
        assert_eq!(c.start_block, 200);
    }

    #[test]
    fn test_ooo_insert_rejected() {
        let db = StubCheckpointDb::new();
        db.put_checkpoint(RootChainType::Eth, 5, ckpt(100, 199)).unwrap();

        let res = db.put_checkpoint(RootChainType::Eth, 5, ckpt(200, 299));
        assert!(matches!(res, Err(DbError::OooInsert(RootChainType::Eth, 5))));

        let res = db.put_checkpoint(RootChainType::Eth, 3, ckpt(200, 299));
        assert!(matches!(res, Err(DbError::OooInsert(RootChainType::Eth, 3))));
    }

    #[test]
    fn test_roots_are_disjoint() {
        let db = StubCheckpointDb::new();
        db.put_checkpoint(RootChainType::Eth, 1, ckpt(100, 199)).unwrap();
        db.set_checkpoint_buffer(RootChainType::Eth, ckpt(200, 299)).unwrap();

        assert!(db.get_last_checkpoint(RootChainType::Bsc).unwrap().is_none());
        assert!(db.get_checkpoint_buffer(RootChainType::Bsc).unwrap().is_none());
        assert_eq!(db.get_ack_count(RootChainType::Bsc).unwrap(), 0);
    }

    #[test]
    fn test_buffer_clear() {
        let db = StubCheckpointDb::new();
        db.set_checkpoint_buffer(RootChainType::Tron, ckpt(1, 64)).unwrap();
        db.clear_checkpoint_buffer(RootChainType::Tron).unwrap();
        assert!(db.get_checkpoint_buffer(RootChainType::Tron).unwrap().is_none());

        // clearing an empty slot is fine
        db.clear_checkpoint_buffer(RootChainType::Tron).unwrap();
    }
}
