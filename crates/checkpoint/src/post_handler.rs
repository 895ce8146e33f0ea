//! Post-phase committers.
//!
//! These run after the validators' votes are aggregated, and they are the
//! only code that mutates checkpoint state. Everything here must be
//! deterministic across validators: no oracle, no wall clock, only the
//! message, the keeper, and the block context.

use tracing::*;

use causeway_db::traits::CheckpointStore;
use causeway_primitives::buf::Buf32;
use causeway_primitives::checkpoint::Checkpoint;
use causeway_primitives::root_chain::RootChainType;

use crate::chain_keeper::{ChainKeeper, StakingKeeper};
use crate::context::Context;
use crate::errors::CheckpointError;
use crate::events::{
    Event, ATTR_KEY_ACCOUNT_HASH, ATTR_KEY_ACTION, ATTR_KEY_END_BLOCK, ATTR_KEY_HEADER_INDEX,
    ATTR_KEY_MODULE, ATTR_KEY_PROPOSER, ATTR_KEY_ROOT_CHAIN, ATTR_KEY_ROOT_HASH,
    ATTR_KEY_SIDE_TX_RESULT, ATTR_KEY_START_BLOCK, ATTR_KEY_TX_HASH, EVENT_TYPE_CHECKPOINT,
    EVENT_TYPE_CHECKPOINT_ACK, EVENT_TYPE_CHECKPOINT_SYNC, EVENT_TYPE_CHECKPOINT_SYNC_ACK,
    MODULE_NAME,
};
use crate::keeper::Keeper;
use crate::msgs::{
    CheckpointMsg, MsgCheckpoint, MsgCheckpointAck, MsgCheckpointSync, MsgCheckpointSyncAck,
};
use crate::vote::SideTxResult;

/// Routes a message through its post committer. Installs a fresh event
/// scope; the events of a successful commit are returned, a failed commit
/// yields none and leaves state untouched.
pub fn post_tx_handler<D: CheckpointStore>(
    ctx: &mut Context,
    k: &Keeper<D>,
    ck: &impl ChainKeeper,
    sk: &impl StakingKeeper,
    msg: &CheckpointMsg,
    side_result: SideTxResult,
) -> Result<Vec<Event>, CheckpointError> {
    ctx.reset_events();

    let res = match msg {
        CheckpointMsg::Checkpoint(m) => post_handle_checkpoint(ctx, k, ck, m, side_result),
        CheckpointMsg::CheckpointAck(m) => post_handle_checkpoint_ack(ctx, k, sk, m, side_result),
        CheckpointMsg::CheckpointSync(m) => post_handle_checkpoint_sync(ctx, k, m, side_result),
        CheckpointMsg::CheckpointSyncAck(m) => {
            post_handle_checkpoint_sync_ack(ctx, k, m, side_result)
        }
    };

    res.map(|_| ctx.take_events())
}

/// Raw entry point for consensus: decodes the wire form first. A kind this
/// module does not route resolves to `UnknownRequest`; the message is still
/// consumed from the stream.
pub fn post_tx_handler_raw<D: CheckpointStore>(
    ctx: &mut Context,
    k: &Keeper<D>,
    ck: &impl ChainKeeper,
    sk: &impl StakingKeeper,
    kind: &str,
    body: &[u8],
    side_result: SideTxResult,
) -> Result<Vec<Event>, CheckpointError> {
    // Fresh scope regardless of whether the message decodes.
    ctx.reset_events();

    let msg = CheckpointMsg::decode(kind, body)?;
    post_tx_handler(ctx, k, ck, sk, &msg, side_result)
}

fn post_handle_checkpoint<D: CheckpointStore>(
    ctx: &mut Context,
    k: &Keeper<D>,
    ck: &impl ChainKeeper,
    msg: &MsgCheckpoint,
    side_result: SideTxResult,
) -> Result<(), CheckpointError> {
    if side_result != SideTxResult::Yes {
        debug!(
            start_block = msg.start_block,
            end_block = msg.end_block,
            "skipping checkpoint, side tx did not get yes votes"
        );
        return Err(CheckpointError::BadBlockDetails);
    }

    // The proposal must extend the committed tip exactly; a fresh tag starts
    // at its activation height.
    match k.get_last_checkpoint(msg.root_chain) {
        Ok(last) => {
            if last.end_block >= msg.start_block {
                error!(
                    current_tip = last.end_block,
                    start_block = msg.start_block,
                    "checkpoint already exists for the interval"
                );
                return Err(CheckpointError::OldCheckpoint);
            }
            if last.end_block + 1 != msg.start_block {
                error!(
                    current_tip = last.end_block,
                    start_block = msg.start_block,
                    root = %msg.root_chain,
                    "checkpoint not in continuity"
                );
                return Err(CheckpointError::DiscontinuousCheckpoint);
            }
        }
        Err(CheckpointError::NoCheckpointFound) => {
            let activation = ck.chain_activation_height(msg.root_chain);
            if activation != msg.start_block {
                error!(
                    activation,
                    start_block = msg.start_block,
                    root = %msg.root_chain,
                    "first checkpoint must start at the activation height"
                );
                return Err(CheckpointError::BadBlockDetails);
            }
        }
        Err(err) => return Err(err),
    }

    // A live buffered proposal blocks the slot until its ack or expiry.
    if let Some(buffered) = k.get_checkpoint_from_buffer(msg.root_chain)? {
        let expiry = k.buffer_expiry(&buffered);
        if !k.is_buffer_expired(&buffered, ctx.block_time()) {
            debug!(root = %msg.root_chain, expiry, "checkpoint already exists in buffer");
            return Err(CheckpointError::NoAck { expiry });
        }
    }

    k.set_checkpoint_buffer(
        Checkpoint::new(
            msg.start_block,
            msg.end_block,
            msg.root_hash,
            msg.proposer,
            msg.bor_chain_id.clone(),
            ctx.block_time(),
        ),
        msg.root_chain,
    )?;

    debug!(
        start_block = msg.start_block,
        end_block = msg.end_block,
        root_hash = %msg.root_hash,
        root = %msg.root_chain,
        "new checkpoint stored into buffer"
    );

    let ev = Event::new(EVENT_TYPE_CHECKPOINT)
        .attr(ATTR_KEY_ACTION, "checkpoint")
        .attr(ATTR_KEY_MODULE, MODULE_NAME)
        .attr(ATTR_KEY_TX_HASH, ctx.tx_hash().to_string())
        .attr(ATTR_KEY_SIDE_TX_RESULT, side_result.as_str())
        .attr(ATTR_KEY_PROPOSER, msg.proposer.to_string())
        .attr(ATTR_KEY_START_BLOCK, msg.start_block.to_string())
        .attr(ATTR_KEY_END_BLOCK, msg.end_block.to_string())
        .attr(ATTR_KEY_ROOT_HASH, msg.root_hash.to_string())
        .attr(ATTR_KEY_ACCOUNT_HASH, msg.account_root_hash.to_string())
        .attr(ATTR_KEY_ROOT_CHAIN, msg.root_chain.as_str());
    ctx.events_mut().emit(ev);

    Ok(())
}

fn post_handle_checkpoint_ack<D: CheckpointStore>(
    ctx: &mut Context,
    k: &Keeper<D>,
    sk: &impl StakingKeeper,
    msg: &MsgCheckpointAck,
    side_result: SideTxResult,
) -> Result<(), CheckpointError> {
    if side_result != SideTxResult::Yes {
        debug!(
            number = msg.number,
            root = %msg.root_chain,
            "skipping checkpoint ack, side tx did not get yes votes"
        );
        return Err(CheckpointError::BadBlockDetails);
    }

    let Some(mut buffered) = k.get_checkpoint_from_buffer(msg.root_chain)? else {
        error!(root = %msg.root_chain, "no checkpoint in buffer to ack");
        return Err(CheckpointError::BadAck);
    };

    if msg.start_block != buffered.start_block {
        error!(
            start_expected = buffered.start_block,
            start_received = msg.start_block,
            root = %msg.root_chain,
            "invalid start block in ack"
        );
        return Err(CheckpointError::BadAck);
    }

    // Exact interval match with a different root is a contradiction, not
    // something trimming can reconcile. This check must stay ahead of the
    // trim below.
    if msg.end_block == buffered.end_block && msg.root_hash != buffered.root_hash {
        error!(
            start_expected = buffered.start_block,
            start_received = msg.start_block,
            end_expected = buffered.end_block,
            end_received = msg.end_block,
            root_expected = %buffered.root_hash,
            root_received = %msg.root_hash,
            root = %msg.root_chain,
            "invalid ack"
        );
        return Err(CheckpointError::BadAck);
    }

    // The contract accepted a shorter interval than was buffered; trim the
    // stored checkpoint to the on-chain truth.
    if buffered.end_block > msg.end_block {
        info!(
            end_block = buffered.end_block,
            adjusted_end_block = msg.end_block,
            root = %msg.root_chain,
            "adjusting end block to the one accepted on chain"
        );
        buffered.end_block = msg.end_block;
        buffered.root_hash = msg.root_hash;
        buffered.proposer = msg.proposer;
    }

    k.add_checkpoint(msg.number, buffered, msg.root_chain).map_err(|err| {
        error!(%err, number = msg.number, "error while adding checkpoint into store");
        err
    })?;
    debug!(number = msg.number, root = %msg.root_chain, "checkpoint added to store");

    k.update_ack_count(msg.root_chain)?;
    k.flush_checkpoint_buffer(msg.root_chain)?;
    debug!(root = %msg.root_chain, "checkpoint buffer flushed after ack");

    // Acks on the stake chain rotate the proposer.
    if msg.root_chain == RootChainType::Stake {
        sk.increment_accum(1);
    }

    let ev = Event::new(EVENT_TYPE_CHECKPOINT_ACK)
        .attr(ATTR_KEY_ACTION, "checkpoint-ack")
        .attr(ATTR_KEY_MODULE, MODULE_NAME)
        .attr(ATTR_KEY_TX_HASH, ctx.tx_hash().to_string())
        .attr(ATTR_KEY_SIDE_TX_RESULT, side_result.as_str())
        .attr(ATTR_KEY_HEADER_INDEX, msg.number.to_string())
        .attr(ATTR_KEY_ROOT_CHAIN, msg.root_chain.as_str());
    ctx.events_mut().emit(ev);

    Ok(())
}

fn post_handle_checkpoint_sync<D: CheckpointStore>(
    ctx: &mut Context,
    k: &Keeper<D>,
    msg: &MsgCheckpointSync,
    side_result: SideTxResult,
) -> Result<(), CheckpointError> {
    if side_result != SideTxResult::Yes {
        debug!(
            root = %msg.root_chain,
            start_block = msg.start_block,
            end_block = msg.end_block,
            "skipping checkpoint sync, side tx did not get yes votes"
        );
        return Err(CheckpointError::BadBlockDetails);
    }

    // No continuity check: a sync mirrors state already accepted on the
    // root chain and validated in the side phase.
    if let Some(buffered) = k.get_checkpoint_sync_from_buffer(msg.root_chain)? {
        let expiry = k.buffer_expiry(&buffered);
        if !k.is_buffer_expired(&buffered, ctx.block_time()) {
            debug!(root = %msg.root_chain, expiry, "checkpoint sync already exists in buffer");
            return Err(CheckpointError::NoAck { expiry });
        }
    }

    k.set_checkpoint_sync_buffer(
        Checkpoint::new(
            msg.start_block,
            msg.end_block,
            Buf32::zero(),
            msg.proposer,
            String::new(),
            ctx.block_time(),
        ),
        msg.root_chain,
    )?;

    debug!(
        root = %msg.root_chain,
        start_block = msg.start_block,
        end_block = msg.end_block,
        number = msg.number,
        "new checkpoint sync stored into buffer"
    );

    let ev = Event::new(EVENT_TYPE_CHECKPOINT_SYNC)
        .attr(ATTR_KEY_ACTION, "checkpoint-sync")
        .attr(ATTR_KEY_MODULE, MODULE_NAME)
        .attr(ATTR_KEY_TX_HASH, ctx.tx_hash().to_string())
        .attr(ATTR_KEY_SIDE_TX_RESULT, side_result.as_str())
        .attr(ATTR_KEY_PROPOSER, msg.proposer.to_string())
        .attr(ATTR_KEY_START_BLOCK, msg.start_block.to_string())
        .attr(ATTR_KEY_END_BLOCK, msg.end_block.to_string())
        .attr(ATTR_KEY_ROOT_CHAIN, msg.root_chain.as_str())
        .attr(ATTR_KEY_HEADER_INDEX, msg.number.to_string());
    ctx.events_mut().emit(ev);

    Ok(())
}

fn post_handle_checkpoint_sync_ack<D: CheckpointStore>(
    ctx: &mut Context,
    k: &Keeper<D>,
    msg: &MsgCheckpointSyncAck,
    side_result: SideTxResult,
) -> Result<(), CheckpointError> {
    if side_result != SideTxResult::Yes {
        debug!(
            number = msg.number,
            root = %msg.root_chain,
            "skipping checkpoint sync ack, side tx did not get yes votes"
        );
        return Err(CheckpointError::BadBlockDetails);
    }

    k.flush_checkpoint_sync_buffer(msg.root_chain)?;
    debug!(root = %msg.root_chain, "checkpoint sync buffer flushed after ack");

    let ev = Event::new(EVENT_TYPE_CHECKPOINT_SYNC_ACK)
        .attr(ATTR_KEY_ACTION, "checkpoint-sync-ack")
        .attr(ATTR_KEY_MODULE, MODULE_NAME)
        .attr(ATTR_KEY_TX_HASH, ctx.tx_hash().to_string())
        .attr(ATTR_KEY_SIDE_TX_RESULT, side_result.as_str())
        .attr(ATTR_KEY_HEADER_INDEX, msg.number.to_string())
        .attr(ATTR_KEY_ROOT_CHAIN, msg.root_chain.as_str());
    ctx.events_mut().emit(ev);

    Ok(())
}

#[cfg(test)]
mod tests {
    use causeway_primitives::buf::{Buf20, Buf32};

    use super::*;
    use crate::events::ATTR_KEY_ACTION as ACTION;
    use crate::msgs::MsgCheckpointSyncAck as SyncAck;
    use crate::test_utils::*;

    const ETH: RootChainType = RootChainType::Eth;

    /// Drives a full propose+ack cycle so later tests start from a committed
    /// tip.
    fn commit(h: &TestHarness, root: RootChainType, number: u64, start: u64, end: u64) {
        let msg = CheckpointMsg::Checkpoint(h.msg_checkpoint(root, start, end));
        h.post(&msg, SideTxResult::Yes).unwrap();
        let ack = CheckpointMsg::CheckpointAck(h.msg_ack(root, number, start, end));
        h.post(&ack, SideTxResult::Yes).unwrap();
    }

    #[test]
    fn test_checkpoint_buffer_insertion() {
        let h = TestHarness::new();
        let msg = h.msg_checkpoint(ETH, 100, 199);

        let events = h
            .post(&CheckpointMsg::Checkpoint(msg.clone()), SideTxResult::Yes)
            .unwrap();

        let buffered = h.keeper.get_checkpoint_from_buffer(ETH).unwrap().unwrap();
        assert_eq!(buffered.start_block, 100);
        assert_eq!(buffered.end_block, 199);
        assert_eq!(buffered.root_hash, msg.root_hash);
        assert_eq!(buffered.timestamp, h.now);

        assert_eq!(events.len(), 1);
        let ev = &events[0];
        assert_eq!(ev.ty, EVENT_TYPE_CHECKPOINT);
        assert_eq!(ev.get(ACTION), Some("checkpoint"));
        assert_eq!(ev.get(ATTR_KEY_START_BLOCK), Some("100"));
        assert_eq!(ev.get(ATTR_KEY_END_BLOCK), Some("199"));
        assert_eq!(ev.get(ATTR_KEY_ROOT_CHAIN), Some("eth"));
        assert_eq!(ev.get(ATTR_KEY_SIDE_TX_RESULT), Some("yes"));
        assert_eq!(
            ev.get(ATTR_KEY_ACCOUNT_HASH),
            Some(msg.account_root_hash.to_string().as_str())
        );
    }

    #[test]
    fn test_checkpoint_duplicate_blocked_until_expiry() {
        let mut h = TestHarness::new();
        let msg = CheckpointMsg::Checkpoint(h.msg_checkpoint(ETH, 100, 199));
        h.post(&msg, SideTxResult::Yes).unwrap();

        let ttl = h.keeper.params().checkpoint_buffer_time.as_secs();
        let res = h.post(&msg, SideTxResult::Yes);
        match res {
            Err(CheckpointError::NoAck { expiry }) => assert_eq!(expiry, h.now + ttl),
            other => panic!("expected NoAck, got {other:?}"),
        }

        // the original entry is untouched
        let buffered = h.keeper.get_checkpoint_from_buffer(ETH).unwrap().unwrap();
        assert_eq!(buffered.timestamp, h.now);

        // past expiry the slot opens up again
        h.now += ttl;
        h.post(&msg, SideTxResult::Yes).unwrap();
        let buffered = h.keeper.get_checkpoint_from_buffer(ETH).unwrap().unwrap();
        assert_eq!(buffered.timestamp, h.now);
    }

    #[test]
    fn test_checkpoint_gap_is_discontinuous() {
        let h = TestHarness::new();
        commit(&h, ETH, 1, 100, 199);

        let msg = CheckpointMsg::Checkpoint(h.msg_checkpoint(ETH, 210, 300));
        let res = h.post(&msg, SideTxResult::Yes);
        assert!(matches!(res, Err(CheckpointError::DiscontinuousCheckpoint)));
    }

    #[test]
    fn test_checkpoint_overlap_is_old() {
        let h = TestHarness::new();
        commit(&h, ETH, 1, 100, 199);

        let msg = CheckpointMsg::Checkpoint(h.msg_checkpoint(ETH, 150, 250));
        let res = h.post(&msg, SideTxResult::Yes);
        assert!(matches!(res, Err(CheckpointError::OldCheckpoint)));
    }

    #[test]
    fn test_first_checkpoint_must_start_at_activation() {
        let h = TestHarness::new();
        let msg = CheckpointMsg::Checkpoint(h.msg_checkpoint(ETH, 101, 199));
        let res = h.post(&msg, SideTxResult::Yes);
        assert!(matches!(res, Err(CheckpointError::BadBlockDetails)));
        assert!(h.keeper.get_checkpoint_from_buffer(ETH).unwrap().is_none());
    }

    #[test]
    fn test_ack_commits_and_flushes() {
        let h = TestHarness::new();
        let msg = CheckpointMsg::Checkpoint(h.msg_checkpoint(ETH, 100, 199));
        h.post(&msg, SideTxResult::Yes).unwrap();

        let ack = h.msg_ack(ETH, 1, 100, 199);
        let events = h
            .post(&CheckpointMsg::CheckpointAck(ack), SideTxResult::Yes)
            .unwrap();

        let committed = h.keeper.get_checkpoint(ETH, 1).unwrap();
        assert_eq!(committed.start_block, 100);
        assert_eq!(committed.end_block, 199);

        assert!(h.keeper.get_checkpoint_from_buffer(ETH).unwrap().is_none());
        assert_eq!(h.keeper.get_ack_count(ETH).unwrap(), 1);
        assert_eq!(h.staking.increments(), 0);

        let ev = &events[0];
        assert_eq!(ev.ty, EVENT_TYPE_CHECKPOINT_ACK);
        assert_eq!(ev.get(ATTR_KEY_HEADER_INDEX), Some("1"));
        assert_eq!(ev.get(ATTR_KEY_ROOT_CHAIN), Some("eth"));
    }

    #[test]
    fn test_ack_trims_to_on_chain_interval() {
        let h = TestHarness::new();
        let msg = CheckpointMsg::Checkpoint(h.msg_checkpoint(ETH, 100, 199));
        h.post(&msg, SideTxResult::Yes).unwrap();

        let mut ack = h.msg_ack(ETH, 1, 100, 150);
        ack.root_hash = Buf32::from([9u8; 32]);
        ack.proposer = Buf20::from([8u8; 20]);
        h.post(&CheckpointMsg::CheckpointAck(ack.clone()), SideTxResult::Yes)
            .unwrap();

        let committed = h.keeper.get_checkpoint(ETH, 1).unwrap();
        assert_eq!(committed.end_block, 150);
        assert_eq!(committed.root_hash, ack.root_hash);
        assert_eq!(committed.proposer, ack.proposer);
    }

    #[test]
    fn test_ack_without_buffer_is_bad() {
        let h = TestHarness::new();
        let ack = CheckpointMsg::CheckpointAck(h.msg_ack(ETH, 1, 100, 199));
        let res = h.post(&ack, SideTxResult::Yes);
        assert!(matches!(res, Err(CheckpointError::BadAck)));
    }

    #[test]
    fn test_ack_start_mismatch_is_bad() {
        let h = TestHarness::new();
        let msg = CheckpointMsg::Checkpoint(h.msg_checkpoint(ETH, 100, 199));
        h.post(&msg, SideTxResult::Yes).unwrap();

        let ack = CheckpointMsg::CheckpointAck(h.msg_ack(ETH, 1, 120, 199));
        let res = h.post(&ack, SideTxResult::Yes);
        assert!(matches!(res, Err(CheckpointError::BadAck)));

        // nothing committed, buffer untouched
        assert!(h.keeper.get_checkpoint(ETH, 1).is_err());
        assert!(h.keeper.get_checkpoint_from_buffer(ETH).unwrap().is_some());
    }

    #[test]
    fn test_ack_exact_interval_root_mismatch_is_bad() {
        // start and end both match the buffer but the root differs: that is a
        // contradiction, not a trim.
        let h = TestHarness::new();
        let msg = CheckpointMsg::Checkpoint(h.msg_checkpoint(ETH, 100, 199));
        h.post(&msg, SideTxResult::Yes).unwrap();

        let mut ack = h.msg_ack(ETH, 1, 100, 199);
        ack.root_hash = Buf32::from([9u8; 32]);
        let res = h.post(&CheckpointMsg::CheckpointAck(ack), SideTxResult::Yes);
        assert!(matches!(res, Err(CheckpointError::BadAck)));
        assert_eq!(h.keeper.get_ack_count(ETH).unwrap(), 0);
    }

    #[test]
    fn test_stake_ack_rotates_proposer_once() {
        let h = TestHarness::new();
        commit(&h, RootChainType::Stake, 1, 100, 199);
        assert_eq!(h.staking.increments(), 1);

        // non-stake acks leave the accumulator alone
        commit(&h, ETH, 1, 100, 199);
        assert_eq!(h.staking.increments(), 1);
    }

    #[test]
    fn test_unapproved_side_tx_writes_nothing() {
        let h = TestHarness::new();
        for side in [SideTxResult::No, SideTxResult::Skip] {
            let msg = CheckpointMsg::Checkpoint(h.msg_checkpoint(ETH, 100, 199));
            let res = h.post(&msg, side);
            assert!(matches!(res, Err(CheckpointError::BadBlockDetails)));
            assert!(h.keeper.get_checkpoint_from_buffer(ETH).unwrap().is_none());
        }
    }

    #[test]
    fn test_sync_buffers_without_continuity_check() {
        let h = TestHarness::new();
        commit(&h, RootChainType::Bsc, 1, 100, 199);

        // interval unrelated to the committed tip; syncs mirror external truth
        let msg = CheckpointMsg::CheckpointSync(crate::msgs::MsgCheckpointSync {
            number: 7,
            proposer: Buf20::from(TEST_PROPOSER),
            start_block: 555,
            end_block: 600,
            root_chain: RootChainType::Bsc,
        });
        let events = h.post(&msg, SideTxResult::Yes).unwrap();

        let buffered = h
            .keeper
            .get_checkpoint_sync_from_buffer(RootChainType::Bsc)
            .unwrap()
            .unwrap();
        assert_eq!(buffered.start_block, 555);
        assert_eq!(buffered.root_hash, Buf32::zero());

        assert_eq!(events[0].ty, EVENT_TYPE_CHECKPOINT_SYNC);
        assert_eq!(events[0].get(ATTR_KEY_HEADER_INDEX), Some("7"));

        // second sync for the tag is blocked while the first is live
        let res = h.post(&msg, SideTxResult::Yes);
        assert!(matches!(res, Err(CheckpointError::NoAck { .. })));
    }

    #[test]
    fn test_raw_unknown_kind_is_unknown_request() {
        let h = TestHarness::new();
        let mut ctx = h.ctx();
        let res = post_tx_handler_raw(
            &mut ctx,
            &h.keeper,
            &h.chain,
            &h.staking,
            "bank-send",
            &[],
            SideTxResult::Yes,
        );
        assert!(matches!(res, Err(CheckpointError::UnknownRequest)));
    }

    #[test]
    fn test_sync_ack_flushes_buffer() {
        let h = TestHarness::new();
        let msg = CheckpointMsg::CheckpointSync(crate::msgs::MsgCheckpointSync {
            number: 7,
            proposer: Buf20::from(TEST_PROPOSER),
            start_block: 100,
            end_block: 199,
            root_chain: ETH,
        });
        h.post(&msg, SideTxResult::Yes).unwrap();

        let ack = CheckpointMsg::CheckpointSyncAck(SyncAck {
            number: 7,
            root_chain: ETH,
        });
        let events = h.post(&ack, SideTxResult::Yes).unwrap();

        assert!(h.keeper.get_checkpoint_sync_from_buffer(ETH).unwrap().is_none());
        assert_eq!(events[0].ty, EVENT_TYPE_CHECKPOINT_SYNC_ACK);
    }
}
