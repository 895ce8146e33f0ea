//! Side-phase validators.
//!
//! Each validator checks a message against external truth and answers with a
//! vote. Nothing here writes persistent state, and every oracle failure is a
//! `No` vote: a validator that cannot see the root chain must not wave a
//! checkpoint through.

use tracing::*;

use causeway_db::traits::CheckpointStore;
use causeway_primitives::root_chain::RootChainType;

use crate::chain_keeper::ChainKeeper;
use crate::context::Context;
use crate::contract::{ContractCaller, HeaderInfo};
use crate::errors::CheckpointError;
use crate::keeper::Keeper;
use crate::msgs::{
    CheckpointMsg, MsgCheckpoint, MsgCheckpointAck, MsgCheckpointSync, MsgCheckpointSyncAck,
};
use crate::vote::SideTxResponse;

/// Routes a message through its side validator and turns the outcome into a
/// vote. Installs a fresh event scope on the context; side validators emit
/// nothing, so the scope stays empty.
pub fn side_tx_handler<D: CheckpointStore>(
    ctx: &mut Context,
    k: &Keeper<D>,
    ck: &impl ChainKeeper,
    caller: &impl ContractCaller,
    msg: &CheckpointMsg,
) -> SideTxResponse {
    ctx.reset_events();

    let res = match msg {
        CheckpointMsg::Checkpoint(m) => side_handle_checkpoint(k, caller, m),
        CheckpointMsg::CheckpointAck(m) => side_handle_checkpoint_ack(k, ck, caller, m),
        CheckpointMsg::CheckpointSync(m) => side_handle_checkpoint_sync(k, ck, caller, m),
        CheckpointMsg::CheckpointSyncAck(m) => side_handle_checkpoint_sync_ack(ck, caller, m),
    };

    match res {
        Ok(()) => SideTxResponse::yes(),
        Err(err) => SideTxResponse::no(&err),
    }
}

/// Raw entry point for consensus: decodes the wire form first. A kind this
/// module does not route is a `No` vote.
pub fn side_tx_handler_raw<D: CheckpointStore>(
    ctx: &mut Context,
    k: &Keeper<D>,
    ck: &impl ChainKeeper,
    caller: &impl ContractCaller,
    kind: &str,
    body: &[u8],
) -> SideTxResponse {
    // Fresh scope regardless of whether the message decodes.
    ctx.reset_events();

    match CheckpointMsg::decode(kind, body) {
        Ok(msg) => side_tx_handler(ctx, k, ck, caller, &msg),
        Err(err) => {
            warn!(kind, "failed to decode side tx message");
            SideTxResponse::no(&err)
        }
    }
}

fn side_handle_checkpoint<D: CheckpointStore>(
    k: &Keeper<D>,
    caller: &impl ContractCaller,
    msg: &MsgCheckpoint,
) -> Result<(), CheckpointError> {
    let params = k.params();

    match caller.validate_checkpoint(
        msg.start_block,
        msg.end_block,
        msg.root_hash,
        params.max_checkpoint_length,
    ) {
        Ok(true) => return Ok(()),
        Ok(false) => {}
        Err(err) => {
            error!(
                %err,
                start_block = msg.start_block,
                end_block = msg.end_block,
                "error validating checkpoint"
            );
        }
    }

    error!(
        start_block = msg.start_block,
        end_block = msg.end_block,
        root_hash = %msg.root_hash,
        "root hash is not valid"
    );

    Err(CheckpointError::InvalidBlockInput)
}

fn side_handle_checkpoint_ack<D: CheckpointStore>(
    k: &Keeper<D>,
    ck: &impl ChainKeeper,
    caller: &impl ContractCaller,
    msg: &MsgCheckpointAck,
) -> Result<(), CheckpointError> {
    debug!(
        root = %msg.root_chain,
        start_block = msg.start_block,
        end_block = msg.end_block,
        number = msg.number,
        "validating external call for checkpoint ack"
    );

    let header = fetch_header_info(k, ck, caller, msg.root_chain, msg.number)?;

    // The ack must agree with the contract on every field.
    if msg.start_block != header.start_block
        || msg.end_block != header.end_block
        || msg.proposer != header.proposer
        || msg.root_hash != header.root_hash
    {
        error!(
            root = %msg.root_chain,
            number = msg.number,
            "ack does not match contract state"
        );
        return Err(CheckpointError::InvalidAck);
    }

    Ok(())
}

fn side_handle_checkpoint_sync<D: CheckpointStore>(
    k: &Keeper<D>,
    ck: &impl ChainKeeper,
    caller: &impl ContractCaller,
    msg: &MsgCheckpointSync,
) -> Result<(), CheckpointError> {
    debug!(
        root = %msg.root_chain,
        number = msg.number,
        "validating external call for checkpoint sync"
    );

    let header = fetch_header_info(k, ck, caller, msg.root_chain, msg.number)?;

    // A sync confirms interval ownership; the root hash is not compared.
    if msg.start_block != header.start_block
        || msg.end_block != header.end_block
        || msg.proposer != header.proposer
    {
        error!(
            root = %msg.root_chain,
            number = msg.number,
            "checkpoint sync does not match contract state"
        );
        return Err(CheckpointError::InvalidAck);
    }

    Ok(())
}

fn side_handle_checkpoint_sync_ack(
    ck: &impl ChainKeeper,
    caller: &impl ContractCaller,
    msg: &MsgCheckpointSyncAck,
) -> Result<(), CheckpointError> {
    debug!(
        root = %msg.root_chain,
        number = msg.number,
        "validating external call for checkpoint sync ack"
    );

    let chain_params = ck.chain_params();
    let current = caller
        .get_synced_checkpoint_id(chain_params.tron_staking_manager_address, msg.root_chain)
        .map_err(|err| {
            error!(%err, number = msg.number, "unable to fetch synced checkpoint id");
            CheckpointError::InvalidAck
        })?;

    if msg.number > current {
        error!(
            number = msg.number,
            current, "sync ack is ahead of the staking manager"
        );
        return Err(CheckpointError::InvalidAck);
    }

    Ok(())
}

/// Resolves the contract address for a tag and reads header block `number`
/// from it. All the per-root branching sits here; Tron takes its own reader
/// because its address encoding differs from the EVM chains.
fn fetch_header_info<D: CheckpointStore>(
    k: &Keeper<D>,
    ck: &impl ChainKeeper,
    caller: &impl ContractCaller,
    root: RootChainType,
    number: u64,
) -> Result<HeaderInfo, CheckpointError> {
    let params = k.params();

    let address = match root {
        RootChainType::Eth => ck.chain_params().root_chain_address,
        RootChainType::Bsc => {
            let bsc = ck.root_chain_params(root).map_err(|_| {
                error!(%root, "no chain params configured for root");
                CheckpointError::WrongRootChainType
            })?;
            bsc.root_chain_address
        }
        RootChainType::Tron => {
            return caller
                .get_tron_header_info(
                    number,
                    ck.chain_params().tron_chain_address,
                    params.child_block_interval,
                )
                .map_err(|err| {
                    error!(%err, number, "unable to fetch checkpoint from tron");
                    CheckpointError::InvalidAck
                });
        }
        RootChainType::Stake => {
            error!(%root, "root chain has no checkpoint contract");
            return Err(CheckpointError::WrongRootChainType);
        }
    };

    let instance = caller.get_root_chain_instance(address, root).map_err(|err| {
        error!(%err, %root, "unable to fetch root chain contract instance");
        CheckpointError::InvalidAck
    })?;

    caller
        .get_header_info(number, &instance, params.child_block_interval)
        .map_err(|err| {
            error!(%err, %root, number, "unable to fetch checkpoint from root chain");
            CheckpointError::InvalidAck
        })
}
