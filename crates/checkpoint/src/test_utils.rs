//! Test support: an in-memory harness wiring the keeper, chain params,
//! staking counter and a scriptable oracle together.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;

use causeway_db::stubs::StubCheckpointDb;
use causeway_primitives::buf::{Buf20, Buf32};
use causeway_primitives::params::{ChainParams, CheckpointParams};
use causeway_primitives::root_chain::RootChainType;

use crate::chain_keeper::{ChainKeeper, StakingKeeper};
use crate::context::Context;
use crate::contract::{ContractCallError, ContractCaller, HeaderInfo, RootChainInstance};
use crate::errors::CheckpointError;
use crate::events::Event;
use crate::keeper::Keeper;
use crate::msgs::{CheckpointMsg, MsgCheckpoint, MsgCheckpointAck};
use crate::post_handler::post_tx_handler;
use crate::side_handler::side_tx_handler;
use crate::vote::{SideTxResponse, SideTxResult};

/// Scriptable [`ContractCaller`]: tests stage header records and toggles,
/// the handlers read them back.
#[derive(Default)]
pub struct MockContractCaller {
    valid_checkpoint: Mutex<bool>,
    headers: Mutex<BTreeMap<u64, HeaderInfo>>,
    tron_headers: Mutex<BTreeMap<u64, HeaderInfo>>,
    synced_id: Mutex<u64>,
    child_block: Mutex<u64>,
    fail: Mutex<bool>,
}

impl MockContractCaller {
    pub fn new() -> Self {
        let mock = Self::default();
        *mock.valid_checkpoint.lock() = true;
        mock
    }

    pub fn set_valid_checkpoint(&self, valid: bool) {
        *self.valid_checkpoint.lock() = valid;
    }

    pub fn put_header(&self, number: u64, header: HeaderInfo) {
        self.headers.lock().insert(number, header);
    }

    pub fn put_tron_header(&self, number: u64, header: HeaderInfo) {
        self.tron_headers.lock().insert(number, header);
    }

    pub fn set_synced_checkpoint_id(&self, id: u64) {
        *self.synced_id.lock() = id;
    }

    pub fn set_current_child_block(&self, height: u64) {
        *self.child_block.lock() = height;
    }

    /// Makes every subsequent call fail with a transport error.
    pub fn fail_next_calls(&self) {
        *self.fail.lock() = true;
    }

    fn check_transport(&self) -> Result<(), ContractCallError> {
        if *self.fail.lock() {
            Err(ContractCallError::Transport("connection refused".to_owned()))
        } else {
            Ok(())
        }
    }
}

impl ContractCaller for MockContractCaller {
    fn validate_checkpoint(
        &self,
        start: u64,
        end: u64,
        _root_hash: Buf32,
        max_checkpoint_length: u64,
    ) -> Result<bool, ContractCallError> {
        self.check_transport()?;
        if end < start || end - start + 1 > max_checkpoint_length {
            return Ok(false);
        }
        Ok(*self.valid_checkpoint.lock())
    }

    fn get_root_chain_instance(
        &self,
        address: Buf20,
        root: RootChainType,
    ) -> Result<RootChainInstance, ContractCallError> {
        self.check_transport()?;
        Ok(RootChainInstance::new(address, root))
    }

    fn get_header_info(
        &self,
        number: u64,
        _instance: &RootChainInstance,
        _child_block_interval: u64,
    ) -> Result<HeaderInfo, ContractCallError> {
        self.check_transport()?;
        self.headers
            .lock()
            .get(&number)
            .cloned()
            .ok_or(ContractCallError::HeaderNotFound(number))
    }

    fn get_tron_header_info(
        &self,
        number: u64,
        _tron_address: Buf20,
        _child_block_interval: u64,
    ) -> Result<HeaderInfo, ContractCallError> {
        self.check_transport()?;
        self.tron_headers
            .lock()
            .get(&number)
            .cloned()
            .ok_or(ContractCallError::HeaderNotFound(number))
    }

    fn get_synced_checkpoint_id(
        &self,
        _staking_manager: Buf20,
        _root: RootChainType,
    ) -> Result<u64, ContractCallError> {
        self.check_transport()?;
        Ok(*self.synced_id.lock())
    }

    fn current_child_block(&self) -> Result<u64, ContractCallError> {
        self.check_transport()?;
        Ok(*self.child_block.lock())
    }
}

/// [`ChainKeeper`] over plain maps.
pub struct MemChainKeeper {
    pub params: ChainParams,
    pub per_root: BTreeMap<RootChainType, ChainParams>,
    pub activations: BTreeMap<RootChainType, u64>,
}

impl ChainKeeper for MemChainKeeper {
    fn chain_params(&self) -> ChainParams {
        self.params.clone()
    }

    fn root_chain_params(&self, root: RootChainType) -> Result<ChainParams, CheckpointError> {
        self.per_root
            .get(&root)
            .cloned()
            .ok_or(CheckpointError::WrongRootChainType)
    }

    fn chain_activation_height(&self, root: RootChainType) -> u64 {
        self.activations.get(&root).copied().unwrap_or(0)
    }
}

/// [`StakingKeeper`] that records rotations.
#[derive(Default)]
pub struct CountingStakingKeeper {
    accum: Mutex<u64>,
}

impl CountingStakingKeeper {
    pub fn increments(&self) -> u64 {
        *self.accum.lock()
    }
}

impl StakingKeeper for CountingStakingKeeper {
    fn increment_accum(&self, times: u64) {
        *self.accum.lock() += times;
    }
}

pub const TEST_PROPOSER: [u8; 20] = [2u8; 20];
pub const TEST_ROOT_HASH: [u8; 32] = [5u8; 32];
pub const TEST_ACTIVATION_HEIGHT: u64 = 100;

/// Everything a handler test needs, wired together.
pub struct TestHarness {
    pub keeper: Keeper<StubCheckpointDb>,
    pub chain: MemChainKeeper,
    pub staking: CountingStakingKeeper,
    pub caller: MockContractCaller,

    /// Bridge block-time the next dispatched message executes at.
    pub now: u64,
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHarness {
    pub fn new() -> Self {
        let params = ChainParams {
            root_chain_address: Buf20::from([1u8; 20]),
            tron_chain_address: Buf20::from([11u8; 20]),
            tron_staking_manager_address: Buf20::from([12u8; 20]),
            activation_height: TEST_ACTIVATION_HEIGHT,
        };

        let mut per_root = BTreeMap::new();
        per_root.insert(
            RootChainType::Bsc,
            ChainParams {
                root_chain_address: Buf20::from([4u8; 20]),
                ..params.clone()
            },
        );

        let activations = RootChainType::ALL
            .into_iter()
            .map(|root| (root, TEST_ACTIVATION_HEIGHT))
            .collect();

        Self {
            keeper: Keeper::new(Arc::new(StubCheckpointDb::new()), CheckpointParams::default()),
            chain: MemChainKeeper {
                params,
                per_root,
                activations,
            },
            staking: CountingStakingKeeper::default(),
            caller: MockContractCaller::new(),
            now: 50_000,
        }
    }

    pub fn ctx(&self) -> Context {
        Context::new(self.now, b"raw-tx-bytes".to_vec())
    }

    pub fn side(&self, msg: &CheckpointMsg) -> SideTxResponse {
        let mut ctx = self.ctx();
        side_tx_handler(&mut ctx, &self.keeper, &self.chain, &self.caller, msg)
    }

    pub fn post(
        &self,
        msg: &CheckpointMsg,
        side_result: SideTxResult,
    ) -> Result<Vec<Event>, CheckpointError> {
        let mut ctx = self.ctx();
        post_tx_handler(&mut ctx, &self.keeper, &self.chain, &self.staking, msg, side_result)
    }

    pub fn msg_checkpoint(&self, root: RootChainType, start: u64, end: u64) -> MsgCheckpoint {
        MsgCheckpoint {
            proposer: Buf20::from(TEST_PROPOSER),
            start_block: start,
            end_block: end,
            root_hash: Buf32::from(TEST_ROOT_HASH),
            account_root_hash: Buf32::from([6u8; 32]),
            bor_chain_id: "15001".to_owned(),
            root_chain: root,
        }
    }

    pub fn msg_ack(
        &self,
        root: RootChainType,
        number: u64,
        start: u64,
        end: u64,
    ) -> MsgCheckpointAck {
        MsgCheckpointAck {
            number,
            proposer: Buf20::from(TEST_PROPOSER),
            start_block: start,
            end_block: end,
            root_hash: Buf32::from(TEST_ROOT_HASH),
            root_chain: root,
        }
    }
}

/// Header record shorthand for staging the mock oracle.
pub fn header(start: u64, end: u64, root_hash: Buf32, proposer: Buf20) -> HeaderInfo {
    HeaderInfo {
        root_hash,
        start_block: start,
        end_block: end,
        created_at: 0,
        proposer,
    }
}
