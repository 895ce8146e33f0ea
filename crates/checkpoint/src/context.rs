//! Per-message execution context.

use causeway_primitives::buf::Buf32;
use causeway_primitives::hash;

use crate::events::EventManager;

/// What a handler may observe about the block it executes in: the bridge
/// block-time and the raw transaction bytes. Post handlers must derive any
/// time from here; wall clocks would diverge across validators.
#[derive(Debug)]
pub struct Context {
    block_time: u64,
    tx_bytes: Vec<u8>,
    events: EventManager,
}

impl Context {
    pub fn new(block_time: u64, tx_bytes: Vec<u8>) -> Self {
        Self {
            block_time,
            tx_bytes,
            events: EventManager::new(),
        }
    }

    /// Bridge block-time, unix seconds.
    pub fn block_time(&self) -> u64 {
        self.block_time
    }

    /// Hash of the raw transaction, used as the `tx-hash` event attribute.
    pub fn tx_hash(&self) -> Buf32 {
        hash::raw(&self.tx_bytes)
    }

    pub fn events(&self) -> &EventManager {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut EventManager {
        &mut self.events
    }

    /// Installs a fresh accumulator scope, discarding anything a previous
    /// dispatch left behind.
    pub fn reset_events(&mut self) {
        self.events = EventManager::new();
    }

    pub fn take_events(&mut self) -> Vec<crate::events::Event> {
        self.events.take()
    }
}
