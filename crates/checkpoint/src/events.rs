//! Typed attribute events emitted by the post handlers.
//!
//! Consumers parse by attribute key; attribute order is not part of the
//! contract.

/// Module name attached to every event.
pub const MODULE_NAME: &str = "checkpoint";

pub const EVENT_TYPE_CHECKPOINT: &str = "checkpoint";
pub const EVENT_TYPE_CHECKPOINT_ACK: &str = "checkpoint-ack";
pub const EVENT_TYPE_CHECKPOINT_SYNC: &str = "checkpoint-sync";
pub const EVENT_TYPE_CHECKPOINT_SYNC_ACK: &str = "checkpoint-sync-ack";

pub const ATTR_KEY_ACTION: &str = "action";
pub const ATTR_KEY_MODULE: &str = "module";
pub const ATTR_KEY_TX_HASH: &str = "tx-hash";
pub const ATTR_KEY_SIDE_TX_RESULT: &str = "side-tx-result";
pub const ATTR_KEY_PROPOSER: &str = "proposer";
pub const ATTR_KEY_START_BLOCK: &str = "start-block";
pub const ATTR_KEY_END_BLOCK: &str = "end-block";
pub const ATTR_KEY_ROOT_HASH: &str = "root-hash";
pub const ATTR_KEY_ACCOUNT_HASH: &str = "account-hash";
pub const ATTR_KEY_ROOT_CHAIN: &str = "root-chain";
pub const ATTR_KEY_HEADER_INDEX: &str = "header-index";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Attribute {
    pub key: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Event {
    pub ty: &'static str,
    pub attributes: Vec<Attribute>,
}

impl Event {
    pub fn new(ty: &'static str) -> Self {
        Self {
            ty,
            attributes: Vec::new(),
        }
    }

    pub fn attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute {
            key,
            value: value.into(),
        });
        self
    }

    /// Looks an attribute up by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }
}

/// Per-message event accumulator. A fresh scope is installed for every
/// dispatch, so a handler that fails leaves nothing behind.
#[derive(Default, Debug)]
pub struct EventManager {
    events: Vec<Event>,
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, ev: Event) {
        self.events.push(ev);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn take(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}
