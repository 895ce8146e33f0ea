// Reexports from elsewhere in the crate.

pub use crate::buf::{Buf20, Buf32};
pub use crate::checkpoint::Checkpoint;
pub use crate::params::{ChainParams, CheckpointParams};
pub use crate::root_chain::RootChainType;
