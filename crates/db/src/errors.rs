use causeway_primitives::root_chain::RootChainType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("tried to insert into {0} committed log out-of-order number {1}")]
    OooInsert(RootChainType, u64),

    #[error("codec: {0}")]
    Codec(#[from] borsh::io::Error),

    #[error("{0}")]
    Other(String),
}
