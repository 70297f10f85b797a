//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FundamentalsError {
    #[error("IO/{0}")]
    Io(#[from] std::io::Error),

    #[error("CONFIG/{0}")]
    Config(String),

    #[error("SERIALIZE/{0}")]
    Serialize(String),
}

pub type FundamentalsResult<T> = Result<T, FundamentalsError>;
