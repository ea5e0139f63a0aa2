//! Error types for verifactu-chain.
//!
//! None of these errors is transient: retrying with the same input never helps.
//! `ChainIntegrityViolation` in particular is a compliance incident that requires
//! human investigation, never silent recovery.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChainError {
    /// Invoice facts are missing or malformed and no payload can be built.
    #[error("Invalid payload input: {0}")]
    InvalidPayloadInput(String),

    /// The payload could not be canonically serialized for hashing.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// A stored record's hash does not match the recomputed chain value.
    #[error("Chain integrity violation at record {index}")]
    ChainIntegrityViolation { index: usize },

    /// The backing chain store failed to read or append a record.
    #[error("Store error: {0}")]
    StoreError(#[from] anyhow::Error),

    /// Producer identity configuration could not be loaded.
    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<config::ConfigError> for ChainError {
    fn from(err: config::ConfigError) -> Self {
        ChainError::ConfigError(anyhow::Error::new(err))
    }
}
