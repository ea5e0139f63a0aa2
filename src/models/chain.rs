//! Chain link and record types.

use crate::error::ChainError;
use crate::models::InvoiceRecordPayload;
use serde::{Deserialize, Serialize};

/// Previous-hash sentinel for the first record of a chain: 64 ASCII zeros,
/// the hex form of an all-zero SHA-256 digest. Frozen once deployed.
pub const SEED_HASH: &str = "0000000000000000000000000000000000000000000000000000000000000000";

/// One link of a tenant's hash chain, created exactly once per invoice event.
///
/// `previous_hash` equals [`SEED_HASH`] only for the first record of a chain;
/// every later record's `previous_hash` equals the prior record's
/// `payload_hash`. Links are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainLink {
    pub payload_hash: String,
    pub previous_hash: String,
}

/// A payload together with its stored digest, as persisted append-only and
/// re-read by the audit/export workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainRecord {
    pub payload: InvoiceRecordPayload,
    pub stored_hash: String,
}

/// Outcome of replaying a stored chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainVerification {
    Valid,
    /// Index of the first record whose recomputed hash diverges from the
    /// stored one.
    BrokenAt(usize),
}

impl ChainVerification {
    pub fn is_valid(&self) -> bool {
        matches!(self, ChainVerification::Valid)
    }

    /// Map a broken chain to [`ChainError::ChainIntegrityViolation`].
    pub fn into_result(self) -> Result<(), ChainError> {
        match self {
            ChainVerification::Valid => Ok(()),
            ChainVerification::BrokenAt(index) => {
                Err(ChainError::ChainIntegrityViolation { index })
            }
        }
    }
}
