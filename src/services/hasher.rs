//! Chain link digest computation.

use crate::error::ChainError;
use crate::models::InvoiceRecordPayload;
use crate::services::canonical::canonical_serialize;
use sha2::{Digest, Sha256};

/// Compute the digest of one chain link.
///
/// `digest = SHA-256(canonical_serialize(payload) || previous_hash)`, hex
/// encoded. `previous_hash` is the prior record's digest, or
/// [`crate::models::SEED_HASH`] for the first record of a chain.
pub fn calculate_hash(
    payload: &InvoiceRecordPayload,
    previous_hash: &str,
) -> Result<String, ChainError> {
    let canonical = canonical_serialize(payload)?;

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hasher.update(previous_hash.as_bytes());

    Ok(hex::encode(hasher.finalize()))
}
