//! Chain verification for audit and regulatory export workflows.

use crate::models::{ChainRecord, ChainVerification, SEED_HASH};
use crate::services::hasher::calculate_hash;
use crate::services::metrics::CHAIN_VERIFICATIONS_TOTAL;
use tracing::{instrument, warn};

/// Replay an ordered chain, oldest record first, and recompute every link.
///
/// The first record is verified against [`SEED_HASH`]. Returns
/// [`ChainVerification::BrokenAt`] with the first index whose recomputed hash
/// diverges from the stored one; a payload that no longer serializes
/// canonically counts as broken at its own index. Read-only, safe to run in
/// parallel across independent chains.
#[instrument(skip(records), fields(record_count = records.len()))]
pub fn verify_chain(records: &[ChainRecord]) -> ChainVerification {
    let mut previous_hash = SEED_HASH;

    for (index, record) in records.iter().enumerate() {
        let recomputed = match calculate_hash(&record.payload, previous_hash) {
            Ok(digest) => digest,
            Err(err) => {
                warn!(index = index, error = %err, "Record payload is not canonicalizable");
                CHAIN_VERIFICATIONS_TOTAL.with_label_values(&["broken"]).inc();
                return ChainVerification::BrokenAt(index);
            }
        };

        if recomputed != record.stored_hash {
            warn!(
                index = index,
                invoice_number = %record.payload.invoice_number,
                "Stored hash diverges from recomputed chain value"
            );
            CHAIN_VERIFICATIONS_TOTAL.with_label_values(&["broken"]).inc();
            return ChainVerification::BrokenAt(index);
        }

        previous_hash = &record.stored_hash;
    }

    CHAIN_VERIFICATIONS_TOTAL.with_label_values(&["valid"]).inc();
    ChainVerification::Valid
}
