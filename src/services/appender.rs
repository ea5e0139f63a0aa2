//! Serialized append discipline for per-tenant chains.

use crate::error::ChainError;
use crate::models::{ChainLink, ChainRecord, ChainVerification, EventType, InvoiceFacts, SEED_HASH};
use crate::services::builder::PayloadBuilder;
use crate::services::hasher::calculate_hash;
use crate::services::metrics::CHAIN_RECORDS_TOTAL;
use crate::services::store::ChainStore;
use crate::services::verifier::verify_chain;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, instrument};
use uuid::Uuid;

/// Appends chain records with single-writer-per-chain discipline.
///
/// Two concurrent issuance events for the same tenant must never both read the
/// same latest hash and append divergent branches, so every read-latest /
/// build / hash / append cycle runs under that tenant's mutex. Appends to
/// different tenants proceed in parallel.
pub struct ChainAppender<S: ChainStore> {
    builder: PayloadBuilder,
    store: S,
    chain_locks: DashMap<Uuid, Arc<Mutex<()>>>,
}

impl<S: ChainStore> ChainAppender<S> {
    pub fn new(builder: PayloadBuilder, store: S) -> Self {
        Self {
            builder,
            store,
            chain_locks: DashMap::new(),
        }
    }

    /// Record one invoice lifecycle event on the tenant's chain.
    ///
    /// Returns the new link: the record's digest and the digest it chains
    /// from ([`SEED_HASH`] for a tenant's first record).
    #[instrument(
        skip(self, facts),
        fields(tenant_id = %facts.tenant_id, event_type = %event_type)
    )]
    pub async fn record_event(
        &self,
        facts: &InvoiceFacts,
        event_type: EventType,
        actor_id: &str,
    ) -> Result<ChainLink, ChainError> {
        let lock = self
            .chain_locks
            .entry(facts.tenant_id)
            .or_default()
            .clone();
        let _guard = lock.lock().await;

        let previous_hash = self
            .store
            .latest_hash(facts.tenant_id)
            .await?
            .unwrap_or_else(|| SEED_HASH.to_string());

        let payload = self.builder.build(facts, event_type, actor_id)?;
        let payload_hash = calculate_hash(&payload, &previous_hash)?;

        let invoice_number = payload.invoice_number.clone();
        self.store
            .append(
                facts.tenant_id,
                ChainRecord {
                    payload,
                    stored_hash: payload_hash.clone(),
                },
            )
            .await?;

        CHAIN_RECORDS_TOTAL
            .with_label_values(&[event_type.as_str()])
            .inc();
        info!(invoice_number = %invoice_number, "Chain record appended");

        Ok(ChainLink {
            payload_hash,
            previous_hash,
        })
    }

    /// Replay and verify the tenant's full stored chain.
    #[instrument(skip(self), fields(tenant_id = %tenant_id))]
    pub async fn verify_tenant_chain(
        &self,
        tenant_id: Uuid,
    ) -> Result<ChainVerification, ChainError> {
        let records = self.store.records(tenant_id).await?;
        Ok(verify_chain(&records))
    }

    /// Access the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
