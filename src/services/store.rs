//! Append-only chain storage seam.

use crate::error::ChainError;
use crate::models::ChainRecord;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Append-only persistence for per-tenant chains.
///
/// Implementations must never update or delete a stored record; issued
/// records are immutable and can only be superseded by new rectifying
/// records.
#[async_trait]
pub trait ChainStore: Send + Sync {
    /// Digest of the most recent record in the tenant's chain, if any.
    async fn latest_hash(&self, tenant_id: Uuid) -> Result<Option<String>, ChainError>;

    /// Append one record to the tail of the tenant's chain.
    async fn append(&self, tenant_id: Uuid, record: ChainRecord) -> Result<(), ChainError>;

    /// Full ordered chain for a tenant, oldest record first.
    async fn records(&self, tenant_id: Uuid) -> Result<Vec<ChainRecord>, ChainError>;
}

/// In-memory reference store, one record vector per tenant.
#[derive(Debug, Clone, Default)]
pub struct InMemoryChainStore {
    chains: Arc<DashMap<Uuid, Vec<ChainRecord>>>,
}

impl InMemoryChainStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChainStore for InMemoryChainStore {
    async fn latest_hash(&self, tenant_id: Uuid) -> Result<Option<String>, ChainError> {
        Ok(self
            .chains
            .get(&tenant_id)
            .and_then(|chain| chain.last().map(|record| record.stored_hash.clone())))
    }

    async fn append(&self, tenant_id: Uuid, record: ChainRecord) -> Result<(), ChainError> {
        self.chains.entry(tenant_id).or_default().push(record);
        Ok(())
    }

    async fn records(&self, tenant_id: Uuid) -> Result<Vec<ChainRecord>, ChainError> {
        Ok(self
            .chains
            .get(&tenant_id)
            .map(|chain| chain.clone())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventType, InvoiceRecordPayload};
    use chrono::TimeZone;
    use rust_decimal::Decimal;

    fn record(invoice_number: &str, stored_hash: &str) -> ChainRecord {
        ChainRecord {
            payload: InvoiceRecordPayload {
                system_id: "llave-facturacion".to_string(),
                system_version: "1.0.0".to_string(),
                producer_tax_id: "B00000000".to_string(),
                producer_name: "La Llave Software SL".to_string(),
                invoice_number: invoice_number.to_string(),
                issued_at: chrono::Utc.with_ymd_and_hms(2026, 1, 15, 10, 30, 0).unwrap(),
                event_type: EventType::Creation,
                tenant_tax_id: "B11111111".to_string(),
                tenant_business_name: "Asesoria Ejemplo SL".to_string(),
                customer_tax_id: None,
                customer_name: None,
                subtotal: Decimal::new(10000, 2),
                tax_amount: Decimal::new(2100, 2),
                total: Decimal::new(12100, 2),
                line_descriptions: vec!["Producto 1".to_string()],
                actor_id: "user-1".to_string(),
            },
            stored_hash: stored_hash.to_string(),
        }
    }

    #[tokio::test]
    async fn latest_hash_is_none_for_unknown_tenant() {
        let store = InMemoryChainStore::new();
        assert!(store.latest_hash(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn append_preserves_insertion_order() {
        let store = InMemoryChainStore::new();
        let tenant_id = Uuid::new_v4();

        store.append(tenant_id, record("TEST-000001", "aa")).await.unwrap();
        store.append(tenant_id, record("TEST-000002", "bb")).await.unwrap();

        let records = store.records(tenant_id).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].payload.invoice_number, "TEST-000001");
        assert_eq!(records[1].payload.invoice_number, "TEST-000002");
        assert_eq!(store.latest_hash(tenant_id).await.unwrap().as_deref(), Some("bb"));
    }
}
