//! Invoice record payload and its input facts.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Invoice lifecycle event captured by a chain record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Creation,
    Rectification,
    Void,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Creation => "creation",
            EventType::Rectification => "rectification",
            EventType::Void => "void",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "rectification" => EventType::Rectification,
            "void" => EventType::Void,
            _ => EventType::Creation,
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Read-only view of the persisted invoice state at the moment of an event.
///
/// Combines the invoice header, tenant identity, series code, customer identity,
/// and ordered line descriptions. Customer identity may be absent for simplified
/// (anonymous) invoices; everything else is required.
#[derive(Debug, Clone)]
pub struct InvoiceFacts {
    pub tenant_id: Uuid,
    pub tenant_tax_id: String,
    pub tenant_business_name: String,
    pub series_code: String,
    pub sequence_number: i64,
    pub issued_at: DateTime<Utc>,
    pub customer_tax_id: Option<String>,
    pub customer_name: Option<String>,
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub total: Decimal,
    pub line_descriptions: Vec<String>,
}

/// Canonical, immutable snapshot of one invoice lifecycle event.
///
/// Field declaration order is the canonical serialization order and is frozen:
/// changing it (or any field's encoding) breaks verifiability of every
/// historical chain. Amounts serialize as fixed two-decimal strings and
/// `issued_at` as whole-second RFC 3339 UTC; see `services::canonical`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecordPayload {
    pub system_id: String,
    pub system_version: String,
    pub producer_tax_id: String,
    pub producer_name: String,
    pub invoice_number: String,
    #[serde(with = "crate::services::canonical::rfc3339_utc")]
    pub issued_at: DateTime<Utc>,
    pub event_type: EventType,
    pub tenant_tax_id: String,
    pub tenant_business_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_tax_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(with = "crate::services::canonical::money")]
    pub subtotal: Decimal,
    #[serde(with = "crate::services::canonical::money")]
    pub tax_amount: Decimal,
    #[serde(with = "crate::services::canonical::money")]
    pub total: Decimal,
    pub line_descriptions: Vec<String>,
    pub actor_id: String,
}
