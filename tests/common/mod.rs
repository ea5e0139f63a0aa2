//! Shared fixtures for verifactu-chain integration tests.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;
use verifactu_chain::config::ProducerIdentity;
use verifactu_chain::models::InvoiceFacts;
use verifactu_chain::services::PayloadBuilder;

pub const TEST_ACTOR: &str = "user-madrid-1";

pub fn test_producer() -> ProducerIdentity {
    ProducerIdentity::new(
        "llave-facturacion",
        "1.0.0",
        "B00000000",
        "La Llave Software SL",
    )
}

pub fn test_builder() -> PayloadBuilder {
    PayloadBuilder::new(test_producer())
}

pub fn test_issued_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 10, 30, 0).unwrap()
}

/// Invoice facts for sequence `n` of the TEST series: one line "Producto 1",
/// 100.00 + 21% VAT = 121.00.
pub fn sample_facts(tenant_id: Uuid, sequence_number: i64) -> InvoiceFacts {
    InvoiceFacts {
        tenant_id,
        tenant_tax_id: "B11111111".to_string(),
        tenant_business_name: "Asesoria Ejemplo SL".to_string(),
        series_code: "TEST".to_string(),
        sequence_number,
        issued_at: test_issued_at(),
        customer_tax_id: Some("X1234567L".to_string()),
        customer_name: Some("Cliente Uno".to_string()),
        subtotal: Decimal::from_str("100.00").unwrap(),
        tax_amount: Decimal::from_str("21.00").unwrap(),
        total: Decimal::from_str("121.00").unwrap(),
        line_descriptions: vec!["Producto 1".to_string()],
    }
}
