//! Payload builder: invoice facts in, canonical record payload out.

use crate::config::ProducerIdentity;
use crate::error::ChainError;
use crate::models::{EventType, InvoiceFacts, InvoiceRecordPayload};
use chrono::SubsecRound;

/// Euro invoices carry two decimal places.
const MONEY_SCALE: u32 = 2;

/// Builds [`InvoiceRecordPayload`]s for a fixed producer identity.
///
/// Building is a pure function of the supplied facts: no wall-clock capture
/// beyond `issued_at`, no mutable aggregates. Two calls with identical facts
/// produce byte-identical payloads under canonical serialization.
#[derive(Debug, Clone)]
pub struct PayloadBuilder {
    producer: ProducerIdentity,
}

impl PayloadBuilder {
    pub fn new(producer: ProducerIdentity) -> Self {
        Self { producer }
    }

    /// Assemble the payload for one invoice lifecycle event.
    pub fn build(
        &self,
        facts: &InvoiceFacts,
        event_type: EventType,
        actor_id: &str,
    ) -> Result<InvoiceRecordPayload, ChainError> {
        require("actor_id", actor_id)?;
        require("tenant_tax_id", &facts.tenant_tax_id)?;
        require("tenant_business_name", &facts.tenant_business_name)?;
        require("series_code", &facts.series_code)?;

        if facts.sequence_number < 1 {
            return Err(ChainError::InvalidPayloadInput(format!(
                "sequence_number must be positive, got {}",
                facts.sequence_number
            )));
        }
        if facts.line_descriptions.is_empty() {
            return Err(ChainError::InvalidPayloadInput(
                "an invoice must have at least one line description".to_string(),
            ));
        }

        Ok(InvoiceRecordPayload {
            system_id: self.producer.system_id.clone(),
            system_version: self.producer.system_version.clone(),
            producer_tax_id: self.producer.producer_tax_id.clone(),
            producer_name: self.producer.producer_name.clone(),
            invoice_number: format!("{}-{:06}", facts.series_code, facts.sequence_number),
            // Canonical timestamps are whole-second; drop subseconds here so
            // payload equality matches byte equality.
            issued_at: facts.issued_at.trunc_subsecs(0),
            event_type,
            tenant_tax_id: facts.tenant_tax_id.clone(),
            tenant_business_name: facts.tenant_business_name.clone(),
            customer_tax_id: facts.customer_tax_id.clone(),
            customer_name: facts.customer_name.clone(),
            subtotal: facts.subtotal.round_dp(MONEY_SCALE),
            tax_amount: facts.tax_amount.round_dp(MONEY_SCALE),
            total: facts.total.round_dp(MONEY_SCALE),
            line_descriptions: facts.line_descriptions.clone(),
            actor_id: actor_id.to_string(),
        })
    }
}

fn require(field: &str, value: &str) -> Result<(), ChainError> {
    if value.trim().is_empty() {
        return Err(ChainError::InvalidPayloadInput(format!(
            "{} is required",
            field
        )));
    }
    Ok(())
}
