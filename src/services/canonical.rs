//! Canonical serialization of invoice record payloads.
//!
//! The byte layout is the internal contract between the payload builder and the
//! hash function, and it is FROZEN: JSON with struct-declaration field order,
//! monetary amounts as fixed two-decimal strings, timestamps as whole-second
//! RFC 3339 UTC with a `Z` suffix, line descriptions as a JSON array in input
//! order, and absent customer fields omitted entirely. Any change breaks
//! verifiability of historical chains.

use crate::error::ChainError;
use crate::models::InvoiceRecordPayload;

/// Serialize a payload to its canonical byte form.
pub fn canonical_serialize(payload: &InvoiceRecordPayload) -> Result<String, ChainError> {
    serde_json::to_string(payload)
        .map_err(|e| ChainError::InvalidPayload(format!("canonical serialization failed: {}", e)))
}

/// Fixed two-decimal string encoding for monetary amounts. Never binary floats:
/// the same logical value must serialize identically on every platform.
pub mod money {
    use rust_decimal::Decimal;
    use serde::{self, Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{:.2}", value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Decimal::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Whole-second RFC 3339 UTC encoding for event timestamps.
pub mod rfc3339_utc {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
