//! Producer identity configuration for verifactu-chain.

use crate::error::ChainError;
use config::{Config as Cfg, File};
use serde::Deserialize;

/// Identity of the invoicing software and its legal producer.
///
/// These values are fixed at deployment time and embedded into every record
/// payload; they must never vary per call.
#[derive(Debug, Clone, Deserialize)]
pub struct ProducerIdentity {
    pub system_id: String,
    #[serde(default = "default_system_version")]
    pub system_version: String,
    pub producer_tax_id: String,
    pub producer_name: String,
}

fn default_system_version() -> String {
    "1.0.0".to_string()
}

impl ProducerIdentity {
    /// Build an identity explicitly (tests, embedded callers).
    pub fn new(
        system_id: impl Into<String>,
        system_version: impl Into<String>,
        producer_tax_id: impl Into<String>,
        producer_name: impl Into<String>,
    ) -> Self {
        Self {
            system_id: system_id.into(),
            system_version: system_version.into(),
            producer_tax_id: producer_tax_id.into(),
            producer_name: producer_name.into(),
        }
    }

    /// Load the identity from `configuration.*` and `VERIFACTU__*` environment
    /// variables.
    pub fn load() -> Result<Self, ChainError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("VERIFACTU").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
