//! Domain models for verifactu-chain.

mod chain;
mod payload;

pub use chain::{ChainLink, ChainRecord, ChainVerification, SEED_HASH};
pub use payload::{EventType, InvoiceFacts, InvoiceRecordPayload};
