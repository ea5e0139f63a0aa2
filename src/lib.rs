//! verifactu-chain: tamper-evident, append-only integrity chain for invoice
//! lifecycle events under the Spanish VERI*FACTU/SIF regime.
//!
//! Every invoice lifecycle event (creation, rectification, void) is captured as a
//! canonical [`models::InvoiceRecordPayload`] and linked to its predecessor by a
//! SHA-256 digest, forming one hash chain per tenant. Issuance workflows append
//! through [`services::ChainAppender`]; audit and export workflows replay stored
//! records through [`services::verify_chain`] before producing regulatory exports.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
