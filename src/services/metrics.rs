//! Prometheus metrics for verifactu-chain.

use once_cell::sync::Lazy;
use prometheus::{register_counter_vec, CounterVec};

/// Chain records appended, by event type.
pub static CHAIN_RECORDS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "verifactu_chain_records_total",
        "Total number of chain records appended",
        &["event_type"] // creation, rectification, void
    )
    .expect("Failed to register chain_records_total")
});

/// Chain verification runs, by outcome.
pub static CHAIN_VERIFICATIONS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "verifactu_chain_verifications_total",
        "Total number of chain verification runs",
        &["outcome"] // valid, broken
    )
    .expect("Failed to register chain_verifications_total")
});
