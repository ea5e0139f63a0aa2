//! Services module for verifactu-chain: payload building, canonical
//! serialization, hashing, verification, and the append discipline.

pub mod appender;
pub mod builder;
pub mod canonical;
pub mod hasher;
pub mod metrics;
pub mod store;
pub mod verifier;

pub use appender::ChainAppender;
pub use builder::PayloadBuilder;
pub use canonical::canonical_serialize;
pub use hasher::calculate_hash;
pub use store::{ChainStore, InMemoryChainStore};
pub use verifier::verify_chain;
