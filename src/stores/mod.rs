//! Storage layer for the ledger. Provides:
//! - Per-account balance state with its own lock ([`Account`])
//! - The id → account mapping with a separate structural lock ([`Registry`])
//!
//! State is volatile and lives as long as the owning [`crate::Ledger`].

mod accounts;
mod registry;

pub use accounts::{Account, AccountId, AccountSnapshot};
pub use registry::Registry;
