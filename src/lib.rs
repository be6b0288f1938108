pub mod api;
pub mod config;
pub mod csv_utils;
pub mod dto;
mod error;
mod ledger;
pub mod runner;
pub mod server;
mod stores;
pub mod telemetry;

pub use dto::{AccountRow, Operation, OperationType};
pub use error::Error;
pub use ledger::Ledger;
pub use runner::{run, run_async};
pub use stores::{Account, AccountId, AccountSnapshot, Registry};
