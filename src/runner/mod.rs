//! The runner replays a CSV file of ledger operations, either into a fresh
//! ledger whose balances are then written out as CSV, or into a shared ledger
//! that is about to be served.
//!
//! This module provides both a synchronous and an asynchronous runner implementations.
//!
mod async_runner;
mod sync_runner;

use std::error::Error;
use std::io::Write;

use crate::{csv_utils::write_csv, dto::AccountRow, Ledger};

pub use async_runner::{run as run_async, seed, SeedReport};
pub use sync_runner::run;

pub type Result<T, E = Box<dyn Error + Send + Sync>> = std::result::Result<T, E>;

/// Writes every account balance, sorted by id, to the provided writer.
fn write_balances<W: Write>(ledger: &Ledger, writer: W) -> csv::Result<()> {
    write_csv(writer, ledger.accounts().into_iter().map(AccountRow::from))
}
