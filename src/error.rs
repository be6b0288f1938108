//! Domain-specific errors for the account ledger.
//!
//! Every variant is a rejected request: the operation that returned it left
//! the account balance and the registry membership exactly as they were.
//! Technical failures like I/O or CSV parsing are not represented here.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("account already exists")]
    AlreadyExists,
    #[error("account not found")]
    AccountNotFound,
    #[error("insufficient funds")]
    InsufficientFunds,
    #[error("amount must be positive")]
    InvalidAmount,
}
