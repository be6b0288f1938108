use rust_decimal::Decimal;
use std::sync::{PoisonError, RwLock};

use crate::Error;

pub type AccountId = i64;

/// A single ledger entry.
///
/// The balance sits behind the account's own lock, so mutations on one account
/// never wait on another account. Deposit and withdraw hold the write lock for
/// the whole check-then-update; balance reads share the read lock and can only
/// observe committed values.
#[derive(Debug)]
pub struct Account {
    id: AccountId,
    balance: RwLock<Decimal>,
}

/// Point-in-time copy of an account, safe to hand out past the lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountSnapshot {
    pub id: AccountId,
    pub balance: Decimal,
}

impl Account {
    pub(crate) fn new(id: AccountId) -> Self {
        Self {
            id,
            balance: RwLock::new(Decimal::ZERO),
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    /// Credits `amount` and returns the resulting balance.
    /// An amount too large to be represented is rejected as invalid.
    pub fn deposit(&self, amount: Decimal) -> Result<Decimal, Error> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount);
        }
        let mut balance = self.balance.write().unwrap_or_else(PoisonError::into_inner);
        *balance = balance.checked_add(amount).ok_or(Error::InvalidAmount)?;
        Ok(*balance)
    }

    /// Debits `amount` and returns the resulting balance.
    /// The funds check and the debit happen under the same write lock.
    pub fn withdraw(&self, amount: Decimal) -> Result<Decimal, Error> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount);
        }
        let mut balance = self.balance.write().unwrap_or_else(PoisonError::into_inner);
        if *balance < amount {
            return Err(Error::InsufficientFunds);
        }
        *balance -= amount;
        Ok(*balance)
    }

    pub fn balance(&self) -> Decimal {
        *self.balance.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            id: self.id,
            balance: self.balance(),
        }
    }
}
