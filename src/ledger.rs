use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::dto::{Operation, OperationType};
use crate::stores::{AccountId, AccountSnapshot, Registry};
use crate::Error;

/// The four ledger calls, shared by every request worker through `&self`.
///
/// Each call resolves the account through the registry once and then works on
/// that account alone. Every outcome is written to the audit log after the
/// operation has committed or been rejected.
#[derive(Debug, Default)]
pub struct Ledger {
    registry: Registry,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    pub fn create_account(&self, id: AccountId) -> Result<AccountSnapshot, Error> {
        let result = self.registry.create(id).map(|account| account.snapshot());
        audit("create_account", id, Decimal::ZERO, result)
    }

    /// Returns the balance right after this deposit.
    pub fn deposit(&self, id: AccountId, amount: Decimal) -> Result<Decimal, Error> {
        let result = self
            .registry
            .lookup(id)
            .and_then(|account| account.deposit(amount));
        audit("deposit", id, amount, result)
    }

    /// Returns the balance right after this withdrawal.
    pub fn withdraw(&self, id: AccountId, amount: Decimal) -> Result<Decimal, Error> {
        let result = self
            .registry
            .lookup(id)
            .and_then(|account| account.withdraw(amount));
        audit("withdraw", id, amount, result)
    }

    pub fn get_balance(&self, id: AccountId) -> Result<Decimal, Error> {
        match self.registry.lookup(id) {
            Ok(account) => {
                let balance = account.balance();
                audit("get_balance", id, balance, Ok(balance))
            }
            Err(err) => audit("get_balance", id, Decimal::ZERO, Err(err)),
        }
    }

    /// All accounts sorted by id. Each balance is read under its own account
    /// lock, so the listing is not a single global snapshot.
    pub fn accounts(&self) -> Vec<AccountSnapshot> {
        let mut accounts: Vec<_> = self
            .registry
            .accounts()
            .iter()
            .map(|account| account.snapshot())
            .collect();
        accounts.sort_by_key(|account| account.id);
        accounts
    }

    /// Applies one replay row. Deposits and withdrawals without an amount are invalid.
    pub fn apply(&self, operation: Operation) -> Result<(), Error> {
        match operation.op {
            OperationType::Create => self.create_account(operation.id).map(|_| ()),
            OperationType::Deposit => {
                let amount = operation.amount.ok_or(Error::InvalidAmount)?;
                self.deposit(operation.id, amount).map(|_| ())
            }
            OperationType::Withdraw => {
                let amount = operation.amount.ok_or(Error::InvalidAmount)?;
                self.withdraw(operation.id, amount).map(|_| ())
            }
        }
    }
}

fn audit<T>(
    operation: &'static str,
    account_id: AccountId,
    amount: Decimal,
    result: Result<T, Error>,
) -> Result<T, Error> {
    match &result {
        Ok(_) => info!(operation, account_id, %amount, "ledger operation applied"),
        Err(err) => debug!(operation, account_id, %amount, error = %err, "ledger operation rejected"),
    }
    result
}
