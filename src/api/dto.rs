use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AccountId, AccountSnapshot};

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateAccountRequest {
    pub id: AccountId,
}

/// Body of deposit and withdraw requests. Accepts a JSON number or a numeric
/// string; the amount is applied at full precision.
#[derive(Debug, Serialize, Deserialize)]
pub struct AmountRequest {
    pub amount: Decimal,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AccountResponse {
    pub id: AccountId,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

impl From<AccountSnapshot> for AccountResponse {
    fn from(snapshot: AccountSnapshot) -> Self {
        Self {
            id: snapshot.id,
            balance: snapshot.balance,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct BalanceResponse {
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AccountListResponse {
    pub items: Vec<AccountResponse>,
}
