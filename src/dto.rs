use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

use crate::{AccountId, AccountSnapshot};

/// Replay amounts carry at most this many decimal places; extra digits are truncated.
pub const AMOUNT_DECIMAL_PLACES: u32 = 4;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Create,
    Deposit,
    Withdraw,
}

/// One row of a batch replay file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Operation {
    pub op: OperationType,
    pub id: AccountId,
    #[serde(deserialize_with = "deserialize_optional_amount")]
    pub amount: Option<Decimal>,
}

/// One row of balance output.
#[derive(Debug, Serialize, PartialEq)]
pub struct AccountRow {
    pub id: AccountId,
    pub balance: Decimal,
}

impl From<AccountSnapshot> for AccountRow {
    fn from(snapshot: AccountSnapshot) -> Self {
        Self {
            id: snapshot.id,
            balance: snapshot.balance,
        }
    }
}

pub fn truncate_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(AMOUNT_DECIMAL_PLACES, RoundingStrategy::ToZero)
}

fn deserialize_optional_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Decimal>::deserialize(deserializer).map(|amount| amount.map(truncate_amount))
}
