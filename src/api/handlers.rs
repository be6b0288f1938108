//! Request handlers.
//!
//! Ledger calls are synchronous and there is no `.await` between resolving an
//! account and committing its mutation, so a dropped request (client gone,
//! timeout) either never started the operation or already finished it.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde_json::json;

use super::dto::{
    AccountListResponse, AccountResponse, AmountRequest, BalanceResponse, CreateAccountRequest,
};
use super::errors;
use crate::{AccountId, Error, Ledger};

type IdPath = Result<Path<AccountId>, PathRejection>;
type JsonBody<T> = Result<Json<T>, JsonRejection>;

pub async fn health() -> Response {
    (StatusCode::OK, Json(json!({ "status": "ok" }))).into_response()
}

/// POST /accounts
pub async fn create_account(
    State(ledger): State<Arc<Ledger>>,
    body: JsonBody<CreateAccountRequest>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match ledger.create_account(body.id) {
        Ok(account) => (StatusCode::CREATED, Json(AccountResponse::from(account))).into_response(),
        Err(err) => errors::ledger_error_to_response(err),
    }
}

/// GET /accounts
pub async fn list_accounts(State(ledger): State<Arc<Ledger>>) -> Response {
    let items = ledger
        .accounts()
        .into_iter()
        .map(AccountResponse::from)
        .collect();
    (StatusCode::OK, Json(AccountListResponse { items })).into_response()
}

/// POST /accounts/:id/deposit
pub async fn deposit(
    State(ledger): State<Arc<Ledger>>,
    id: IdPath,
    body: JsonBody<AmountRequest>,
) -> Response {
    let (id, amount) = match decode_amount_request(id, body) {
        Ok(decoded) => decoded,
        Err(response) => return response,
    };
    balance_response(id, ledger.deposit(id, amount))
}

/// POST /accounts/:id/withdraw
pub async fn withdraw(
    State(ledger): State<Arc<Ledger>>,
    id: IdPath,
    body: JsonBody<AmountRequest>,
) -> Response {
    let (id, amount) = match decode_amount_request(id, body) {
        Ok(decoded) => decoded,
        Err(response) => return response,
    };
    balance_response(id, ledger.withdraw(id, amount))
}

/// GET /accounts/:id/balance
pub async fn get_balance(State(ledger): State<Arc<Ledger>>, id: IdPath) -> Response {
    let Path(id) = match id {
        Ok(id) => id,
        Err(rejection) => return errors::path_rejection_to_response(rejection),
    };

    match ledger.get_balance(id) {
        Ok(balance) => (StatusCode::OK, Json(BalanceResponse { balance })).into_response(),
        Err(err) => errors::ledger_error_to_response(err),
    }
}

fn decode_amount_request(
    id: IdPath,
    body: JsonBody<AmountRequest>,
) -> Result<(AccountId, Decimal), Response> {
    let Path(id) = id.map_err(errors::path_rejection_to_response)?;
    let Json(body) = body.map_err(errors::json_rejection_to_response)?;
    Ok((id, body.amount))
}

fn balance_response(id: AccountId, result: Result<Decimal, Error>) -> Response {
    match result {
        Ok(balance) => (StatusCode::OK, Json(AccountResponse { id, balance })).into_response(),
        Err(err) => errors::ledger_error_to_response(err),
    }
}
