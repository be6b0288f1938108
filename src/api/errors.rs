use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::Error;

pub fn ledger_error_to_response(err: Error) -> Response {
    let (status, code) = match err {
        Error::InvalidAmount => (StatusCode::BAD_REQUEST, "invalid_amount"),
        Error::InsufficientFunds => (StatusCode::UNPROCESSABLE_ENTITY, "insufficient_funds"),
        Error::AlreadyExists => (StatusCode::CONFLICT, "already_exists"),
        Error::AccountNotFound => (StatusCode::NOT_FOUND, "not_found"),
    };
    json_error(status, code, err.to_string())
}

pub fn json_rejection_to_response(rejection: JsonRejection) -> Response {
    json_error(StatusCode::BAD_REQUEST, "bad_request", rejection.body_text())
}

pub fn path_rejection_to_response(rejection: PathRejection) -> Response {
    json_error(StatusCode::BAD_REQUEST, "bad_request", rejection.body_text())
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
