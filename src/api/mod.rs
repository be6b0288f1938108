//! HTTP request layer: decodes requests into ledger calls and maps results
//! back to status codes and JSON payloads.

mod dto;
mod errors;
mod handlers;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    timeout::{RequestBodyTimeoutLayer, ResponseBodyTimeoutLayer, TimeoutLayer},
    trace::TraceLayer,
};

use crate::Ledger;

pub use dto::{
    AccountListResponse, AccountResponse, AmountRequest, BalanceResponse, CreateAccountRequest,
};

/// Routes only, without middleware.
pub fn router(ledger: Arc<Ledger>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/accounts",
            post(handlers::create_account).get(handlers::list_accounts),
        )
        .route("/accounts/:id/deposit", post(handlers::deposit))
        .route("/accounts/:id/withdraw", post(handlers::withdraw))
        .route("/accounts/:id/balance", get(handlers::get_balance))
        .with_state(ledger)
}

/// Per-request deadlines applied by [`app`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    /// Whole request, answered with 408 when exceeded.
    pub request: Duration,
    /// Longest pause while receiving the request body.
    pub read: Duration,
    /// Longest pause while sending the response body.
    pub write: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            request: Duration::from_secs(4),
            read: Duration::from_secs(4),
            write: Duration::from_secs(4),
        }
    }
}

/// Routes with request tracing and the configured timeouts.
///
/// The response body timeout wraps the request timeout, which must see the
/// plain response body type to build its 408 response.
pub fn app(ledger: Arc<Ledger>, timeouts: Timeouts) -> Router {
    router(ledger).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(ResponseBodyTimeoutLayer::new(timeouts.write))
            .layer(TimeoutLayer::new(timeouts.request))
            .layer(RequestBodyTimeoutLayer::new(timeouts.read)),
    )
}
