pub mod arith;
pub mod ping;

use arith_core::Operation;
use axum::extract::{RawQuery, State};
use axum::http::Method;
use axum::routing::get;
use axum::Router;

use crate::error::ApiError;
use crate::AppState;

pub fn api_routes() -> Router<AppState> {
    let router = Router::new().route(
        "/ping",
        get(ping::ping)
            .head(method_not_allowed)
            .fallback(method_not_allowed),
    );

    Operation::ALL.into_iter().fold(router, |router, operation| {
        router.route(
            operation.path(),
            get(move |state: State<AppState>, query: RawQuery| {
                arith::compute(operation, state, query)
            })
            // `get` would otherwise answer HEAD too.
            .head(method_not_allowed)
            .fallback(method_not_allowed),
        )
    })
}

async fn method_not_allowed(method: Method) -> ApiError {
    tracing::debug!(%method, "rejected request method");
    ApiError::MethodNotAllowed
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
