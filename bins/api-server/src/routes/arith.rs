use arith_core::{parse_params, Operation};
use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::response::Response;

use crate::error::{plain_text, ApiError};
use crate::AppState;

/// Parse then compute for one of the two-operand endpoints.
pub async fn compute(
    operation: Operation,
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, ApiError> {
    let inputs = parse_params(query.as_deref(), operation.required_params()).map_err(|err| {
        tracing::debug!(operation = operation.name(), error = %err, "rejected parameters");
        err
    })?;

    let body = operation.dispatch(state.math.as_ref(), &inputs);
    Ok(plain_text(StatusCode::OK, body))
}
