use axum::http::StatusCode;
use axum::response::Response;

use crate::error::plain_text;

pub async fn ping() -> Response {
    plain_text(StatusCode::OK, "pong")
}
