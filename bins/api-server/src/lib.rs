pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use arith_core::{MathService, StandardMath};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::routes::{api_routes, not_found};

#[derive(Clone)]
pub struct AppState {
    pub math: Arc<dyn MathService>,
}

impl AppState {
    pub fn new(math: Arc<dyn MathService>) -> Self {
        Self { math }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(StandardMath::new()))
    }
}

/// Full HTTP surface with request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(api_routes())
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
