use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler::{self, AppState};

/// Build the axum router with all confdiff endpoints.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/v1/health", get(handler::health_handler))
        .route("/v1/info", get(handler::info_handler))
        .route("/v1/permalinks", post(handler::save_permalink_handler))
        .route("/v1/permalinks/:id", get(handler::load_permalink_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
