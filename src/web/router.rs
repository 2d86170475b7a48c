//! Axum router: maps URL paths to handlers.

use super::handlers::{calcular, grupos, index};
use super::state::{AppState, SharedState};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        .route("/", get(index))
        .route("/calcular", post(calcular))
        .route("/grupos", get(grupos))
        // requests from other origins are allowed
        .layer(CorsLayer::permissive())
        .with_state(shared)
}
