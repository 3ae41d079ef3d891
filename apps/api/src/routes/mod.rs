pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::extraction::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Upload API
        .route("/upload-cv/", post(handlers::handle_upload_cv))
        .route("/upload-cv", post(handlers::handle_upload_cv))
        // Text API
        .route("/api/v1/extract", post(handlers::handle_extract_text))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
