// Status route definitions

use axum::{
    routing::get,
    Router,
};

use crate::config::state::AppState;
use super::handler;

/// Creates router with the three public endpoints
pub fn status_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handler::health_handler))
        .route("/", get(handler::home_handler))
        .route("/api/info", get(handler::info_handler))
}
