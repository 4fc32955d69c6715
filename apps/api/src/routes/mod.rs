pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::prediction::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/options", get(handlers::handle_options))
        .route("/api/v1/predict", post(handlers::handle_predict))
        .route("/api/v1/report", post(handlers::handle_report))
        .with_state(state)
}
