//! Observability HTTP Routes
//!
//! Health check and store operation counters.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::store::TodoStore;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub records: usize,
}

/// Create `/health` and `/metrics` routes
pub fn observability_routes(store: Arc<TodoStore>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(store)
}

async fn health_handler(State(store): State<Arc<TodoStore>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        records: store.len(),
    };

    (StatusCode::OK, Json(response))
}

async fn metrics_handler(State(store): State<Arc<TodoStore>>) -> impl IntoResponse {
    (StatusCode::OK, Json(store.metrics().snapshot()))
}
